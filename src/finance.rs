//! Financing cost from net working capital.
//!
//! Capital is tied up in receivables (sell side) and inventory (storage),
//! offset by payables (buy side). The annual rate is charged on whatever
//! remains.

use log::warn;

use crate::scenario::Scenario;

/// Days in a financing year.
pub const DAYS_PER_YEAR: f64 = 365.0;
/// Days counted per month of storage.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Working-capital components of one shipment, in USD.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkingCapital {
    pub receivables: f64,
    pub inventory: f64,
    pub payables: f64,
    /// `max(0, receivables + inventory - payables)`
    pub net: f64,
}

impl WorkingCapital {
    pub fn new(scenario: &Scenario, revenue: f64, cogs: f64) -> Self {
        let inventory_days = (scenario.storage_months * DAYS_PER_MONTH).max(0.0);
        let receivables = revenue * (scenario.dso_sell_days as f64 / DAYS_PER_YEAR);
        let inventory = cogs * (inventory_days / DAYS_PER_YEAR);
        let payables = cogs * (scenario.dpo_buy_days as f64 / DAYS_PER_YEAR);
        let net = (receivables + inventory - payables).max(0.0);
        Self {
            receivables,
            inventory,
            payables,
            net,
        }
    }
}

/// Annual financing cost on the shipment's net working capital.
///
/// Best effort: a non-finite result (NaN or infinite rate, overflowing
/// inputs) is reported and replaced by zero instead of poisoning the totals.
pub fn finance_cost(scenario: &Scenario, revenue: f64, cogs: f64) -> f64 {
    let wc = WorkingCapital::new(scenario, revenue, cogs);
    let cost = (scenario.annual_finance_rate_pct / 100.0) * wc.net;
    if cost.is_finite() {
        cost
    } else {
        warn!(
            "finance cost for {} is not finite (rate {}%, nwc {}); using 0",
            scenario.destination, scenario.annual_finance_rate_pct, wc.net
        );
        0.0
    }
}
