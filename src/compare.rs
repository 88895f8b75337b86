//! Run one shipment against several destinations, or many scenarios at once.

use crate::cost::CostItem;
use crate::engine::{self, ComputeResult};
use crate::pricing::SellPriceTable;
use crate::scenario::Scenario;

/// A destination to compare, with an optional sell price override.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DestinationQuote {
    pub destination: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sell_usd_per_mt: Option<f64>,
}

impl DestinationQuote {
    pub fn listed(destination: &str) -> Self {
        Self {
            destination: destination.to_ascii_uppercase(),
            sell_usd_per_mt: None,
        }
    }

    pub fn at(destination: &str, sell_usd_per_mt: f64) -> Self {
        Self {
            destination: destination.to_ascii_uppercase(),
            sell_usd_per_mt: Some(sell_usd_per_mt),
        }
    }
}

/// One destination's outcome in a comparison.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub destination: String,
    /// Sell price the destination was computed with.
    pub sell_price_per_mt: f64,
    pub result: ComputeResult,
}

/// Compute `base` once per quote, in quote order.
///
/// The base scenario's own sell price belongs to its own destination and is
/// discarded. Each destination is priced from its quote override, else from
/// `prices`, else at the buy price.
pub fn compare_destinations(
    base: &Scenario,
    quotes: &[DestinationQuote],
    cost_items: &[CostItem],
    prices: &SellPriceTable,
) -> Vec<Comparison> {
    quotes
        .iter()
        .map(|quote| {
            let mut scenario = Scenario {
                destination: quote.destination.to_ascii_uppercase(),
                sell_price_per_mt: quote.sell_usd_per_mt,
                ..base.clone()
            };
            prices.price_scenario(&mut scenario);
            Comparison {
                sell_price_per_mt: scenario.effective_sell_price(),
                result: engine::compute(&scenario, cost_items),
                destination: scenario.destination,
            }
        })
        .collect()
}

/// The comparison with the highest net margin.
pub fn best_margin(comparisons: &[Comparison]) -> Option<&Comparison> {
    comparisons
        .iter()
        .max_by(|a, b| a.result.kpis.net_margin.total_cmp(&b.result.kpis.net_margin))
}

/// Compute many scenarios against one cost snapshot in parallel, preserving
/// input order.
///
/// ```ignore
/// use landed_cost::{compare, default_cost_items, Scenario};
///
/// let items = default_cost_items();
/// let scenarios: Vec<_> = (1..=10)
///     .map(|i| Scenario::new("LUB", 100.0 * i as f64, 380.0))
///     .collect();
/// let results = compare::sweep(&scenarios, &items);
/// assert_eq!(results.len(), 10);
/// ```
#[cfg(feature = "parallel")]
pub fn sweep(scenarios: &[Scenario], cost_items: &[CostItem]) -> Vec<ComputeResult> {
    use rayon::prelude::*;

    scenarios
        .par_iter()
        .map(|s| engine::compute(s, cost_items))
        .collect()
}
