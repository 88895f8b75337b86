//! Scenario computation: lines, subtotals and KPIs.

use log::debug;

use crate::cost::{self, Category, CostItem, LineContext};
use crate::finance;
use crate::route;
use crate::scenario::Scenario;
use crate::units::{self, ShipmentUnits};

/// Headline figures of a computation, in USD unless noted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kpis {
    pub gross_revenue: f64,
    pub total_cost: f64,
    pub net_margin: f64,
    /// Fraction of revenue (0.1 = 10%). Zero when revenue is zero.
    pub net_margin_pct: f64,
    /// Zero when volume is zero.
    pub net_margin_per_mt: f64,
    /// Sell price per MT at which the margin is nil. Zero when volume is zero.
    pub break_even_sell_per_mt: f64,
}

/// One evaluated cost item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineDetail {
    pub code: String,
    pub name: String,
    pub category: Category,
    pub quantity: f64,
    pub unit: String,
    pub unit_amount_usd: f64,
    pub cost_usd: f64,
}

/// Cost decomposition of a computation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakdown {
    pub cogs: f64,
    /// Sum of logistics-category lines.
    pub logistics_excl_cogs_ins: f64,
    /// Sum of insurance-category lines.
    pub insurance: f64,
    pub shrinkage: f64,
    pub finance: f64,
    pub partner_profit: f64,
    /// Every matched, non-product cost item, in cost-table order.
    pub lines: Vec<LineDetail>,
    /// (origin, destination) legs; empty for an unknown destination.
    pub route_legs: Vec<(String, String)>,
}

/// Output of [`compute`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputeResult {
    pub kpis: Kpis,
    pub breakdown: Breakdown,
    /// Transport units the scenario resolved to.
    pub units: ShipmentUnits,
}

/// `numerator / denominator`, or zero when the denominator is exactly zero.
#[inline]
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Compute landed cost, margin and break-even for one scenario.
///
/// Pure and total: the same scenario and cost snapshot always produce the
/// same result, and no input makes it fail. Items whose scope does not match
/// the destination are skipped, as are product-category placeholders (COGS
/// always comes from the buy price).
pub fn compute(scenario: &Scenario, cost_items: &[CostItem]) -> ComputeResult {
    let sell_unit = scenario.effective_sell_price();
    let volume = scenario.volume_mt;

    let units = units::resolve(volume, scenario.mt_per_container, scenario.mt_per_truck);
    let revenue = volume * sell_unit;
    let cogs = volume * scenario.buy_price_per_mt;

    let ctx = LineContext {
        scenario,
        units,
        revenue,
        cogs,
    };

    let mut lines = Vec::new();
    let mut logistics = 0.0;
    let mut insurance = 0.0;

    for item in cost_items {
        if !cost::matches_scope(&item.dest_scope, &scenario.destination) {
            continue;
        }
        if item.category == Category::Product {
            continue;
        }

        let line = cost::evaluate(item, &ctx);
        match item.category {
            Category::Logistics => logistics += line.cost_usd,
            Category::Insurance => insurance += line.cost_usd,
            Category::Finance | Category::Product => {}
        }

        lines.push(LineDetail {
            code: item.code.clone(),
            name: item.name.clone(),
            category: item.category,
            quantity: line.quantity,
            unit: item.unit.clone(),
            unit_amount_usd: item.unit_amount_usd,
            cost_usd: line.cost_usd,
        });
    }

    let shrinkage = (scenario.shrinkage_pct / 100.0) * cogs;
    let partner_profit = (scenario.partner_profit_pct / 100.0) * sell_unit * volume;
    let finance = finance::finance_cost(scenario, revenue, cogs);

    let total_cost = cogs + logistics + insurance + shrinkage + finance + partner_profit;
    let net_margin = revenue - total_cost;

    debug!(
        "computed {}: {} MT, {} containers, {} trucks, {} lines, total cost {:.2}",
        scenario.destination,
        volume,
        units.containers,
        units.trucks,
        lines.len(),
        total_cost
    );

    ComputeResult {
        kpis: Kpis {
            gross_revenue: revenue,
            total_cost,
            net_margin,
            net_margin_pct: ratio(net_margin, revenue),
            net_margin_per_mt: ratio(net_margin, volume),
            break_even_sell_per_mt: ratio(total_cost, volume),
        },
        breakdown: Breakdown {
            cogs,
            logistics_excl_cogs_ins: logistics,
            insurance,
            shrinkage,
            finance,
            partner_profit,
            lines,
            route_legs: route::route_legs(&scenario.destination)
                .iter()
                .map(|&(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        },
        units,
    }
}

impl ComputeResult {
    /// The line for `code`, if it was matched.
    pub fn line(&self, code: &str) -> Option<&LineDetail> {
        self.breakdown.lines.iter().find(|l| l.code == code)
    }

    /// Sum of every line cost, whatever its category.
    pub fn lines_total(&self) -> f64 {
        self.breakdown.lines.iter().map(|l| l.cost_usd).sum()
    }
}
