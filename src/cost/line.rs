//! Line evaluator: quantity and cost of one cost item for one scenario.

use crate::scenario::Scenario;
use crate::units::ShipmentUnits;

use super::{Behavior, CostItem};

/// Everything a behavior formula can draw on, resolved once per scenario.
#[derive(Clone, Copy, Debug)]
pub struct LineContext<'a> {
    pub scenario: &'a Scenario,
    pub units: ShipmentUnits,
    /// Volume times effective sell price.
    pub revenue: f64,
    /// Volume times buy price.
    pub cogs: f64,
}

/// Evaluated quantity and cost of one line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineCost {
    pub quantity: f64,
    pub cost_usd: f64,
}

impl Behavior {
    /// Quantity this behavior multiplies. Selected per behavior, never looked
    /// up through the item's `qty_source` label.
    pub fn quantity(self, ctx: &LineContext<'_>) -> f64 {
        match self {
            Behavior::PerTon => ctx.scenario.volume_mt,
            Behavior::PerContainer => ctx.units.containers as f64,
            Behavior::PerTruck => ctx.units.trucks as f64,
            Behavior::PerMonth => ctx.scenario.storage_months,
            Behavior::FixedPerShipment | Behavior::PercentOfValue | Behavior::PercentOfCogs => 1.0,
        }
    }
}

/// Evaluate one cost item against a scenario.
pub fn evaluate(item: &CostItem, ctx: &LineContext<'_>) -> LineCost {
    let quantity = item.behavior.quantity(ctx);
    let cost_usd = match item.behavior {
        Behavior::PerTon | Behavior::PerContainer | Behavior::PerTruck | Behavior::PerMonth => {
            quantity * item.unit_amount_usd
        }
        Behavior::FixedPerShipment => item.unit_amount_usd,
        Behavior::PercentOfValue => ctx.revenue * item.unit_amount_usd,
        Behavior::PercentOfCogs => ctx.cogs * item.unit_amount_usd,
    };
    LineCost { quantity, cost_usd }
}
