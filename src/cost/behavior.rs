//! Cost behavior: the formula family that turns a quantity into a cost.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How a cost item's unit amount is applied to a shipment.
///
/// The set is closed. Unknown tags are rejected when a cost item is parsed,
/// so every item that reaches [`compute`](crate::compute) has a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Behavior {
    /// Unit amount per metric ton shipped.
    PerTon,
    /// Unit amount per container (partial containers billed as full).
    PerContainer,
    /// Unit amount per truck (partial trucks billed as full).
    PerTruck,
    /// Unit amount per month of storage.
    PerMonth,
    /// Flat amount, once per shipment.
    FixedPerShipment,
    /// Fraction of sales revenue (0.02 = 2%).
    PercentOfValue,
    /// Fraction of purchase cost (0.02 = 2%).
    PercentOfCogs,
}

impl Behavior {
    pub const ALL: [Behavior; 7] = [
        Behavior::PerTon,
        Behavior::PerContainer,
        Behavior::PerTruck,
        Behavior::PerMonth,
        Behavior::FixedPerShipment,
        Behavior::PercentOfValue,
        Behavior::PercentOfCogs,
    ];

    /// Wire tag, e.g. `"per_container"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Behavior::PerTon => "per_ton",
            Behavior::PerContainer => "per_container",
            Behavior::PerTruck => "per_truck",
            Behavior::PerMonth => "per_month",
            Behavior::FixedPerShipment => "fixed_per_shipment",
            Behavior::PercentOfValue => "percent_of_value",
            Behavior::PercentOfCogs => "percent_of_cogs",
        }
    }

    /// True if the unit amount is a fraction of a money value rather than a
    /// price per unit.
    #[inline]
    pub fn is_percentage(self) -> bool {
        matches!(self, Behavior::PercentOfValue | Behavior::PercentOfCogs)
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Behavior {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Behavior::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| Error::UnknownBehavior(s.to_string()))
    }
}
