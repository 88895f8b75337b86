//! Cost category: the bucket a line is aggregated into.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Aggregation bucket of a cost item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    /// Purchase placeholders. Never evaluated; COGS comes from the buy price.
    Product,
    Logistics,
    Insurance,
    /// Listed per line but folded into neither named subtotal.
    Finance,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Product => "product",
            Category::Logistics => "logistics",
            Category::Insurance => "insurance",
            Category::Finance => "finance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(Category::Product),
            "logistics" => Ok(Category::Logistics),
            "insurance" => Ok(Category::Insurance),
            "finance" => Ok(Category::Finance),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}
