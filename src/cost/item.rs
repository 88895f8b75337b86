//! Cost item: a pricing rule scoped to a destination.

use crate::error::{Error, Result};

use super::{Behavior, Category};

/// A cost rule, not a value.
///
/// The cost it contributes depends on the scenario it is evaluated against:
/// `behavior` selects the quantity, `unit_amount_usd` prices it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostItem {
    /// Unique within a cost table.
    pub code: String,
    pub name: String,
    pub behavior: Behavior,
    /// Currency per unit, or a fraction for percentage behaviors.
    pub unit_amount_usd: f64,
    /// Display label for the unit ("truck", "MT", ...).
    pub unit: String,
    /// Display label for the quantity the behavior multiplies.
    pub qty_source: String,
    /// Destination prefix pattern, e.g. `"LUB*"`.
    pub dest_scope: String,
    pub category: Category,
}

impl CostItem {
    /// Build an item from the string tags used by external tables.
    ///
    /// Fails on an unknown behavior or category and on any item
    /// [`validate`](Self::validate) rejects.
    #[allow(clippy::too_many_arguments)]
    pub fn from_tags(
        code: &str,
        name: &str,
        behavior: &str,
        unit_amount_usd: f64,
        unit: &str,
        qty_source: &str,
        dest_scope: &str,
        category: &str,
    ) -> Result<Self> {
        let item = CostItem {
            code: code.to_string(),
            name: name.to_string(),
            behavior: behavior.parse()?,
            unit_amount_usd,
            unit: unit.to_string(),
            qty_source: qty_source.to_string(),
            dest_scope: dest_scope.to_string(),
            category: category.parse()?,
        };
        item.validate()?;
        Ok(item)
    }

    /// Check the invariants a cost table relies on.
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(self.invalid("code must not be empty"));
        }
        if !self.unit_amount_usd.is_finite() {
            return Err(self.invalid("unit amount must be finite"));
        }
        if self.dest_scope.is_empty() {
            return Err(self.invalid("destination scope must not be empty"));
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> Error {
        Error::InvalidCostItem {
            code: self.code.clone(),
            reason: reason.to_string(),
        }
    }
}
