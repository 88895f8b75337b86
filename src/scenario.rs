//! Scenario: the parameters of one shipment computation.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Delivery term. Carried for display only; it does not change any formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Incoterm {
    /// Cost and freight.
    #[default]
    CFR,
    /// Free on board.
    FOB,
}

impl fmt::Display for Incoterm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Incoterm::CFR => write!(f, "CFR"),
            Incoterm::FOB => write!(f, "FOB"),
        }
    }
}

impl FromStr for Incoterm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CFR" => Ok(Incoterm::CFR),
            "FOB" => Ok(Incoterm::FOB),
            other => Err(Error::UnknownIncoterm(other.to_string())),
        }
    }
}

/// Inputs to one landed-cost computation.
///
/// Percentages are whole percents (`5.0` = 5%), prices are USD per metric
/// ton. [`Default`] gives the house defaults for every optional field and an
/// empty destination with zero volume and price.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Scenario {
    /// Three-letter destination code ("LUB", "KIN", "KOL").
    pub destination: String,
    pub incoterm: Incoterm,
    pub volume_mt: f64,
    pub buy_price_per_mt: f64,
    /// Falls back to the buy price when absent or zero.
    pub sell_price_per_mt: Option<f64>,
    pub shrinkage_pct: f64,
    pub storage_months: f64,
    /// Days payable outstanding on the purchase.
    pub dpo_buy_days: u32,
    /// Days sales outstanding on the sale.
    pub dso_sell_days: u32,
    pub annual_finance_rate_pct: f64,
    pub partner_profit_pct: f64,
    pub mt_per_container: f64,
    pub mt_per_truck: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            destination: String::new(),
            incoterm: Incoterm::CFR,
            volume_mt: 0.0,
            buy_price_per_mt: 0.0,
            sell_price_per_mt: None,
            shrinkage_pct: 0.0,
            storage_months: 0.0,
            dpo_buy_days: 0,
            dso_sell_days: 0,
            annual_finance_rate_pct: 0.0,
            partner_profit_pct: 5.0,
            mt_per_container: 40.0,
            mt_per_truck: 58.0,
        }
    }
}

impl Scenario {
    /// A scenario with the house defaults for everything but the essentials.
    pub fn new(destination: &str, volume_mt: f64, buy_price_per_mt: f64) -> Self {
        Self {
            destination: destination.to_string(),
            volume_mt,
            buy_price_per_mt,
            ..Self::default()
        }
    }

    /// Sell price used for revenue: the scenario's own price when set and
    /// non-zero, otherwise the buy price.
    #[inline]
    pub fn effective_sell_price(&self) -> f64 {
        match self.sell_price_per_mt {
            Some(p) if p != 0.0 => p,
            _ => self.buy_price_per_mt,
        }
    }

    /// True when the scenario carries its own non-zero sell price.
    #[inline]
    pub fn has_sell_price(&self) -> bool {
        matches!(self.sell_price_per_mt, Some(p) if p != 0.0)
    }

    /// Host-side input validation.
    ///
    /// [`compute`](crate::compute) never calls this; it computes with whatever
    /// it is given. Hosts that accept untrusted input run it first.
    pub fn validate(&self) -> Result<()> {
        let dest = self.destination.as_bytes();
        if dest.len() != 3 || !dest.iter().all(u8::is_ascii_uppercase) {
            return Err(Error::InvalidScenario(format!(
                "destination must be three upper-case letters, got '{}'",
                self.destination
            )));
        }
        positive("volume_mt", self.volume_mt)?;
        positive("buy_price_per_mt", self.buy_price_per_mt)?;
        if let Some(p) = self.sell_price_per_mt {
            non_negative("sell_price_per_mt", p)?;
        }
        non_negative("shrinkage_pct", self.shrinkage_pct)?;
        non_negative("storage_months", self.storage_months)?;
        non_negative("annual_finance_rate_pct", self.annual_finance_rate_pct)?;
        non_negative("partner_profit_pct", self.partner_profit_pct)?;
        positive("mt_per_container", self.mt_per_container)?;
        positive("mt_per_truck", self.mt_per_truck)?;
        Ok(())
    }
}

fn positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidScenario(format!(
            "{field} must be > 0 and finite, got {value}"
        )));
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidScenario(format!(
            "{field} must be >= 0 and finite, got {value}"
        )));
    }
    Ok(())
}
