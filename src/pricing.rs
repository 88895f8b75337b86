//! Listed sell prices per destination.
//!
//! A host can price a scenario from this table instead of asking the user
//! for a sell price on every computation.

use rustc_hash::FxHashMap;

use crate::scenario::Scenario;

/// Destination code to sell price in USD per MT.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SellPriceTable {
    prices: FxHashMap<String, f64>,
}

impl SellPriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The listed prices a fresh installation starts with.
    pub fn seeded() -> Self {
        let mut table = Self::new();
        table.upsert("LUB", 520.0);
        table.upsert("KIN", 500.0);
        table.upsert("KOL", 515.0);
        table
    }

    /// Listed price for `destination` (case-insensitive).
    pub fn get(&self, destination: &str) -> Option<f64> {
        self.prices.get(&destination.to_ascii_uppercase()).copied()
    }

    /// Insert or replace the price for `destination`, stored upper-cased.
    /// Returns the previous price, if any.
    pub fn upsert(&mut self, destination: &str, usd_per_mt: f64) -> Option<f64> {
        self.prices
            .insert(destination.to_ascii_uppercase(), usd_per_mt)
    }

    /// All listed prices, sorted by destination code.
    pub fn list(&self) -> Vec<(&str, f64)> {
        let mut out: Vec<_> = self.prices.iter().map(|(d, p)| (d.as_str(), *p)).collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Fill the scenario's sell price from the table when it has none of its
    /// own (absent or zero). Returns true if a listed price was applied.
    ///
    /// Without a listed price the scenario is left alone, so computation
    /// falls back to the buy price.
    pub fn price_scenario(&self, scenario: &mut Scenario) -> bool {
        if scenario.has_sell_price() {
            return false;
        }
        match self.get(&scenario.destination) {
            Some(p) => {
                scenario.sell_price_per_mt = Some(p);
                true
            }
            None => false,
        }
    }
}

impl<'a> FromIterator<(&'a str, f64)> for SellPriceTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (dest, price) in iter {
            table.upsert(dest, price);
        }
        table
    }
}
