//! TOML configuration loading and validation.

use std::path::{Path, PathBuf};

use landed_cost::{Incoterm, Scenario};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: ScenarioDefaults,
    pub costs: CostsConfig,
    /// Destination code → USD/MT, merged over the seed sell prices.
    pub sell_prices: FxHashMap<String, f64>,
    pub logging: LoggingConfig,
}

/// Scenario parameters applied when the command line does not set them.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioDefaults {
    #[serde(default)]
    pub incoterm: Incoterm,
    #[serde(default = "default_mt_per_container")]
    pub mt_per_container: f64,
    #[serde(default = "default_mt_per_truck")]
    pub mt_per_truck: f64,
    #[serde(default)]
    pub shrinkage_pct: f64,
    #[serde(default)]
    pub storage_months: f64,
    #[serde(default)]
    pub dpo_buy_days: u32,
    #[serde(default)]
    pub dso_sell_days: u32,
    #[serde(default)]
    pub annual_finance_rate_pct: f64,
    #[serde(default = "default_partner_profit")]
    pub partner_profit_pct: f64,
}

fn default_mt_per_container() -> f64 {
    40.0
}
fn default_mt_per_truck() -> f64 {
    58.0
}
fn default_partner_profit() -> f64 {
    5.0
}

impl Default for ScenarioDefaults {
    fn default() -> Self {
        Self {
            incoterm: Incoterm::default(),
            mt_per_container: default_mt_per_container(),
            mt_per_truck: default_mt_per_truck(),
            shrinkage_pct: 0.0,
            storage_months: 0.0,
            dpo_buy_days: 0,
            dso_sell_days: 0,
            annual_finance_rate_pct: 0.0,
            partner_profit_pct: default_partner_profit(),
        }
    }
}

impl ScenarioDefaults {
    /// A scenario carrying these defaults for the given shipment.
    pub fn scenario(
        &self,
        destination: &str,
        volume_mt: f64,
        buy_price_per_mt: f64,
    ) -> Scenario {
        Scenario {
            incoterm: self.incoterm,
            shrinkage_pct: self.shrinkage_pct,
            storage_months: self.storage_months,
            dpo_buy_days: self.dpo_buy_days,
            dso_sell_days: self.dso_sell_days,
            annual_finance_rate_pct: self.annual_finance_rate_pct,
            partner_profit_pct: self.partner_profit_pct,
            mt_per_container: self.mt_per_container,
            mt_per_truck: self.mt_per_truck,
            ..Scenario::new(
                &destination.to_ascii_uppercase(),
                volume_mt,
                buy_price_per_mt,
            )
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostsConfig {
    /// JSONL cost table. The seed table is used when unset or missing.
    #[serde(default)]
    pub table: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: String,
    #[serde(default = "default_audit_file")]
    pub audit_file: String,
}

fn default_log_dir() -> String {
    "./logs".into()
}
fn default_audit_file() -> String {
    "audit.jsonl".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            audit_file: default_audit_file(),
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    pub fn validate(&self) -> Result<()> {
        let d = &self.defaults;
        if !d.mt_per_container.is_finite() || d.mt_per_container <= 0.0 {
            return Err(Error::Config("mt_per_container must be > 0".into()));
        }
        if !d.mt_per_truck.is_finite() || d.mt_per_truck <= 0.0 {
            return Err(Error::Config("mt_per_truck must be > 0".into()));
        }
        for (name, value) in [
            ("shrinkage_pct", d.shrinkage_pct),
            ("storage_months", d.storage_months),
            ("annual_finance_rate_pct", d.annual_finance_rate_pct),
            ("partner_profit_pct", d.partner_profit_pct),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!("{name} must be >= 0")));
            }
        }
        for (dest, price) in &self.sell_prices {
            if dest.trim().is_empty() {
                return Err(Error::Config("sell_prices key must not be empty".into()));
            }
            if !price.is_finite() || *price < 0.0 {
                return Err(Error::Config(format!(
                    "sell price for {dest} must be a finite value >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Full path to the audit log file.
    pub fn audit_path(&self) -> PathBuf {
        Path::new(&self.logging.dir).join(&self.logging.audit_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_toml() -> &'static str {
        r#"
[defaults]
incoterm = "FOB"
mt_per_container = 40.0
mt_per_truck = 58.0
shrinkage_pct = 0.5
storage_months = 1.0
dpo_buy_days = 30
dso_sell_days = 45
annual_finance_rate_pct = 12.0
partner_profit_pct = 5.0

[costs]
table = "./costs.jsonl"

[sell_prices]
LUB = 530.0
KIN = 505.0

[logging]
dir = "./logs"
audit_file = "audit.jsonl"
"#
    }

    #[test]
    fn parse_example_config() {
        let config: Config = toml::from_str(example_toml()).unwrap();
        assert_eq!(config.defaults.incoterm, Incoterm::FOB);
        assert_eq!(config.defaults.dso_sell_days, 45);
        assert_eq!(config.defaults.annual_finance_rate_pct, 12.0);
        assert_eq!(config.costs.table, Some(PathBuf::from("./costs.jsonl")));
        assert_eq!(config.sell_prices.get("LUB"), Some(&530.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.defaults.mt_per_container, 40.0);
        assert_eq!(config.defaults.mt_per_truck, 58.0);
        assert_eq!(config.defaults.partner_profit_pct, 5.0);
        assert!(config.costs.table.is_none());
        assert!(config.sell_prices.is_empty());
        assert_eq!(config.logging.audit_file, "audit.jsonl");
    }

    #[test]
    fn defaults_build_scenario() {
        let config: Config = toml::from_str(example_toml()).unwrap();
        let s = config.defaults.scenario("kin", 120.0, 400.0);
        assert_eq!(s.destination, "KIN");
        assert_eq!(s.incoterm, Incoterm::FOB);
        assert_eq!(s.volume_mt, 120.0);
        assert_eq!(s.dpo_buy_days, 30);
        assert_eq!(s.storage_months, 1.0);
        assert!(s.sell_price_per_mt.is_none());
    }

    #[test]
    fn validate_catches_bad_capacity() {
        let mut config: Config = toml::from_str(example_toml()).unwrap();
        config.defaults.mt_per_truck = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_catches_negative_percentage() {
        let mut config: Config = toml::from_str(example_toml()).unwrap();
        config.defaults.shrinkage_pct = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_catches_bad_sell_price() {
        let mut config: Config = toml::from_str(example_toml()).unwrap();
        config.sell_prices.insert("KOL".into(), f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn audit_path() {
        let config: Config = toml::from_str(example_toml()).unwrap();
        assert_eq!(config.audit_path(), PathBuf::from("./logs/audit.jsonl"));
    }
}
