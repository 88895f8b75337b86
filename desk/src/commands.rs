//! Desk commands: load the cost table, compute, compare, and edit costs.
//!
//! Commands return values or rendered text for the binary to print.

use std::path::Path;

use landed_cost::compare::{self, Comparison, DestinationQuote};
use landed_cost::{persistence, route};
use landed_cost::{
    CostItem, CostRepository, InMemoryCostRepository, Incoterm, Scenario, SellPriceTable,
    matches_scope,
};
use log::info;

use crate::audit::{self, AuditLog};
use crate::config::{Config, ScenarioDefaults};
use crate::error::{Error, Result};

/// Shipment parameters given on the command line. Unset fields take the
/// configured defaults.
#[derive(Debug, Clone, Default)]
pub struct ScenarioInput {
    pub destination: String,
    pub volume_mt: f64,
    pub buy_price_per_mt: f64,
    pub sell_price_per_mt: Option<f64>,
    pub incoterm: Option<Incoterm>,
    pub shrinkage_pct: Option<f64>,
    pub storage_months: Option<f64>,
    pub dpo_buy_days: Option<u32>,
    pub dso_sell_days: Option<u32>,
    pub annual_finance_rate_pct: Option<f64>,
    pub partner_profit_pct: Option<f64>,
}

impl ScenarioInput {
    /// Merge over `defaults` and validate the result.
    pub fn into_scenario(self, defaults: &ScenarioDefaults) -> Result<Scenario> {
        let base = defaults.scenario(&self.destination, self.volume_mt, self.buy_price_per_mt);
        let scenario = Scenario {
            sell_price_per_mt: self.sell_price_per_mt,
            incoterm: self.incoterm.unwrap_or(base.incoterm),
            shrinkage_pct: self.shrinkage_pct.unwrap_or(base.shrinkage_pct),
            storage_months: self.storage_months.unwrap_or(base.storage_months),
            dpo_buy_days: self.dpo_buy_days.unwrap_or(base.dpo_buy_days),
            dso_sell_days: self.dso_sell_days.unwrap_or(base.dso_sell_days),
            annual_finance_rate_pct: self
                .annual_finance_rate_pct
                .unwrap_or(base.annual_finance_rate_pct),
            partner_profit_pct: self.partner_profit_pct.unwrap_or(base.partner_profit_pct),
            ..base
        };
        scenario.validate()?;
        Ok(scenario)
    }
}

/// The configured cost table, or the seed table when none is on disk.
pub fn load_repository(config: &Config) -> Result<InMemoryCostRepository> {
    match &config.costs.table {
        Some(path) if path.exists() => {
            let items =
                persistence::load_cost_items(path).map_err(|e| Error::TableRead {
                    path: path.clone(),
                    source: e,
                })?;
            info!("loaded {} cost items from {}", items.len(), path.display());
            Ok(InMemoryCostRepository::new(items)?)
        }
        Some(path) => {
            info!("{} not found, using seed cost table", path.display());
            Ok(InMemoryCostRepository::seeded())
        }
        None => Ok(InMemoryCostRepository::seeded()),
    }
}

/// Seed sell prices with the configured overrides applied.
pub fn price_table(config: &Config) -> SellPriceTable {
    let mut prices = SellPriceTable::seeded();
    for (dest, price) in &config.sell_prices {
        prices.upsert(dest, *price);
    }
    prices
}

/// Compute one scenario and render it as a report, or as JSON.
pub fn run_compute(config: &Config, input: ScenarioInput, json: bool) -> Result<String> {
    let repo = load_repository(config)?;
    let mut scenario = input.into_scenario(&config.defaults)?;
    price_table(config).price_scenario(&mut scenario);

    let result = repo.compute(&scenario)?;
    if json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }

    let mut out = format!(
        "{} {} {:.2} MT @ ${:.2}/MT buy, ${:.2}/MT sell\n",
        scenario.destination,
        scenario.incoterm,
        scenario.volume_mt,
        scenario.buy_price_per_mt,
        scenario.effective_sell_price(),
    );
    out.push_str(&result.to_string());
    Ok(out)
}

/// Parse a destination argument: `KIN` or `KIN=505` for a price override.
pub fn parse_quote(arg: &str) -> Result<DestinationQuote> {
    match arg.split_once('=') {
        None => Ok(DestinationQuote::listed(arg.trim())),
        Some((dest, price)) => {
            let price: f64 = price.trim().parse().map_err(|_| {
                Error::Config(format!("invalid sell price in '{arg}'"))
            })?;
            Ok(DestinationQuote::at(dest.trim(), price))
        }
    }
}

/// Run the same shipment against several destinations, every routed
/// destination when none are given.
pub fn run_compare(
    config: &Config,
    input: ScenarioInput,
    destinations: &[String],
) -> Result<Vec<Comparison>> {
    let quotes = if destinations.is_empty() {
        route::known_destinations()
            .map(DestinationQuote::listed)
            .collect()
    } else {
        destinations
            .iter()
            .map(|d| parse_quote(d))
            .collect::<Result<Vec<_>>>()?
    };

    let repo = load_repository(config)?;
    let base = input.into_scenario(&config.defaults)?;
    let items = repo.snapshot()?;
    Ok(compare::compare_destinations(
        &base,
        &quotes,
        &items,
        &price_table(config),
    ))
}

/// Render a comparison table, best net margin marked.
pub fn render_comparison(comparisons: &[Comparison]) -> String {
    let best = compare::best_margin(comparisons).map(|c| c.destination.as_str());
    let mut out = format!(
        "{:<6} {:>10} {:>14} {:>14} {:>14} {:>9}\n",
        "DEST", "SELL/MT", "REVENUE", "TOTAL COST", "NET MARGIN", "MARGIN %"
    );
    for c in comparisons {
        let k = &c.result.kpis;
        let marker = if Some(c.destination.as_str()) == best { " *" } else { "" };
        out.push_str(&format!(
            "{:<6} {:>10.2} {:>14.2} {:>14.2} {:>14.2} {:>8.2}%{marker}\n",
            c.destination,
            c.sell_price_per_mt,
            k.gross_revenue,
            k.total_cost,
            k.net_margin,
            k.net_margin_pct * 100.0,
        ));
    }
    out
}

/// List cost items sorted by code, optionally only those a destination matches.
pub fn list_costs(config: &Config, destination: Option<&str>) -> Result<Vec<CostItem>> {
    let repo = load_repository(config)?;
    let items = repo.list()?;
    Ok(match destination {
        Some(dest) => {
            let dest = dest.to_ascii_uppercase();
            items
                .into_iter()
                .filter(|item| matches_scope(&item.dest_scope, &dest))
                .collect()
        }
        None => items,
    })
}

/// Render cost items one per line; percentage amounts shown as percents.
pub fn render_costs(items: &[CostItem]) -> String {
    let mut out = String::new();
    for item in items {
        let amount = if item.behavior.is_percentage() {
            format!("{:.3}%", item.unit_amount_usd * 100.0)
        } else {
            format!("{:.2}", item.unit_amount_usd)
        };
        out.push_str(&format!(
            "{:<28} {:<8} {:<24} {:>12} {:<18} {:<10}\n",
            item.code, item.dest_scope, item.behavior, amount, item.unit, item.category,
        ));
    }
    out
}

/// Options for `costs set`.
pub struct SetOptions {
    /// Replace an existing code without asking.
    pub force: bool,
}

/// Insert or replace a cost item read from a JSON file, then persist the
/// table and audit the change. The change is only audited once the table is
/// on disk.
///
/// Returns `true` when an existing item was replaced.
pub fn set_cost(config: &Config, item_file: &Path, opts: &SetOptions) -> Result<bool> {
    let table = config.costs.table.clone().ok_or_else(|| {
        Error::Config("costs.table must be set to save cost changes".into())
    })?;

    let contents = std::fs::read_to_string(item_file).map_err(|e| Error::ItemRead {
        path: item_file.to_path_buf(),
        source: e,
    })?;
    let item: CostItem = serde_json::from_str(&contents)?;
    item.validate()?;

    let repo = load_repository(config)?;
    let previous = repo.get(&item.code)?;

    let mut audit = AuditLog::open(&config.audit_path())?;

    if let (Some(old), false) = (&previous, opts.force) {
        println!("{} exists:", old.code);
        print!("{}", render_costs(std::slice::from_ref(old)));
        println!("replace with:");
        print!("{}", render_costs(std::slice::from_ref(&item)));

        let confirmed = dialoguer::Confirm::new()
            .with_prompt("Replace?")
            .default(false)
            .interact()
            .map_err(|e| Error::Aborted(format!("confirmation prompt failed: {e}")))?;

        audit.log(
            "user_confirmed",
            serde_json::json!({"code": item.code, "approved": confirmed}),
        )?;
        if !confirmed {
            return Err(Error::Aborted("cost table unchanged".into()));
        }
    }

    let replaced = repo.upsert(item.clone())?;
    let items = repo.snapshot()?;
    if let Err(e) = persistence::save_cost_items(&items, &table) {
        audit::log_table_save_failed(&mut audit, &table, &item.code, &e)?;
        return Err(Error::TableWrite {
            path: table,
            source: e,
        });
    }

    audit::log_cost_change(&mut audit, &item, previous.as_ref())?;
    audit::log_table_saved(&mut audit, &table, items.len())?;

    info!(
        "{} {} in {}",
        if replaced { "replaced" } else { "added" },
        item.code,
        table.display()
    );
    Ok(replaced)
}

/// Render the sell-price table.
pub fn render_prices(config: &Config) -> String {
    let prices = price_table(config);
    let mut out = String::new();
    for (dest, price) in prices.list() {
        out.push_str(&format!("{dest:<6} ${price:>10.2}/MT\n"));
    }
    out
}
