//! CLI entry point for the landed-cost desk.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use landed_cost::Incoterm;
use landed_cost_desk::commands::{self, ScenarioInput, SetOptions};
use landed_cost_desk::config::Config;
use landed_cost_desk::error::Error;

#[derive(Parser)]
#[command(name = "landed")]
#[command(about = "Landed cost and margin for bitumen shipments to LUB, KIN and KOL")]
#[command(version)]
struct Cli {
    /// Path to config.toml (built-in defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute landed cost and KPIs for one shipment
    Compute {
        #[command(flatten)]
        shipment: ShipmentArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute one shipment for several destinations (DEST or DEST=PRICE)
    Compare {
        #[command(flatten)]
        shipment: ShipmentArgs,

        /// Every routed destination when omitted
        destinations: Vec<String>,
    },

    /// Inspect or edit the cost table
    Costs {
        #[command(subcommand)]
        command: CostsCommand,
    },

    /// Show the sell-price table
    Prices,
}

#[derive(Subcommand)]
enum CostsCommand {
    /// List cost items, optionally for one destination
    List {
        #[arg(long)]
        dest: Option<String>,
    },

    /// Add or replace a cost item from a JSON file
    Set {
        /// Path to the cost item JSON
        item: PathBuf,

        /// Skip confirmation when replacing an existing code
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct ShipmentArgs {
    /// Destination code (LUB, KIN, KOL)
    #[arg(long, default_value = "LUB")]
    dest: String,

    /// Volume in metric tons
    #[arg(long)]
    volume: f64,

    /// Buy price, USD/MT
    #[arg(long)]
    buy: f64,

    /// Sell price, USD/MT (sell-price table, then buy price, when omitted)
    #[arg(long)]
    sell: Option<f64>,

    #[arg(long)]
    incoterm: Option<Incoterm>,

    #[arg(long)]
    shrinkage_pct: Option<f64>,

    #[arg(long)]
    storage_months: Option<f64>,

    #[arg(long)]
    dpo_days: Option<u32>,

    #[arg(long)]
    dso_days: Option<u32>,

    /// Annual finance rate, percent
    #[arg(long)]
    finance_rate_pct: Option<f64>,

    #[arg(long)]
    partner_profit_pct: Option<f64>,
}

impl From<ShipmentArgs> for ScenarioInput {
    fn from(a: ShipmentArgs) -> Self {
        ScenarioInput {
            destination: a.dest,
            volume_mt: a.volume,
            buy_price_per_mt: a.buy,
            sell_price_per_mt: a.sell,
            incoterm: a.incoterm,
            shrinkage_pct: a.shrinkage_pct,
            storage_months: a.storage_months,
            dpo_buy_days: a.dpo_days,
            dso_sell_days: a.dso_days,
            annual_finance_rate_pct: a.finance_rate_pct,
            partner_profit_pct: a.partner_profit_pct,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let result = match cli.command {
        Command::Compute { shipment, json } => {
            commands::run_compute(&config, shipment.into(), json).map(|out| print!("{out}"))
        }
        Command::Compare {
            shipment,
            destinations,
        } => commands::run_compare(&config, shipment.into(), &destinations)
            .map(|c| print!("{}", commands::render_comparison(&c))),
        Command::Costs { command } => match command {
            CostsCommand::List { dest } => commands::list_costs(&config, dest.as_deref())
                .map(|items| print!("{}", commands::render_costs(&items))),
            CostsCommand::Set { item, force } => {
                commands::set_cost(&config, &item, &SetOptions { force }).map(|replaced| {
                    println!("{}", if replaced { "Replaced." } else { "Added." });
                })
            }
        },
        Command::Prices => {
            print!("{}", commands::render_prices(&config));
            Ok(())
        }
    };

    if let Err(e) = result {
        match &e {
            Error::Aborted(msg) => {
                eprintln!("Aborted: {msg}");
                process::exit(0);
            }
            _ => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }
}
