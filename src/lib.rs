//! # landed-cost
//!
//! Landed-cost economics for bulk bitumen shipments: given a scenario
//! (destination, volume, prices, shrinkage, storage, payment terms) and a
//! table of destination-scoped cost rules, compute total cost, margin and
//! break-even sell price.
//!
//! ## Features
//!
//! - **Typed cost rules**: a closed set of [`Behavior`]s, unknown tags
//!   rejected at ingestion
//! - **Destination scoping**: literal prefix match of the destination code
//! - **Transport units**: containers and trucks rounded up to whole units
//! - **Working-capital financing**: receivables + inventory - payables
//! - **Total computation**: zero guards on every ratio, no input fails
//!
//! ## Quick Start
//!
//! ```
//! use landed_cost::{compute, default_cost_items, Scenario};
//!
//! let scenario = Scenario {
//!     sell_price_per_mt: Some(520.0),
//!     ..Scenario::new("LUB", 100.0, 380.0)
//! };
//! let result = compute(&scenario, &default_cost_items());
//!
//! assert_eq!(result.units.containers, 3); // ceil(100 / 40)
//! assert_eq!(result.units.trucks, 2);     // ceil(100 / 58)
//! assert_eq!(result.breakdown.cogs, 38_000.0);
//! assert_eq!(result.kpis.gross_revenue, 52_000.0);
//! ```
//!
//! ## Behaviors
//!
//! | behavior | quantity | cost |
//! |----------|----------|------|
//! | `per_ton` | volume (MT) | qty × amount |
//! | `per_container` | containers | qty × amount |
//! | `per_truck` | trucks | qty × amount |
//! | `per_month` | storage months | qty × amount |
//! | `fixed_per_shipment` | 1 | amount |
//! | `percent_of_value` | 1 | revenue × amount |
//! | `percent_of_cogs` | 1 | COGS × amount |
//!
//! ```
//! use landed_cost::{Behavior, CostItem};
//!
//! let item = CostItem::from_tags(
//!     "KOL_INLAND_PER_MT", "Inland transport Kolwezi / MT", "per_ton",
//!     60.0, "MT", "Volume_MT", "KOL*", "logistics",
//! ).unwrap();
//! assert_eq!(item.behavior, Behavior::PerTon);
//!
//! // Unknown behaviors never reach the engine
//! assert!(CostItem::from_tags(
//!     "X", "x", "per_pallet", 1.0, "p", "-", "KOL*", "logistics",
//! ).is_err());
//! ```
//!
//! ## Cost Table
//!
//! The host owns the cost table. [`InMemoryCostRepository`] serializes
//! writers behind a lock; computations run on a snapshot:
//!
//! ```
//! use landed_cost::{CostRepository, InMemoryCostRepository, Scenario};
//!
//! let repo = InMemoryCostRepository::seeded();
//! let mut item = repo.get("WH_LUB_MONTH").unwrap().unwrap();
//! item.unit_amount_usd = 9_000.0;
//! repo.update("WH_LUB_MONTH", item).unwrap();
//!
//! let scenario = Scenario { storage_months: 2.0, ..Scenario::new("LUB", 100.0, 380.0) };
//! let result = repo.compute(&scenario).unwrap();
//! assert_eq!(result.line("WH_LUB_MONTH").unwrap().cost_usd, 18_000.0);
//! ```

pub mod compare;
pub mod cost;
mod engine;
mod error;
pub mod finance;
#[cfg(feature = "persistence")]
pub mod persistence;
pub mod pricing;
mod report;
pub mod repository;
pub mod route;
mod scenario;
pub mod units;

// Re-export public API
pub use compare::{compare_destinations, Comparison, DestinationQuote};
pub use cost::{default_cost_items, matches_scope, Behavior, Category, CostItem};
pub use engine::{compute, Breakdown, ComputeResult, Kpis, LineDetail};
pub use error::{Error, Result};
pub use finance::WorkingCapital;
pub use pricing::SellPriceTable;
pub use repository::{CostRepository, InMemoryCostRepository};
pub use scenario::{Incoterm, Scenario};
pub use units::{resolve, ShipmentUnits};
