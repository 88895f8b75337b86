//! Cost items and how they are matched and priced.
//!
//! A [`CostItem`] is a rule: a destination scope, a [`Behavior`] and a unit
//! amount. [`matches_scope`] decides whether it applies to a shipment and
//! [`evaluate`] turns it into a quantity and a cost.

mod behavior;
mod category;
mod item;
pub mod line;
mod scope;
pub mod seed;

pub use behavior::Behavior;
pub use category::Category;
pub use item::CostItem;
pub use line::{evaluate, LineContext, LineCost};
pub use scope::matches_scope;
pub use seed::default_cost_items;
