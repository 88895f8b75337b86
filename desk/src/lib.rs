//! landed-cost-desk: command-line desk for the landed-cost engine.
//!
//! Loads scenario defaults, a JSONL cost table and sell-price overrides from
//! a TOML config, runs computations and destination comparisons, and records
//! every cost-table change in a JSONL audit trail.

pub mod audit;
pub mod commands;
pub mod config;
pub mod error;
