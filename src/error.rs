//! Errors raised while ingesting cost items and scenarios.
//!
//! [`compute`](crate::compute) itself never fails; these errors come from the
//! edges where strings become typed values or where the cost table is mutated.

/// All errors produced by the landed-cost crate.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unknown cost behavior '{0}'")]
    UnknownBehavior(String),

    #[error("unknown cost category '{0}'")]
    UnknownCategory(String),

    #[error("unknown incoterm '{0}'")]
    UnknownIncoterm(String),

    #[error("invalid cost item {code}: {reason}")]
    InvalidCostItem { code: String, reason: String },

    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("cost code already exists: {0}")]
    DuplicateCode(String),

    #[error("cost not found: {0}")]
    CostNotFound(String),

    #[error("cannot rename cost {from} to {to}: code already in use")]
    CodeMismatch { from: String, to: String },

    #[error("cost table lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, Error>;
