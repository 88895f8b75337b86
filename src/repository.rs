//! Cost table storage.
//!
//! The cost table is shared, long-lived state owned by the host. Writers are
//! serialized behind a single lock; a computation works on a snapshot and
//! never holds the lock while it runs.

use std::sync::RwLock;

use log::info;
use rustc_hash::FxHashSet;

use crate::cost::{self, CostItem};
use crate::engine::{self, ComputeResult};
use crate::error::{Error, Result};
use crate::scenario::Scenario;

/// A shared, queryable, updatable-by-code collection of cost rules.
pub trait CostRepository: Send + Sync {
    /// Every item, sorted by code.
    fn list(&self) -> Result<Vec<CostItem>>;

    /// Every item in table order, for computation.
    fn snapshot(&self) -> Result<Vec<CostItem>>;

    fn get(&self, code: &str) -> Result<Option<CostItem>>;

    /// Append a new item. Fails if its code is taken.
    fn add(&self, item: CostItem) -> Result<()>;

    /// Replace the item stored under `code`. Fails if there is none.
    fn update(&self, code: &str, item: CostItem) -> Result<()>;

    /// Replace the item with the same code, or append it. Returns true if an
    /// existing item was replaced.
    fn upsert(&self, item: CostItem) -> Result<bool>;

    /// Compute a scenario against the current snapshot.
    fn compute(&self, scenario: &Scenario) -> Result<ComputeResult> {
        let items = self.snapshot()?;
        Ok(engine::compute(scenario, &items))
    }
}

/// Process-local cost table behind a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryCostRepository {
    items: RwLock<Vec<CostItem>>,
}

impl InMemoryCostRepository {
    /// Build a repository from `items`, validating each and rejecting
    /// duplicate codes.
    pub fn new(items: Vec<CostItem>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for item in &items {
            item.validate()?;
            if !seen.insert(item.code.as_str()) {
                return Err(Error::DuplicateCode(item.code.clone()));
            }
        }
        Ok(Self {
            items: RwLock::new(items),
        })
    }

    /// Repository holding the default seed table.
    pub fn seeded() -> Self {
        Self {
            items: RwLock::new(cost::default_cost_items()),
        }
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.items.read().map_err(|_| Error::LockPoisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl CostRepository for InMemoryCostRepository {
    fn list(&self) -> Result<Vec<CostItem>> {
        let mut items = self.snapshot()?;
        items.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(items)
    }

    fn snapshot(&self) -> Result<Vec<CostItem>> {
        Ok(self.items.read().map_err(|_| Error::LockPoisoned)?.clone())
    }

    fn get(&self, code: &str) -> Result<Option<CostItem>> {
        let items = self.items.read().map_err(|_| Error::LockPoisoned)?;
        Ok(items.iter().find(|i| i.code == code).cloned())
    }

    fn add(&self, item: CostItem) -> Result<()> {
        item.validate()?;
        let mut items = self.items.write().map_err(|_| Error::LockPoisoned)?;
        if items.iter().any(|i| i.code == item.code) {
            return Err(Error::DuplicateCode(item.code));
        }
        info!("cost item added: {} ({})", item.code, item.dest_scope);
        items.push(item);
        Ok(())
    }

    fn update(&self, code: &str, item: CostItem) -> Result<()> {
        item.validate()?;
        let mut items = self.items.write().map_err(|_| Error::LockPoisoned)?;
        let pos = items
            .iter()
            .position(|i| i.code == code)
            .ok_or_else(|| Error::CostNotFound(code.to_string()))?;
        if item.code != code && items.iter().any(|i| i.code == item.code) {
            return Err(Error::CodeMismatch {
                from: code.to_string(),
                to: item.code,
            });
        }
        info!("cost item updated: {code}");
        items[pos] = item;
        Ok(())
    }

    fn upsert(&self, item: CostItem) -> Result<bool> {
        item.validate()?;
        let mut items = self.items.write().map_err(|_| Error::LockPoisoned)?;
        match items.iter_mut().find(|i| i.code == item.code) {
            Some(existing) => {
                info!("cost item replaced: {}", item.code);
                *existing = item;
                Ok(true)
            }
            None => {
                info!("cost item added: {} ({})", item.code, item.dest_scope);
                items.push(item);
                Ok(false)
            }
        }
    }
}
