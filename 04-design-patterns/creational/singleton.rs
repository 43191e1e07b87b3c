//! Singleton without a global.
//!
//! The one-time initializer is an ordinary value owned by whoever needs a
//! shared instance. Every `get_instance` on the same cell hands out a
//! clone of the same `Arc`, so all holders see one counter. Two cells
//! give two independent instances, which keeps tests isolated.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::debug;

#[derive(Debug, Default)]
pub struct Singleton {
    count: AtomicU64,
}

impl Singleton {
    /// Adds one and returns the new count.
    pub fn increment_count(&self) -> u64 {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Default)]
pub struct InstanceCell {
    cell: OnceLock<Arc<Singleton>>,
}

impl InstanceCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the instance on first call, even when several threads race.
    pub fn get_instance(&self) -> Arc<Singleton> {
        Arc::clone(self.cell.get_or_init(|| {
            debug!("creating singleton instance");
            Arc::new(Singleton::default())
        }))
    }
}
