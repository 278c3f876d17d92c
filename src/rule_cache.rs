//! # Rule Cache Module
//!
//! Process-wide snapshots of the externally configured rule sets.
//!
//! Each [`RuleCache`] holds at most one loaded value behind an `Arc`. The
//! value is loaded on first use and kept until [`RuleCache::invalidate`] or
//! [`RuleCache::reload`] is called, typically after a collaborator notices
//! that a rule file changed. A reload swaps the whole `Arc`, so readers see
//! either the old or the new rules, never a mix. A loader failure is logged
//! and treated as "no rules".

use crate::additional_items::AdditionalItems;
use crate::config::Config;
use crate::errors::Result;
use crate::pantry::PantryRules;
use crate::zones::ZoneRules;
use log::{info, warn};
use std::sync::{Arc, PoisonError, RwLock};

type Loader<T> = Box<dyn Fn() -> Result<T> + Send + Sync>;

/// Single-slot cache for a lazily loaded value
pub struct RuleCache<T> {
    slot: RwLock<Option<Arc<T>>>,
    loader: Loader<T>,
}

impl<T: Default> RuleCache<T> {
    /// Create an empty cache that fills itself with `loader` on first use
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<T> + Send + Sync + 'static,
    {
        Self {
            slot: RwLock::new(None),
            loader: Box::new(loader),
        }
    }

    fn load(&self) -> Arc<T> {
        match (self.loader)() {
            Ok(value) => Arc::new(value),
            Err(err) => {
                warn!("Failed to load rules, continuing without them: {}", err);
                Arc::new(T::default())
            }
        }
    }

    /// Current snapshot, loading it if the cache is empty
    pub fn get(&self) -> Arc<T> {
        if let Some(current) = self.slot.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
            return Arc::clone(current);
        }

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have loaded it while we waited for the lock
        if let Some(current) = slot.as_ref() {
            return Arc::clone(current);
        }
        let loaded = self.load();
        *slot = Some(Arc::clone(&loaded));
        loaded
    }

    /// Drop the snapshot; the next `get` loads again
    pub fn invalidate(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Load now and replace the snapshot
    pub fn reload(&self) -> Arc<T> {
        let loaded = self.load();
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&loaded));
        loaded
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}

/// The three configured rule sets used by shopping-list generation
pub struct RuleSets {
    pub zones: RuleCache<ZoneRules>,
    pub pantry: RuleCache<PantryRules>,
    pub additional_items: RuleCache<AdditionalItems>,
}

impl RuleSets {
    /// Caches backed by the files named in `config`
    pub fn from_config(config: &Config) -> Self {
        let zones_path = config.zones_path.clone();
        let pantry_path = config.pantry_path.clone();
        let additional_path = config.additional_items_path.clone();

        Self {
            zones: RuleCache::new(move || ZoneRules::load(&zones_path)),
            pantry: RuleCache::new(move || PantryRules::load(&pantry_path)),
            additional_items: RuleCache::new(move || AdditionalItems::load(&additional_path)),
        }
    }

    /// Fixed rule sets, mostly useful in tests and for embedding
    pub fn fixed(zones: ZoneRules, pantry: PantryRules, additional_items: AdditionalItems) -> Self {
        Self {
            zones: RuleCache::new(move || Ok(zones.clone())),
            pantry: RuleCache::new(move || Ok(pantry.clone())),
            additional_items: RuleCache::new(move || Ok(additional_items.clone())),
        }
    }

    /// Forget every snapshot so the next use rereads the files
    pub fn reload_all(&self) {
        info!("Reloading zone, pantry and additional item rules");
        self.zones.invalidate();
        self.pantry.invalidate();
        self.additional_items.invalidate();
    }
}
