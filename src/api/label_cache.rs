use std::collections::HashMap;
use std::sync::Arc;

use ordered_float::OrderedFloat;

use super::TickUnit;

/// Caller-supplied label formatter; replaces the kind's default formatting.
pub type LabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Runtime metrics exposed by the per-axis label cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct LabelCacheKey {
    pub(super) value: OrderedFloat<f64>,
    pub(super) major_step: OrderedFloat<f64>,
    pub(super) unit: TickUnit,
}

impl LabelCacheKey {
    pub(super) fn new(value: f64, major_step: f64, unit: TickUnit) -> Self {
        Self {
            value: OrderedFloat(value),
            major_step: OrderedFloat(major_step),
            unit,
        }
    }
}

#[derive(Debug, Default)]
pub(super) struct LabelCache {
    entries: HashMap<LabelCacheKey, String>,
    hits: u64,
    misses: u64,
}

impl LabelCache {
    const MAX_ENTRIES: usize = 8192;

    pub(super) fn get(&mut self, key: LabelCacheKey) -> Option<String> {
        let value = self.entries.get(&key).cloned();
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    pub(super) fn insert(&mut self, key: LabelCacheKey, value: String) {
        self.misses = self.misses.saturating_add(1);
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.clear();
        }
        self.entries.insert(key, value);
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn stats(&self) -> LabelCacheStats {
        LabelCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}
