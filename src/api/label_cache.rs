use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::core::Axis;

/// Runtime metrics exposed by the tick-label cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct LabelCacheKey {
    pub(super) axis: Axis,
    pub(super) value: OrderedFloat<f64>,
}

impl LabelCacheKey {
    pub(super) fn new(axis: Axis, value: f64) -> Self {
        Self {
            axis,
            value: OrderedFloat(value),
        }
    }
}

/// Memoized formatter output; must be cleared whenever a formatter changes.
#[derive(Debug, Default)]
pub(super) struct LabelCache {
    entries: HashMap<LabelCacheKey, String>,
    hits: u64,
    misses: u64,
}

impl LabelCache {
    const MAX_ENTRIES: usize = 4096;

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

    pub(super) fn clear_axis(&mut self, axis: Axis) {
        self.entries.retain(|key, _| key.axis != axis);
    }

    pub(super) fn stats(&self) -> LabelCacheStats {
        LabelCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}
