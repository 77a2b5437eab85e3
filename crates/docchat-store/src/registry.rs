use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use docchat_core::types::DocumentId;
use docchat_text::DocumentIndex;

/// Resident document indexes keyed by id, oldest insertion first.
///
/// `put` moves an id to the newest position; lookups never do. When the
/// number of ids exceeds the capacity the oldest entries are dropped. Callers
/// holding an `Arc` from `get` keep a usable index after it is evicted.
pub struct StoreRegistry {
    capacity: usize,
    entries: RwLock<IndexMap<DocumentId, Arc<DocumentIndex>>>,
}

impl StoreRegistry {
    /// `capacity` below 1 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { capacity, entries: RwLock::new(IndexMap::with_capacity(capacity + 1)) }
    }

    /// Insert or replace `id`, then evict down to capacity. Insert and
    /// eviction happen under one write lock.
    pub fn put(&self, id: impl Into<DocumentId>, index: DocumentIndex) {
        let id = id.into();
        let mut entries = self.entries.write();
        if entries.shift_remove(&id).is_some() {
            tracing::debug!(id = %id, "replacing resident index");
        }
        entries.insert(id, Arc::new(index));

        while entries.len() > self.capacity {
            let Some((old_id, _)) = entries.shift_remove_index(0) else { break };
            tracing::info!(id = %old_id, capacity = self.capacity, "evicted oldest document index");
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<DocumentIndex>> {
        self.entries.read().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.read().contains_key(id)
    }

    /// Resident ids in eviction order.
    pub fn ids(&self) -> Vec<DocumentId> {
        self.entries.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
