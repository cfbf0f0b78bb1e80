use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::storage::error::StoreError;

/// Contract between a record type and the store that holds it.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Resource name used in client-facing error messages.
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    /// Refreshes the record's `updated_at` after a mutation.
    fn touch(&mut self, now: DateTime<Utc>);
}

/// Concurrent in-memory store for one record type, keyed by UUID.
///
/// Mutations run under the entry lock of the affected key, so concurrent
/// requests against the same record serialize instead of clobbering each
/// other. Reads hand out clones; nothing borrows into the map.
pub struct ResourceStore<R> {
    records: DashMap<Uuid, R>,
}

impl<R: Resource> ResourceStore<R> {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Inserts a freshly built record, rejecting ids that are already taken.
    pub fn insert(&self, record: R) -> Result<R, StoreError> {
        let id = record.id();
        match self.records.entry(id) {
            Entry::Occupied(_) => Err(StoreError::Conflict { kind: R::KIND }),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                tracing::debug!("{} {} stored", R::KIND, id);
                Ok(record)
            }
        }
    }

    pub fn get(&self, id: &Uuid) -> Result<R, StoreError> {
        self.records
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound { kind: R::KIND })
    }

    /// Snapshot of every record the predicate keeps, in map order.
    pub fn filter(&self, keep: impl Fn(&R) -> bool) -> Vec<R> {
        self.records
            .iter()
            .filter(|entry| keep(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Applies `merge` to the record under its entry lock, then touches it.
    pub fn update(&self, id: &Uuid, merge: impl FnOnce(&mut R)) -> Result<R, StoreError> {
        let mut entry = self
            .records
            .get_mut(id)
            .ok_or(StoreError::NotFound { kind: R::KIND })?;
        merge(entry.value_mut());
        entry.value_mut().touch(Utc::now());
        tracing::debug!("{} {} updated", R::KIND, id);
        Ok(entry.value().clone())
    }

    /// Overwrites the record at `id`, or creates one when the id is free.
    ///
    /// Returns the stored record and whether it was newly created. Existing
    /// records keep their creation time and get touched instead.
    pub fn upsert(
        &self,
        id: Uuid,
        create: impl FnOnce() -> R,
        overwrite: impl FnOnce(&mut R),
    ) -> (R, bool) {
        match self.records.entry(id) {
            Entry::Occupied(mut slot) => {
                overwrite(slot.get_mut());
                slot.get_mut().touch(Utc::now());
                tracing::debug!("{} {} replaced", R::KIND, id);
                (slot.get().clone(), false)
            }
            Entry::Vacant(slot) => {
                tracing::debug!("{} {} created on replace", R::KIND, id);
                (slot.insert(create()).value().clone(), true)
            }
        }
    }

    pub fn remove(&self, id: &Uuid) -> Result<(), StoreError> {
        self.records
            .remove(id)
            .map(|_| tracing::debug!("{} {} removed", R::KIND, id))
            .ok_or(StoreError::NotFound { kind: R::KIND })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Resource> Default for ResourceStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
