//! Generic id-keyed entity table.
//!
//! Both entity stores (films, users) share this contract: sequential
//! identifier assignment starting at 1, wholesale replacement on update,
//! and snapshot reads in insertion order (ids are sequential, so
//! ascending id order *is* insertion order).

use std::collections::BTreeMap;

use cinemate_core::error::{CoreError, CoreResult};
use cinemate_core::types::EntityId;

/// A record that can live in an [`EntityTable`].
pub trait Entity: Clone {
    /// Entity name used in `NotFound` errors, e.g. `"Film"`.
    const NAME: &'static str;

    fn id(&self) -> EntityId;
}

/// Id-keyed table with a monotonic identifier counter.
///
/// Identifiers start at 1 and are never reused. The table is not
/// synchronized; the owning store wraps it in a lock, which also makes
/// id assignment atomic with respect to concurrent creates.
#[derive(Debug)]
pub struct EntityTable<T> {
    records: BTreeMap<EntityId, T>,
    next_id: EntityId,
}

impl<T: Entity> EntityTable<T> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Assign the next identifier, build the record from it, and store it.
    pub fn create_with(&mut self, build: impl FnOnce(EntityId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let record = build(id);
        self.records.insert(id, record.clone());
        record
    }

    /// Replace the stored record wholesale. The identifier must already
    /// exist; this is a strict update, not an upsert.
    pub fn replace(&mut self, record: T) -> CoreResult<T> {
        let id = record.id();
        if !self.records.contains_key(&id) {
            return Err(CoreError::NotFound {
                entity: T::NAME,
                id,
            });
        }
        self.records.insert(id, record.clone());
        Ok(record)
    }

    pub fn get(&self, id: EntityId) -> Option<T> {
        self.records.get(&id).cloned()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn ensure(&self, id: EntityId) -> CoreResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: T::NAME,
                id,
            })
        }
    }

    /// All records in insertion order.
    pub fn all(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Entity> Default for EntityTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
