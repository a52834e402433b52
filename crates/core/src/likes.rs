//! Per-film like record: the set of users who liked a film.

use std::collections::BTreeSet;

use crate::types::EntityId;

/// The set of user identifiers that liked one film.
///
/// A user appears at most once; adding an existing like reports "no
/// change" instead of erroring. Iteration order is ascending user id.
#[derive(Debug, Clone, Default)]
pub struct FilmLikes {
    users: BTreeSet<EntityId>,
}

impl FilmLikes {
    /// Record a like. Returns `false` when the user had already liked the
    /// film (no state change).
    pub fn add(&mut self, user_id: EntityId) -> bool {
        self.users.insert(user_id)
    }

    /// Remove a like. Returns `false` when there was none to remove.
    pub fn remove(&mut self, user_id: EntityId) -> bool {
        self.users.remove(&user_id)
    }

    pub fn has(&self, user_id: EntityId) -> bool {
        self.users.contains(&user_id)
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }
}
