//! One user's side of the friendship relation.
//!
//! Each user holds a map from peer identifier to relationship status.
//! "Rejected" is not a stored status: rejecting (or removing) a
//! friendship deletes the entry. Keeping the two mirrored sides of a
//! relation in agreement is the responsibility of the graph that owns
//! these records, not of the record itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// Status of a directed friendship entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FriendshipStatus {
    /// Requested but not yet mutually acknowledged.
    Pending,
    /// Mutually acknowledged.
    Confirmed,
}

/// One user's peer→status map. Iteration order is ascending peer id.
#[derive(Debug, Clone, Default)]
pub struct Friendship {
    friends: BTreeMap<EntityId, FriendshipStatus>,
}

impl Friendship {
    /// Insert or overwrite the entry for a peer.
    pub fn set(&mut self, peer: EntityId, status: FriendshipStatus) {
        self.friends.insert(peer, status);
    }

    /// Change the status for a peer, only when an entry already exists.
    pub fn update_status(&mut self, peer: EntityId, status: FriendshipStatus) {
        if let Some(existing) = self.friends.get_mut(&peer) {
            *existing = status;
        }
    }

    /// Delete the entry for a peer, tolerating its absence.
    pub fn remove(&mut self, peer: EntityId) {
        self.friends.remove(&peer);
    }

    pub fn has(&self, peer: EntityId) -> bool {
        self.friends.contains_key(&peer)
    }

    pub fn status(&self, peer: EntityId) -> Option<FriendshipStatus> {
        self.friends.get(&peer).copied()
    }

    /// All peers, regardless of status.
    pub fn peers(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.friends.keys().copied()
    }

    /// Peers whose entry carries the given status.
    pub fn peers_with(&self, status: FriendshipStatus) -> impl Iterator<Item = EntityId> + '_ {
        self.friends
            .iter()
            .filter(move |(_, s)| **s == status)
            .map(|(peer, _)| *peer)
    }
}
