//! Friendship graph: the pending/confirmed state machine over user pairs.
//!
//! Invariant: after any operation completes, A's entry for B equals B's
//! entry for A (including both being absent). Both directions are always
//! mutated under the single map write lock, so the mirror can never be
//! observed out of agreement and no cross-user lock ordering is needed.
//!
//! Requesting friendship resets both sides to PENDING even when the
//! relation was already CONFIRMED. Callers depend on this re-settable
//! behavior; do not add a guard for already-confirmed pairs.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use cinemate_core::error::CoreResult;
use cinemate_core::friendship::{Friendship, FriendshipStatus};
use cinemate_core::types::EntityId;
use cinemate_core::user::User;
use parking_lot::RwLock;

use crate::users::UserStore;

pub struct FriendshipGraph {
    users: Arc<UserStore>,
    friendships: RwLock<HashMap<EntityId, Friendship>>,
}

impl FriendshipGraph {
    pub fn new(users: Arc<UserStore>) -> Self {
        Self {
            users,
            friendships: RwLock::new(HashMap::new()),
        }
    }

    /// Request friendship: set both directions to PENDING, overwriting
    /// any prior state. Records are created lazily here.
    pub fn add_friend(&self, user_id: EntityId, friend_id: EntityId) -> CoreResult<()> {
        self.users.ensure_exists(user_id)?;
        self.users.ensure_exists(friend_id)?;

        let mut friendships = self.friendships.write();
        friendships
            .entry(user_id)
            .or_default()
            .set(friend_id, FriendshipStatus::Pending);
        friendships
            .entry(friend_id)
            .or_default()
            .set(user_id, FriendshipStatus::Pending);

        tracing::info!(user_id, friend_id, "friend request recorded");
        Ok(())
    }

    /// Confirm friendship: set both directions to CONFIRMED. A no-op
    /// when either participant has no friendship record at all.
    pub fn confirm_friend(&self, user_id: EntityId, friend_id: EntityId) -> CoreResult<()> {
        self.users.ensure_exists(user_id)?;
        self.users.ensure_exists(friend_id)?;

        let mut friendships = self.friendships.write();
        if !friendships.contains_key(&user_id) || !friendships.contains_key(&friend_id) {
            tracing::debug!(user_id, friend_id, "confirm without prior request ignored");
            return Ok(());
        }
        for (a, b) in [(user_id, friend_id), (friend_id, user_id)] {
            if let Some(record) = friendships.get_mut(&a) {
                record.update_status(b, FriendshipStatus::Confirmed);
            }
        }

        tracing::info!(user_id, friend_id, "friendship confirmed");
        Ok(())
    }

    /// Remove (or reject) friendship: delete both directions, tolerating
    /// entries that are already absent.
    pub fn remove_friend(&self, user_id: EntityId, friend_id: EntityId) -> CoreResult<()> {
        self.users.ensure_exists(user_id)?;
        self.users.ensure_exists(friend_id)?;

        let mut friendships = self.friendships.write();
        if let Some(record) = friendships.get_mut(&user_id) {
            record.remove(friend_id);
        }
        if let Some(record) = friendships.get_mut(&friend_id) {
            record.remove(user_id);
        }

        tracing::info!(user_id, friend_id, "friendship removed");
        Ok(())
    }

    /// Rejecting a request is the same terminal transition as removal:
    /// both directions are deleted.
    pub fn reject_friend(&self, user_id: EntityId, friend_id: EntityId) -> CoreResult<()> {
        self.remove_friend(user_id, friend_id)
    }

    /// All friends of a user, regardless of status.
    pub fn friends(&self, user_id: EntityId) -> CoreResult<Vec<User>> {
        self.users.ensure_exists(user_id)?;
        let peers: Vec<EntityId> = self
            .friendships
            .read()
            .get(&user_id)
            .map(|record| record.peers().collect())
            .unwrap_or_default();
        Ok(self.resolve(peers))
    }

    /// Friends whose relation is CONFIRMED.
    pub fn confirmed_friends(&self, user_id: EntityId) -> CoreResult<Vec<User>> {
        self.friends_with_status(user_id, FriendshipStatus::Confirmed)
    }

    /// Peers with an outstanding PENDING entry.
    pub fn pending_requests(&self, user_id: EntityId) -> CoreResult<Vec<User>> {
        self.friends_with_status(user_id, FriendshipStatus::Pending)
    }

    /// Users confirmed as friends by both `user_id` and `other_id`,
    /// in ascending id order.
    pub fn common_friends(&self, user_id: EntityId, other_id: EntityId) -> CoreResult<Vec<User>> {
        self.users.ensure_exists(user_id)?;
        self.users.ensure_exists(other_id)?;

        let friendships = self.friendships.read();
        let mine: Vec<EntityId> = friendships
            .get(&user_id)
            .map(|record| record.peers_with(FriendshipStatus::Confirmed).collect())
            .unwrap_or_default();
        let theirs: BTreeSet<EntityId> = friendships
            .get(&other_id)
            .map(|record| record.peers_with(FriendshipStatus::Confirmed).collect())
            .unwrap_or_default();
        drop(friendships);

        let common: Vec<EntityId> = mine
            .into_iter()
            .filter(|peer| theirs.contains(peer))
            .collect();
        Ok(self.resolve(common))
    }

    /// Status of the directed relation `user_id → friend_id`, if any.
    pub fn friendship_status(
        &self,
        user_id: EntityId,
        friend_id: EntityId,
    ) -> CoreResult<Option<FriendshipStatus>> {
        self.users.ensure_exists(user_id)?;
        self.users.ensure_exists(friend_id)?;
        Ok(self
            .friendships
            .read()
            .get(&user_id)
            .and_then(|record| record.status(friend_id)))
    }

    fn friends_with_status(
        &self,
        user_id: EntityId,
        status: FriendshipStatus,
    ) -> CoreResult<Vec<User>> {
        self.users.ensure_exists(user_id)?;
        let peers: Vec<EntityId> = self
            .friendships
            .read()
            .get(&user_id)
            .map(|record| record.peers_with(status).collect())
            .unwrap_or_default();
        Ok(self.resolve(peers))
    }

    /// Resolve peer ids to user records, silently dropping any id the
    /// store cannot resolve.
    fn resolve(&self, ids: Vec<EntityId>) -> Vec<User> {
        ids.into_iter()
            .filter_map(|id| self.users.find_by_id(id))
            .collect()
    }
}
