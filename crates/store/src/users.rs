//! In-memory user store.

use cinemate_core::error::CoreResult;
use cinemate_core::types::EntityId;
use cinemate_core::user::{NewUser, User};
use parking_lot::RwLock;

use crate::table::{Entity, EntityTable};

impl Entity for User {
    const NAME: &'static str = "User";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Id-keyed user table behind an interior lock.
#[derive(Debug, Default)]
pub struct UserStore {
    table: RwLock<EntityTable<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new user under the next sequential identifier. The
    /// name-defaults-to-login rule is applied by [`NewUser::into_user`].
    pub fn create(&self, new_user: NewUser) -> User {
        self.table.write().create_with(|id| new_user.into_user(id))
    }

    /// Replace an existing user wholesale; `NotFound` for unknown ids.
    pub fn update(&self, user: User) -> CoreResult<User> {
        self.table.write().replace(user)
    }

    pub fn find_by_id(&self, id: EntityId) -> Option<User> {
        self.table.read().get(id)
    }

    pub fn exists(&self, id: EntityId) -> bool {
        self.table.read().contains(id)
    }

    pub fn ensure_exists(&self, id: EntityId) -> CoreResult<()> {
        self.table.read().ensure(id)
    }

    /// All users in insertion order.
    pub fn find_all(&self) -> Vec<User> {
        self.table.read().all()
    }

    pub fn count(&self) -> usize {
        self.table.read().len()
    }
}
