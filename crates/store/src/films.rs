//! In-memory film store.

use cinemate_core::error::CoreResult;
use cinemate_core::film::{Film, NewFilm};
use cinemate_core::types::EntityId;
use parking_lot::RwLock;

use crate::table::{Entity, EntityTable};

impl Entity for Film {
    const NAME: &'static str = "Film";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Id-keyed film table behind an interior lock.
///
/// Field validation is the caller's concern; the store only guards the
/// identifier sequence and the strict-update rule.
#[derive(Debug, Default)]
pub struct FilmStore {
    table: RwLock<EntityTable<Film>>,
}

impl FilmStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new film under the next sequential identifier.
    pub fn create(&self, new_film: NewFilm) -> Film {
        self.table.write().create_with(|id| new_film.into_film(id))
    }

    /// Replace an existing film wholesale; `NotFound` for unknown ids.
    pub fn update(&self, film: Film) -> CoreResult<Film> {
        self.table.write().replace(film)
    }

    pub fn find_by_id(&self, id: EntityId) -> Option<Film> {
        self.table.read().get(id)
    }

    pub fn exists(&self, id: EntityId) -> bool {
        self.table.read().contains(id)
    }

    pub fn ensure_exists(&self, id: EntityId) -> CoreResult<()> {
        self.table.read().ensure(id)
    }

    /// All films in insertion order.
    pub fn find_all(&self) -> Vec<Film> {
        self.table.read().all()
    }

    pub fn count(&self) -> usize {
        self.table.read().len()
    }
}
