//! Like index: per-film sets of user identifiers.
//!
//! Every entry point validates that the referenced film and user exist
//! before touching relation state. The per-film record is created lazily
//! inside the mutator; queries never create records.

use std::collections::HashMap;
use std::sync::Arc;

use cinemate_core::error::CoreResult;
use cinemate_core::likes::FilmLikes;
use cinemate_core::types::EntityId;
use parking_lot::RwLock;

use crate::films::FilmStore;
use crate::users::UserStore;

pub struct LikeIndex {
    films: Arc<FilmStore>,
    users: Arc<UserStore>,
    likes: RwLock<HashMap<EntityId, FilmLikes>>,
}

impl LikeIndex {
    pub fn new(films: Arc<FilmStore>, users: Arc<UserStore>) -> Self {
        Self {
            films,
            users,
            likes: RwLock::new(HashMap::new()),
        }
    }

    /// Record that a user liked a film.
    ///
    /// Returns `Ok(false)` when the like already existed — a policy
    /// no-op, not an error.
    pub fn add_like(&self, film_id: EntityId, user_id: EntityId) -> CoreResult<bool> {
        self.films.ensure_exists(film_id)?;
        self.users.ensure_exists(user_id)?;

        let mut likes = self.likes.write();
        let record = likes.entry(film_id).or_default();
        if record.add(user_id) {
            tracing::info!(film_id, user_id, "like recorded");
            Ok(true)
        } else {
            tracing::warn!(film_id, user_id, "user already liked this film");
            Ok(false)
        }
    }

    /// Remove a user's like from a film.
    ///
    /// Returns `Ok(false)` when the film was never liked or the user had
    /// no like to remove.
    pub fn remove_like(&self, film_id: EntityId, user_id: EntityId) -> CoreResult<bool> {
        self.films.ensure_exists(film_id)?;
        self.users.ensure_exists(user_id)?;

        let mut likes = self.likes.write();
        let removed = likes
            .get_mut(&film_id)
            .map(|record| record.remove(user_id))
            .unwrap_or(false);
        if removed {
            tracing::info!(film_id, user_id, "like removed");
        }
        Ok(removed)
    }

    /// Number of distinct users that liked a film; 0 when never liked.
    pub fn likes_count(&self, film_id: EntityId) -> CoreResult<usize> {
        self.films.ensure_exists(film_id)?;
        Ok(self.likes.read().get(&film_id).map_or(0, FilmLikes::count))
    }

    /// Snapshot of `(film id, like count)` for every film that has ever
    /// entered the index. A film whose likes were all removed stays in
    /// the index with count 0; films never liked do not appear.
    pub fn counts(&self) -> Vec<(EntityId, usize)> {
        self.likes
            .read()
            .iter()
            .map(|(film_id, record)| (*film_id, record.count()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;
    use cinemate_core::error::CoreError;
    use cinemate_core::film::NewFilm;
    use cinemate_core::user::NewUser;

    fn fixture() -> (Arc<FilmStore>, Arc<UserStore>, LikeIndex) {
        let films = Arc::new(FilmStore::new());
        let users = Arc::new(UserStore::new());
        let index = LikeIndex::new(Arc::clone(&films), Arc::clone(&users));
        (films, users, index)
    }

    fn film(name: &str) -> NewFilm {
        NewFilm {
            name: name.to_string(),
            description: None,
            release_date: NaiveDate::from_ymd_opt(1999, 3, 31).unwrap(),
            duration: 136,
            genre: None,
            mpa: None,
        }
    }

    fn user(login: &str) -> NewUser {
        NewUser {
            email: format!("{login}@example.com"),
            login: login.to_string(),
            name: None,
            birthday: NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
        }
    }

    #[test]
    fn likes_are_counted_per_distinct_user() {
        let (films, users, index) = fixture();
        let matrix = films.create(film("Matrix"));
        let u1 = users.create(user("u1"));
        let u2 = users.create(user("u2"));

        assert!(index.add_like(matrix.id, u1.id).unwrap());
        assert!(index.add_like(matrix.id, u2.id).unwrap());
        assert_eq!(index.likes_count(matrix.id).unwrap(), 2);
    }

    #[test]
    fn duplicate_like_is_a_silent_noop() {
        let (films, users, index) = fixture();
        let matrix = films.create(film("Matrix"));
        let u1 = users.create(user("u1"));

        assert!(index.add_like(matrix.id, u1.id).unwrap());
        assert!(!index.add_like(matrix.id, u1.id).unwrap());
        assert_eq!(index.likes_count(matrix.id).unwrap(), 1);
    }

    #[test]
    fn add_like_for_unknown_film_is_not_found_and_mutates_nothing() {
        let (_films, users, index) = fixture();
        let u1 = users.create(user("u1"));

        assert_matches!(
            index.add_like(999, u1.id),
            Err(CoreError::NotFound {
                entity: "Film",
                id: 999
            })
        );
        assert!(index.counts().is_empty());
    }

    #[test]
    fn add_like_for_unknown_user_is_not_found() {
        let (films, _users, index) = fixture();
        let matrix = films.create(film("Matrix"));

        assert_matches!(
            index.add_like(matrix.id, 999),
            Err(CoreError::NotFound {
                entity: "User",
                id: 999
            })
        );
        assert_eq!(index.likes_count(matrix.id).unwrap(), 0);
    }

    #[test]
    fn remove_like_tolerates_missing_record() {
        let (films, users, index) = fixture();
        let matrix = films.create(film("Matrix"));
        let u1 = users.create(user("u1"));

        assert!(!index.remove_like(matrix.id, u1.id).unwrap());

        index.add_like(matrix.id, u1.id).unwrap();
        assert!(index.remove_like(matrix.id, u1.id).unwrap());
        assert_eq!(index.likes_count(matrix.id).unwrap(), 0);
    }

    #[test]
    fn likes_count_requires_the_film_to_exist() {
        let (_films, _users, index) = fixture();
        assert_matches!(index.likes_count(42), Err(CoreError::NotFound { .. }));
    }

    #[test]
    fn fully_unliked_film_stays_in_the_index_with_zero_count() {
        let (films, users, index) = fixture();
        let matrix = films.create(film("Matrix"));
        let u1 = users.create(user("u1"));

        index.add_like(matrix.id, u1.id).unwrap();
        index.remove_like(matrix.id, u1.id).unwrap();
        assert_eq!(index.counts(), vec![(matrix.id, 0)]);
    }
}
