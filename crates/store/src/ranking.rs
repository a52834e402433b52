//! Popularity ranking over the like index.

use std::sync::Arc;

use cinemate_core::film::Film;

use crate::films::FilmStore;
use crate::likes::LikeIndex;

/// Derives a popularity ordering over films from like counts.
///
/// Ranking walks the like index, not the film store: films that were
/// never liked do not appear at all, and a film whose likes were all
/// removed ranks with count 0. Identifiers that no longer resolve in the
/// film store are dropped from the result.
pub struct Ranking {
    films: Arc<FilmStore>,
    likes: Arc<LikeIndex>,
}

impl Ranking {
    pub fn new(films: Arc<FilmStore>, likes: Arc<LikeIndex>) -> Self {
        Self { films, likes }
    }

    /// The top `count` films by descending like count. Ties break on
    /// ascending film id so the order is deterministic and stable.
    pub fn popular_films(&self, count: usize) -> Vec<Film> {
        let mut counts = self.likes.counts();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
            .into_iter()
            .take(count)
            .filter_map(|(film_id, _)| self.films.find_by_id(film_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cinemate_core::film::NewFilm;
    use cinemate_core::types::EntityId;
    use cinemate_core::user::NewUser;

    use crate::users::UserStore;

    struct Fixture {
        films: Arc<FilmStore>,
        users: Arc<UserStore>,
        likes: Arc<LikeIndex>,
        ranking: Ranking,
    }

    fn fixture() -> Fixture {
        let films = Arc::new(FilmStore::new());
        let users = Arc::new(UserStore::new());
        let likes = Arc::new(LikeIndex::new(Arc::clone(&films), Arc::clone(&users)));
        let ranking = Ranking::new(Arc::clone(&films), Arc::clone(&likes));
        Fixture {
            films,
            users,
            likes,
            ranking,
        }
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

    fn seed_users(fx: &Fixture, n: usize) -> Vec<EntityId> {
        (0..n)
            .map(|i| fx.users.create(user(&format!("u{i}"))).id)
            .collect()
    }

    #[test]
    fn orders_by_descending_like_count() {
        let fx = fixture();
        let a = fx.films.create(film("a")).id;
        let b = fx.films.create(film("b")).id;
        let voters = seed_users(&fx, 3);

        fx.likes.add_like(b, voters[0]).unwrap();
        fx.likes.add_like(b, voters[1]).unwrap();
        fx.likes.add_like(a, voters[2]).unwrap();

        let ranked: Vec<_> = fx.ranking.popular_films(10).iter().map(|f| f.id).collect();
        assert_eq!(ranked, vec![b, a]);
    }

    #[test]
    fn ties_break_on_ascending_film_id() {
        let fx = fixture();
        let a = fx.films.create(film("a")).id;
        let b = fx.films.create(film("b")).id;
        let c = fx.films.create(film("c")).id;
        let voters = seed_users(&fx, 2);

        for film_id in [c, a, b] {
            fx.likes.add_like(film_id, voters[0]).unwrap();
        }
        fx.likes.add_like(b, voters[1]).unwrap();

        let ranked: Vec<_> = fx.ranking.popular_films(10).iter().map(|f| f.id).collect();
        assert_eq!(ranked, vec![b, a, c]);
        // Stable across repeated calls with no intervening mutation.
        let again: Vec<_> = fx.ranking.popular_films(10).iter().map(|f| f.id).collect();
        assert_eq!(ranked, again);
    }

    #[test]
    fn returns_at_most_count_results() {
        let fx = fixture();
        let voters = seed_users(&fx, 1);
        for name in ["a", "b", "c"] {
            let id = fx.films.create(film(name)).id;
            fx.likes.add_like(id, voters[0]).unwrap();
        }
        assert_eq!(fx.ranking.popular_films(2).len(), 2);
        assert_eq!(fx.ranking.popular_films(0).len(), 0);
    }

    #[test]
    fn films_never_liked_are_absent() {
        let fx = fixture();
        let liked = fx.films.create(film("liked")).id;
        let _never = fx.films.create(film("never")).id;
        let voters = seed_users(&fx, 1);

        fx.likes.add_like(liked, voters[0]).unwrap();

        let ranked: Vec<_> = fx.ranking.popular_films(10).iter().map(|f| f.id).collect();
        assert_eq!(ranked, vec![liked]);
    }

    #[test]
    fn fully_unliked_film_ranks_after_liked_films() {
        let fx = fixture();
        let hot = fx.films.create(film("hot")).id;
        let cold = fx.films.create(film("cold")).id;
        let voters = seed_users(&fx, 1);

        fx.likes.add_like(cold, voters[0]).unwrap();
        fx.likes.remove_like(cold, voters[0]).unwrap();
        fx.likes.add_like(hot, voters[0]).unwrap();

        let ranked: Vec<_> = fx.ranking.popular_films(10).iter().map(|f| f.id).collect();
        assert_eq!(ranked, vec![hot, cold]);
    }
}

