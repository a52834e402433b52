use std::sync::Arc;

use cinemate_store::{FilmStore, FriendshipGraph, LikeIndex, Ranking, UserStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). All state is
/// memory-resident and lives for the process lifetime; the stores are
/// constructed here and injected into the services that depend on them.
#[derive(Clone)]
pub struct AppState {
    /// Film records.
    pub films: Arc<FilmStore>,
    /// User records.
    pub users: Arc<UserStore>,
    /// Per-film like sets.
    pub likes: Arc<LikeIndex>,
    /// Friendship state machine.
    pub friends: Arc<FriendshipGraph>,
    /// Popularity ranking over the like index.
    pub ranking: Arc<Ranking>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire up a fresh, empty in-memory state.
    pub fn new(config: ServerConfig) -> Self {
        let films = Arc::new(FilmStore::new());
        let users = Arc::new(UserStore::new());
        let likes = Arc::new(LikeIndex::new(Arc::clone(&films), Arc::clone(&users)));
        let friends = Arc::new(FriendshipGraph::new(Arc::clone(&users)));
        let ranking = Arc::new(Ranking::new(Arc::clone(&films), Arc::clone(&likes)));

        Self {
            films,
            users,
            likes,
            friends,
            ranking,
            config: Arc::new(config),
        }
    }
}
