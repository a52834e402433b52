//! In-memory storage and relation services for cinemate.
//!
//! State is volatile and lives for the process lifetime. Each component
//! owns one `parking_lot::RwLock` around its map; no method holds two
//! component locks at once (existence checks release the store lock
//! before relation state is touched), and both directions of a
//! friendship mutation happen under the single friendship-map lock so
//! the mirror invariant cannot be observed mid-operation.

pub mod films;
pub mod friends;
pub mod likes;
pub mod ranking;
pub mod table;
pub mod users;

pub use films::FilmStore;
pub use friends::FriendshipGraph;
pub use likes::LikeIndex;
pub use ranking::Ranking;
pub use users::UserStore;
