//! Domain types for the cinemate catalog-and-social service.
//!
//! This crate holds the entity models (films, users), their field
//! validation rules, and the pure relation records (per-film like sets,
//! per-user friendship maps). It has no storage or HTTP concerns; those
//! live in `cinemate-store` and `cinemate-api`.

pub mod error;
pub mod film;
pub mod friendship;
pub mod likes;
pub mod types;
pub mod user;
