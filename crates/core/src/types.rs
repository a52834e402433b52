/// All entity identifiers are sequential 64-bit integers, assigned by the
/// owning store starting at 1.
pub type EntityId = i64;
