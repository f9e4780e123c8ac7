/// Component domain layer - persisted records and the rules applied to them
///
/// Pure data and policies; nothing in here performs I/O.
pub mod domain;
pub mod policies;
