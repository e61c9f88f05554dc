//! Repository layer.
//!
//! Zero-sized structs providing async query methods that take `&PgPool`
//! as their first argument.

pub mod bug_repo;

pub use bug_repo::BugRepo;
