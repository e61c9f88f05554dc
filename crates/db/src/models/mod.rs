//! Entity structs and DTOs.
//!
//! Each submodule holds a `FromRow` + `Serialize` entity matching the
//! database row, plus the `Deserialize` DTOs the API layer accepts.

pub mod bug;
