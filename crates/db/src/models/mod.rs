//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row; its
//!   serialized form is the public JSON representation
//! - A `Deserialize` request DTO with every field optional, validated by the
//!   handler before anything reaches the store
//! - An insert DTO and an update DTO (all `Option` fields) for the adapter

pub mod folder;
pub mod note;
