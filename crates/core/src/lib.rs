pub mod error;
pub mod folder;
pub mod note;
pub mod types;
pub mod validation;
