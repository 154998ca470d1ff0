use std::fmt;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The resources exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Folder,
    Note,
}

impl Entity {
    /// Fixed message returned to clients when a lookup by id finds nothing.
    pub fn missing_message(self) -> &'static str {
        match self {
            Entity::Folder => "Folder does not exist",
            Entity::Note => "Note doesn't exist",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Folder => f.write_str("Folder"),
            Entity::Note => f.write_str("Note"),
        }
    }
}
