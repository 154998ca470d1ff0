//! In-memory persistence adapters so handler behaviour can be tested without
//! a database. Mirrors the Postgres schema: ids are never reused and deleting
//! a folder removes its notes.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use sqlx::error::{DatabaseError, ErrorKind};
use noteful_core::types::DbId;
use noteful_db::models::folder::{Folder, NewFolder, UpdateFolder};
use noteful_db::models::note::{NewNote, Note, UpdateNote};
use noteful_db::repositories::{FolderStore, NoteStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    folders: BTreeMap<DbId, Folder>,
    notes: BTreeMap<DbId, Note>,
    last_folder_id: DbId,
    last_note_id: DbId,
    unavailable: bool,
}

impl MemoryStore {
    fn lock(&self) -> Result<MutexGuard<'_, Inner>, sqlx::Error> {
        let inner = self.inner.lock().unwrap();
        if inner.unavailable {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(inner)
    }

    /// Make every subsequent call fail like an unreachable database.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.lock().unwrap().unavailable = unavailable;
    }

    /// Insert a folder directly, bypassing the HTTP layer.
    pub fn seed_folder(&self, name: &str) -> Folder {
        let mut inner = self.inner.lock().unwrap();
        inner.last_folder_id += 1;
        let folder = Folder {
            id: inner.last_folder_id,
            folder_name: name.to_string(),
        };
        inner.folders.insert(folder.id, folder.clone());
        folder
    }

    /// Insert a note directly, bypassing the HTTP layer.
    pub fn seed_note(&self, folder_id: DbId, name: &str, content: &str) -> Note {
        let mut inner = self.inner.lock().unwrap();
        inner.last_note_id += 1;
        let note = Note {
            id: inner.last_note_id,
            name: name.to_string(),
            content: content.to_string(),
            folder_id,
            modified: None,
        };
        inner.notes.insert(note.id, note.clone());
        note
    }

    pub fn folders(&self) -> Vec<Folder> {
        self.inner.lock().unwrap().folders.values().cloned().collect()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.inner.lock().unwrap().notes.values().cloned().collect()
    }
}

#[async_trait]
impl FolderStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Folder>, sqlx::Error> {
        Ok(self.lock()?.folders.values().cloned().collect())
    }

    async fn insert(&self, input: &NewFolder) -> Result<Folder, sqlx::Error> {
        let mut inner = self.lock()?;
        inner.last_folder_id += 1;
        let folder = Folder {
            id: inner.last_folder_id,
            folder_name: input.folder_name.clone(),
        };
        inner.folders.insert(folder.id, folder.clone());
        Ok(folder)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Folder>, sqlx::Error> {
        Ok(self.lock()?.folders.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<u64, sqlx::Error> {
        let mut inner = self.lock()?;
        let removed = inner.folders.remove(&id).is_some();
        if removed {
            inner.notes.retain(|_, note| note.folder_id != id);
        }
        Ok(u64::from(removed))
    }

    async fn update(&self, id: DbId, input: &UpdateFolder) -> Result<u64, sqlx::Error> {
        let mut inner = self.lock()?;
        let Some(folder) = inner.folders.get_mut(&id) else {
            return Ok(0);
        };
        if let Some(name) = &input.folder_name {
            folder.folder_name = name.clone();
        }
        Ok(1)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.lock().map(|_| ())
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Note>, sqlx::Error> {
        Ok(self.lock()?.notes.values().cloned().collect())
    }

    async fn insert(&self, input: &NewNote) -> Result<Note, sqlx::Error> {
        let mut inner = self.lock()?;
        if !inner.folders.contains_key(&input.folder_id) {
            return Err(sqlx::Error::Database(Box::new(ForeignKeyViolation {
                message: format!(
                    "insert on table \"notes\" violates foreign key constraint: \
                     folder_id {} has no matching folder",
                    input.folder_id
                ),
            })));
        }
        inner.last_note_id += 1;
        let note = Note {
            id: inner.last_note_id,
            name: input.name.clone(),
            content: input.content.clone(),
            folder_id: input.folder_id,
            modified: input.modified,
        };
        inner.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        Ok(self.lock()?.notes.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<u64, sqlx::Error> {
        Ok(u64::from(self.lock()?.notes.remove(&id).is_some()))
    }

    async fn update(&self, id: DbId, input: &UpdateNote) -> Result<u64, sqlx::Error> {
        let mut inner = self.lock()?;
        let Some(note) = inner.notes.get_mut(&id) else {
            return Ok(0);
        };
        if let Some(name) = &input.name {
            note.name = name.clone();
        }
        if let Some(content) = &input.content {
            note.content = content.clone();
        }
        if input.modified.is_some() {
            note.modified = input.modified;
        }
        Ok(1)
    }
}

/// Foreign key failure shaped like the one Postgres reports (SQLSTATE 23503).
#[derive(Debug)]
pub struct ForeignKeyViolation {
    message: String,
}

impl fmt::Display for ForeignKeyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for ForeignKeyViolation {}

impl DatabaseError for ForeignKeyViolation {
    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed("23503"))
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn constraint(&self) -> Option<&str> {
        Some("notes_folder_id_fkey")
    }

    fn table(&self) -> Option<&str> {
        Some("notes")
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::ForeignKeyViolation
    }
}

/// Wraps a [`MemoryStore`] so that reads see every row but updates and
/// deletes find nothing, as when another request removes the row between a
/// handler's lookup and its mutation.
#[derive(Debug, Clone)]
pub struct VanishingStore {
    inner: Arc<MemoryStore>,
}

impl VanishingStore {
    pub fn new(inner: Arc<MemoryStore>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl FolderStore for VanishingStore {
    async fn list_all(&self) -> Result<Vec<Folder>, sqlx::Error> {
        FolderStore::list_all(self.inner.as_ref()).await
    }

    async fn insert(&self, input: &NewFolder) -> Result<Folder, sqlx::Error> {
        FolderStore::insert(self.inner.as_ref(), input).await
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Folder>, sqlx::Error> {
        FolderStore::get_by_id(self.inner.as_ref(), id).await
    }

    async fn delete_by_id(&self, _id: DbId) -> Result<u64, sqlx::Error> {
        Ok(0)
    }

    async fn update(&self, _id: DbId, _input: &UpdateFolder) -> Result<u64, sqlx::Error> {
        Ok(0)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.inner.ping().await
    }
}

#[async_trait]
impl NoteStore for VanishingStore {
    async fn list_all(&self) -> Result<Vec<Note>, sqlx::Error> {
        NoteStore::list_all(self.inner.as_ref()).await
    }

    async fn insert(&self, input: &NewNote) -> Result<Note, sqlx::Error> {
        NoteStore::insert(self.inner.as_ref(), input).await
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        NoteStore::get_by_id(self.inner.as_ref(), id).await
    }

    async fn delete_by_id(&self, _id: DbId) -> Result<u64, sqlx::Error> {
        Ok(0)
    }

    async fn update(&self, _id: DbId, _input: &UpdateNote) -> Result<u64, sqlx::Error> {
        Ok(0)
    }
}
