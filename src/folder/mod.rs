//! Folder hierarchy and file records for Cabinet.
//!
//! Folders form a tree keyed by `parent_id`; files are attached to exactly
//! one folder. Deleting a folder removes its whole subtree, files included
//! (ON DELETE CASCADE in the schema).

mod file;

pub use file::{FileRecord, FileRepository, NewFileRecord};

use sqlx::SqlitePool;

use crate::{CabinetError, Result};

/// A folder in the hierarchy.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Folder {
    /// Unique folder ID.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (None for root folders).
    pub parent_id: Option<i64>,
    /// User ID of the owner.
    pub owner_id: i64,
    /// When the folder was created.
    pub created_at: String,
}

/// Data for creating a new folder.
#[derive(Debug, Clone)]
pub struct NewFolder {
    /// Folder name.
    pub name: String,
    /// Parent folder ID (None for root folders).
    pub parent_id: Option<i64>,
    /// User ID of the owner.
    pub owner_id: i64,
}

impl NewFolder {
    /// Create a new NewFolder without a parent (root folder).
    pub fn new(name: impl Into<String>, owner_id: i64) -> Self {
        Self {
            name: name.into(),
            parent_id: None,
            owner_id,
        }
    }

    /// Set the parent folder.
    pub fn with_parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

/// Repository for folder operations.
pub struct FolderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FolderRepository<'a> {
    /// Create a new FolderRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new folder.
    ///
    /// A (name, parent) collision surfaces as `CabinetError::Duplicate`;
    /// a nonexistent parent is rejected by the foreign key and surfaces as
    /// `CabinetError::NotFound`.
    pub async fn create(&self, folder: &NewFolder) -> Result<Folder> {
        let result = sqlx::query(
            "INSERT INTO folders (name, parent_id, owner_id) VALUES (?, ?, ?)",
        )
        .bind(&folder.name)
        .bind(folder.parent_id)
        .bind(folder.owner_id)
        .execute(self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(d) if d.is_unique_violation() => {
                CabinetError::Duplicate("folder name".to_string())
            }
            Some(d) if d.is_foreign_key_violation() => {
                CabinetError::NotFound("parent folder".to_string())
            }
            _ => CabinetError::Database(e.to_string()),
        })?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| CabinetError::NotFound("folder".to_string()))
    }

    /// Get a folder by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Folder>> {
        let folder = sqlx::query_as::<_, Folder>(
            "SELECT id, name, parent_id, owner_id, created_at
             FROM folders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(folder)
    }

    /// List direct child folders of a parent folder.
    ///
    /// Only immediate children are returned, never deeper descendants.
    pub async fn list_children(&self, parent_id: i64) -> Result<Vec<Folder>> {
        let folders = sqlx::query_as::<_, Folder>(
            "SELECT id, name, parent_id, owner_id, created_at
             FROM folders WHERE parent_id = ? ORDER BY id",
        )
        .bind(parent_id)
        .fetch_all(self.pool)
        .await?;

        Ok(folders)
    }

    /// List all root folders (parent_id is NULL).
    pub async fn list_roots(&self) -> Result<Vec<Folder>> {
        let folders = sqlx::query_as::<_, Folder>(
            "SELECT id, name, parent_id, owner_id, created_at
             FROM folders WHERE parent_id IS NULL ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(folders)
    }

    /// Delete a folder by ID.
    ///
    /// Descendant folders and contained files go with it (cascade).
    /// Returns false when no folder with that id exists.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
