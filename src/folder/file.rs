//! File record types and repository for Cabinet.
//!
//! Files are read-only on the HTTP surface; `create` exists for seeding
//! and administrative tooling.

use sqlx::SqlitePool;

use crate::Result;

/// A file record attached to a folder.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FileRecord {
    /// Unique file ID.
    pub id: i64,
    /// Folder ID this file belongs to.
    pub folder_id: i64,
    /// Filename (display name).
    pub filename: String,
    /// File size in bytes.
    pub size: i64,
    /// User ID of the uploader.
    pub uploader_id: i64,
    /// When the file was recorded.
    pub created_at: String,
}

/// Data for creating a new file record.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    /// Folder ID this file belongs to.
    pub folder_id: i64,
    /// Filename (display name).
    pub filename: String,
    /// File size in bytes.
    pub size: i64,
    /// User ID of the uploader.
    pub uploader_id: i64,
}

impl NewFileRecord {
    /// Create a new NewFileRecord.
    pub fn new(folder_id: i64, filename: impl Into<String>, size: i64, uploader_id: i64) -> Self {
        Self {
            folder_id,
            filename: filename.into(),
            size,
            uploader_id,
        }
    }
}

/// Repository for file record operations.
pub struct FileRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FileRepository<'a> {
    /// Create a new FileRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new file record.
    pub async fn create(&self, file: &NewFileRecord) -> Result<FileRecord> {
        let result = sqlx::query(
            "INSERT INTO files (folder_id, filename, size, uploader_id)
             VALUES (?, ?, ?, ?)",
        )
        .bind(file.folder_id)
        .bind(&file.filename)
        .bind(file.size)
        .bind(file.uploader_id)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        let record = sqlx::query_as::<_, FileRecord>(
            "SELECT id, folder_id, filename, size, uploader_id, created_at
             FROM files WHERE id = ?",
        )
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }

    /// List files in a folder.
    pub async fn list_by_folder(&self, folder_id: i64) -> Result<Vec<FileRecord>> {
        let files = sqlx::query_as::<_, FileRecord>(
            "SELECT id, folder_id, filename, size, uploader_id, created_at
             FROM files WHERE folder_id = ? ORDER BY id",
        )
        .bind(folder_id)
        .fetch_all(self.pool)
        .await?;

        Ok(files)
    }

    /// Count files in a folder.
    pub async fn count_by_folder(&self, folder_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files WHERE folder_id = ?")
            .bind(folder_id)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
