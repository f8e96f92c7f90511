//! Response DTOs for the Cabinet Web API.

use serde::Serialize;

use crate::folder::{FileRecord, Folder};
use crate::user::User;

/// Registration response.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Human-readable result message.
    pub response: String,
    /// The registered username.
    pub username: String,
}

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Human-readable result message.
    pub response: String,
    /// Bearer token (JWT).
    pub token: String,
}

/// Serialized user for profile responses.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Display name.
    pub nickname: String,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Bio text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Account creation timestamp.
    pub created_at: String,
    /// Last login timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            nickname: user.nickname,
            email: user.email,
            bio: user.bio,
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

/// Folder creation response.
#[derive(Debug, Serialize)]
pub struct FolderCreateResponse {
    /// ID of the created folder.
    pub folder_id: i64,
    /// Name of the created folder.
    pub folder_name: String,
    /// User ID of the folder owner.
    pub folder_owner: i64,
}

/// A folder in a listing.
#[derive(Debug, Serialize)]
pub struct FolderInfo {
    /// Folder ID.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// Parent folder ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl From<Folder> for FolderInfo {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            parent_id: folder.parent_id,
        }
    }
}

/// A file in a listing.
#[derive(Debug, Serialize)]
pub struct FileInfo {
    /// File ID.
    pub id: i64,
    /// Folder the file belongs to.
    pub folder_id: i64,
    /// Filename.
    pub filename: String,
    /// File size in bytes.
    pub size: i64,
}

impl From<FileRecord> for FileInfo {
    fn from(file: FileRecord) -> Self {
        Self {
            id: file.id,
            folder_id: file.folder_id,
            filename: file.filename,
            size: file.size,
        }
    }
}

/// Contents of a folder: direct child folders and direct files.
#[derive(Debug, Serialize)]
pub struct FolderContentsResponse {
    /// Direct child folders.
    pub folders: Vec<FolderInfo>,
    /// Files directly contained in the folder.
    pub files: Vec<FileInfo>,
}

/// Folder deletion response.
#[derive(Debug, Serialize)]
pub struct DeleteFolderResponse {
    /// Human-readable result message.
    pub response: String,
}
