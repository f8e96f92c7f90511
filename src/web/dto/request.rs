//! Request DTOs for the Cabinet Web API.

use serde::Deserialize;
use validator::Validate;

use super::validation::{folder_name_format, not_empty_trimmed, username_format};

/// User registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username.
    #[validate(custom(function = "username_format"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
    /// Display name.
    #[validate(
        length(min = 1, max = 20, message = "Nickname must be 1-20 characters"),
        custom(function = "not_empty_trimmed")
    )]
    pub nickname: String,
    /// Email (optional).
    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    /// Bio text (optional).
    #[serde(default)]
    #[validate(length(max = 500, message = "Bio must be 500 characters or less"))]
    pub bio: Option<String>,
}

/// Login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile update request (all fields optional).
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New display name.
    #[serde(default)]
    #[validate(length(min = 1, max = 20, message = "Nickname must be 1-20 characters"))]
    pub nickname: Option<String>,
    /// New email address (empty string clears it).
    #[serde(default)]
    pub email: Option<String>,
    /// New bio text (empty string clears it).
    #[serde(default)]
    #[validate(length(max = 500, message = "Bio must be 500 characters or less"))]
    pub bio: Option<String>,
}

/// Folder creation request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Name of the folder to create.
    #[validate(
        length(min = 1, max = 100, message = "Folder name must be 1-100 characters"),
        custom(function = "folder_name_format")
    )]
    pub folder_name: String,
}
