//! Cabinet - a small REST backend for user accounts and hierarchical
//! folder listings, implemented in Rust.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod folder;
pub mod logging;
pub mod user;
pub mod web;

pub use auth::{hash_password, validate_password, validate_username, verify_password};
pub use config::Config;
pub use db::Database;
pub use error::{CabinetError, Result};
pub use folder::{FileRecord, FileRepository, Folder, FolderRepository, NewFileRecord, NewFolder};
pub use user::{NewUser, User, UserRepository, UserUpdate};
pub use web::WebServer;
