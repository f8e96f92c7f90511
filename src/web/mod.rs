//! Web API module for Cabinet.
//!
//! REST endpoints for registration, login, profile management, and the
//! folder/file hierarchy.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
