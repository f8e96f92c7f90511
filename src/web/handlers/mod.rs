//! API handlers for the Cabinet Web API.

pub mod auth;
pub mod folder;
pub mod profile;

pub use auth::*;
pub use folder::*;
pub use profile::*;
