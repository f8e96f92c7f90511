//! Authentication for Cabinet.
//!
//! Password hashing and registration input validation. Token issuance and
//! verification live in the web layer next to the request extractors.

pub mod password;
pub mod validation;

pub use password::{hash_password, validate_password, verify_password, PasswordError};
pub use validation::{validate_username, ValidationError};
