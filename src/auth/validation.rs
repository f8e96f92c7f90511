//! Input validation for Cabinet user registration.

use thiserror::Error;

/// Minimum username length.
pub const MIN_USERNAME_LENGTH: usize = 4;

/// Maximum username length.
pub const MAX_USERNAME_LENGTH: usize = 16;

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Username is too short.
    #[error("username must be at least {MIN_USERNAME_LENGTH} characters")]
    UsernameTooShort,

    /// Username is too long.
    #[error("username must be at most {MAX_USERNAME_LENGTH} characters")]
    UsernameTooLong,

    /// Username contains invalid characters.
    #[error("username can only contain alphanumeric characters and underscores")]
    UsernameInvalidChars,

    /// Username is reserved.
    #[error("this username is reserved")]
    UsernameReserved,
}

/// Reserved usernames that cannot be registered.
const RESERVED_USERNAMES: &[&str] = &[
    "guest",
    "admin",
    "root",
    "system",
    "anonymous",
    "administrator",
    "moderator",
    "support",
    "help",
    "info",
    "null",
    "undefined",
    "cabinet",
];

/// Check if a username is reserved.
pub fn is_reserved_username(username: &str) -> bool {
    let lower = username.to_lowercase();
    RESERVED_USERNAMES.iter().any(|&r| r == lower)
}

/// Validate a username.
///
/// Requirements:
/// - Length: 4-16 characters
/// - Characters: alphanumeric (a-z, A-Z, 0-9) and underscore (_)
/// - Not a reserved username
///
/// # Examples
///
/// ```
/// use cabinet::auth::validate_username;
///
/// assert!(validate_username("john_doe").is_ok());
/// assert!(validate_username("ab").is_err()); // too short
/// assert!(validate_username("admin").is_err()); // reserved
/// ```
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.len() < MIN_USERNAME_LENGTH {
        return Err(ValidationError::UsernameTooShort);
    }
    if username.len() > MAX_USERNAME_LENGTH {
        return Err(ValidationError::UsernameTooLong);
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ValidationError::UsernameInvalidChars);
    }

    if is_reserved_username(username) {
        return Err(ValidationError::UsernameReserved);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("john").is_ok());
        assert!(validate_username("john_doe").is_ok());
        assert!(validate_username("user1234").is_ok());
        assert!(validate_username("a_b_c_d").is_ok());
    }

    #[test]
    fn test_username_too_short() {
        assert_eq!(
            validate_username("abc"),
            Err(ValidationError::UsernameTooShort)
        );
        assert_eq!(validate_username(""), Err(ValidationError::UsernameTooShort));
    }

    #[test]
    fn test_username_too_long() {
        assert_eq!(
            validate_username("a_very_long_username"),
            Err(ValidationError::UsernameTooLong)
        );
    }

    #[test]
    fn test_username_invalid_chars() {
        assert_eq!(
            validate_username("john doe"),
            Err(ValidationError::UsernameInvalidChars)
        );
        assert_eq!(
            validate_username("john-doe"),
            Err(ValidationError::UsernameInvalidChars)
        );
        assert_eq!(
            validate_username("user@123"),
            Err(ValidationError::UsernameInvalidChars)
        );
    }

    #[test]
    fn test_username_reserved() {
        assert_eq!(
            validate_username("admin"),
            Err(ValidationError::UsernameReserved)
        );
        assert_eq!(
            validate_username("Admin"),
            Err(ValidationError::UsernameReserved)
        );
        assert_eq!(
            validate_username("guest"),
            Err(ValidationError::UsernameReserved)
        );
    }

    #[test]
    fn test_is_reserved_username() {
        assert!(is_reserved_username("root"));
        assert!(is_reserved_username("ROOT"));
        assert!(!is_reserved_username("rootbeer"));
    }
}
