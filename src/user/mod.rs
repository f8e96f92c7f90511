//! User model and repository for Cabinet.

use sqlx::{QueryBuilder, SqlitePool};

use crate::{CabinetError, Result};

/// User entity representing a registered account.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Login username (unique).
    pub username: String,
    /// Password hash (Argon2).
    pub password: String,
    /// Display name.
    pub nickname: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Self-introduction text (optional).
    pub bio: Option<String>,
    /// Account creation timestamp.
    pub created_at: String,
    /// Last login timestamp (optional).
    pub last_login: Option<String>,
    /// Whether the account is active.
    pub is_active: bool,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login username.
    pub username: String,
    /// Password hash (should be pre-hashed with Argon2).
    pub password: String,
    /// Display name.
    pub nickname: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Self-introduction text (optional).
    pub bio: Option<String>,
}

impl NewUser {
    /// Create a new user with minimal required fields.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            nickname: nickname.into(),
            email: None,
            bio: None,
        }
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the bio text.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }
}

/// Builder for partial updates to a user.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    /// New password hash (if changing password).
    pub password: Option<String>,
    /// New nickname.
    pub nickname: Option<String>,
    /// New email address.
    pub email: Option<Option<String>>,
    /// New bio text.
    pub bio: Option<Option<String>>,
    /// New active status.
    pub is_active: Option<bool>,
}

impl UserUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set new password hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set new nickname.
    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Set new email.
    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = Some(email);
        self
    }

    /// Set new bio.
    pub fn bio(mut self, bio: Option<String>) -> Self {
        self.bio = Some(bio);
        self
    }

    /// Set active status.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.password.is_none()
            && self.nickname.is_none()
            && self.email.is_none()
            && self.bio.is_none()
            && self.is_active.is_none()
    }
}

/// Repository for user operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user.
    ///
    /// A username collision surfaces as `CabinetError::Duplicate`.
    pub async fn create(&self, user: &NewUser) -> Result<User> {
        let result = sqlx::query(
            "INSERT INTO users (username, password, nickname, email, bio)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.nickname)
        .bind(&user.email)
        .bind(&user.bio)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|d| d.is_unique_violation())
            {
                CabinetError::Duplicate("username".to_string())
            } else {
                CabinetError::Database(e.to_string())
            }
        })?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| CabinetError::NotFound("user".to_string()))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, nickname, email, bio, created_at, last_login, is_active
             FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get a user by username.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, nickname, email, bio, created_at, last_login, is_active
             FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Apply a partial update to a user.
    pub async fn update(&self, id: i64, update: &UserUpdate) -> Result<Option<User>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE users SET ");
        let mut separated = query.separated(", ");

        if let Some(ref password) = update.password {
            separated.push("password = ");
            separated.push_bind_unseparated(password);
        }

        if let Some(ref nickname) = update.nickname {
            separated.push("nickname = ");
            separated.push_bind_unseparated(nickname);
        }

        if let Some(ref email) = update.email {
            separated.push("email = ");
            separated.push_bind_unseparated(email.clone());
        }

        if let Some(ref bio) = update.bio {
            separated.push("bio = ");
            separated.push_bind_unseparated(bio.clone());
        }

        if let Some(is_active) = update.is_active {
            separated.push("is_active = ");
            separated.push_bind_unseparated(is_active);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(self.pool).await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Record a successful login.
    pub async fn update_last_login(&self, id: i64) -> Result<()> {
        sqlx::query("UPDATE users SET last_login = datetime('now') WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
