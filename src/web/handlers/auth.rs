//! Authentication handlers.

use axum::{extract::State, http::StatusCode, Json};
use jsonwebtoken::{encode, EncodingKey, Header};
use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::{hash_password, verify_password};
use crate::user::{NewUser, UserRepository};
use crate::web::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::middleware::JwtClaims;
use crate::{CabinetError, Database};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// JWT encoding key.
    pub encoding_key: EncodingKey,
    /// Token expiry in seconds.
    pub token_expiry_secs: u64,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, jwt_secret: &str, token_expiry_secs: u64) -> Self {
        Self {
            db,
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            token_expiry_secs,
        }
    }

    /// Generate a bearer token for a user.
    pub fn generate_token(&self, user_id: i64, username: &str) -> Result<String, ApiError> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = JwtClaims {
            sub: user_id,
            username: username.to_string(),
            iat: now,
            exp: now + self.token_expiry_secs,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode JWT: {}", e);
            ApiError::internal("Failed to generate token")
        })
    }
}

/// POST /api/auth/register - User registration.
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    // Hash password
    let password_hash = hash_password(&req.password)
        .map_err(|e| ApiError::unprocessable(format!("Password error: {}", e)))?;

    // Create user
    let mut new_user = NewUser::new(&req.username, password_hash, &req.nickname);
    if let Some(ref email) = req.email {
        new_user = new_user.with_email(email);
    }
    if let Some(ref bio) = req.bio {
        new_user = new_user.with_bio(bio);
    }

    let repo = UserRepository::new(state.db.pool());
    let user = repo.create(&new_user).await.map_err(|e| match e {
        CabinetError::Duplicate(_) => {
            // A taken username is reported like any other field error
            let mut details = HashMap::new();
            details.insert(
                "username".to_string(),
                vec!["Username already exists".to_string()],
            );
            ApiError::validation(details)
        }
        e => {
            tracing::error!("User creation failed: {}", e);
            ApiError::internal("Failed to create user")
        }
    })?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    let response = RegisterResponse {
        response: "User created successfully".to_string(),
        username: user.username,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login - User login.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    // Get user from database
    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .get_by_username(&req.username)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up user: {}", e);
            ApiError::internal("Failed to log in")
        })?
        .ok_or_else(|| ApiError::unauthorized("Invalid username or password"))?;

    // Verify password
    verify_password(&req.password, &user.password)
        .map_err(|_| ApiError::unauthorized("Invalid username or password"))?;

    // Check if user is active
    if !user.is_active {
        return Err(ApiError::unauthorized("Account is disabled"));
    }

    // Generate token and record the login
    let token = state.generate_token(user.id, &user.username)?;
    let _ = repo.update_last_login(user.id).await;

    let response = LoginResponse {
        response: "User logged in successfully".to_string(),
        token,
    };

    Ok(Json(response))
}
