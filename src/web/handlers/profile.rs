//! Profile handlers.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::user::{UserRepository, UserUpdate};
use crate::web::dto::{UpdateProfileRequest, UserResponse, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::AuthUser;

/// GET /api/profile - Get the authenticated user's profile.
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .get_by_id(claims.sub)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user: {}", e);
            ApiError::internal("Failed to get profile")
        })?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/profile - Update the authenticated user's profile.
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    // Build update struct; empty strings clear optional fields
    let mut update = UserUpdate::new();

    if let Some(nickname) = req.nickname {
        update = update.nickname(nickname);
    }

    if let Some(email) = req.email {
        let email_opt = if email.trim().is_empty() {
            None
        } else {
            Some(email)
        };
        update = update.email(email_opt);
    }

    if let Some(bio) = req.bio {
        let bio_opt = if bio.trim().is_empty() {
            None
        } else {
            Some(bio)
        };
        update = update.bio(bio_opt);
    }

    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .update(claims.sub, &update)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update profile: {}", e);
            ApiError::internal("Failed to update profile")
        })?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(UserResponse::from(user)))
}
