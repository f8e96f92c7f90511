//! Router configuration for the Web API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_folder, delete_folder, get_folder, get_profile, login, register, update_profile,
    AppState,
};
use super::middleware::{create_cors_layer, jwt_auth, JwtState};

/// Create the main API router.
pub fn create_router(
    app_state: Arc<AppState>,
    jwt_state: Arc<JwtState>,
    cors_origins: &[String],
) -> Router {
    // Auth routes (no authentication required)
    let auth_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login));

    // Profile routes (authentication required)
    let profile_routes = Router::new().route("/profile", get(get_profile).put(update_profile));

    // Folder routes (authentication required)
    let folder_routes = Router::new().route(
        "/folders/:folder_id",
        post(create_folder).get(get_folder).delete(delete_folder),
    );

    // API routes
    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .merge(profile_routes)
        .merge(folder_routes);

    // Clone jwt_state for the middleware closure
    let jwt_state_for_middleware = jwt_state.clone();

    // Build the main router with middleware
    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let state = jwt_state_for_middleware.clone();
                    jwt_auth(state, req, next)
                })),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_health_router() {
        let _router = create_health_router();
        // Should not panic
    }
}
