mod auth;
mod bookings;
mod experiences;
mod users;

use std::sync::Arc;

use axum::{
    middleware,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::auth::middleware::require_auth;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub config: Config,
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Rihla Backend API is running"
    }))
}

async fn api_root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Rihla API",
        "endpoints": [
            "/auth/register", "/auth/login", "/auth/me",
            "/experiences", "/users/{id}", "/bookings"
        ]
    }))
}

async fn api_redirect() -> Redirect {
    Redirect::temporary("/api/")
}

/// Presence + non-empty check for a required string field. The error
/// carries the wire name of the missing field.
pub(crate) fn require(field: &'static str, value: Option<String>) -> AppResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(field.to_string())),
    }
}

/// Presence check for non-string required fields.
pub(crate) fn require_some<T>(field: &'static str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| AppError::Validation(field.to_string()))
}

pub fn create_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/api", get(api_redirect))
        .route("/api/", get(api_root));

    let public = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/experiences", get(experiences::list))
        .route("/api/users/{user_id}", get(users::profile));

    let protected = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/experiences", post(experiences::create))
        .route("/api/bookings", post(bookings::create))
        .route("/api/bookings/my-bookings", get(bookings::my_bookings))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(health_routes)
        .merge(public)
        .merge(protected)
        .with_state(state)
}
