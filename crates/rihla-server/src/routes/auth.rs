use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::token;
use crate::envelope;
use crate::error::{AppError, AppResult};
use crate::models::{User, UserPublic};
use crate::routes::{require, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub is_host: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload.map_err(|_| AppError::BadRequest("Invalid JSON body".to_string()))?;

    let first_name = require("firstName", body.first_name)?;
    let last_name = require("lastName", body.last_name)?;
    let email = require("email", body.email)?;
    let password = require("password", body.password)?;

    let user = User {
        id: Uuid::new_v4().to_string(),
        first_name,
        last_name,
        email,
        password,
        is_host: body.is_host,
    };
    state.store.insert_user(user.clone())?;

    tracing::info!(user_id = %user.id, "registered user");

    let token = token::mint_token(&user.id);
    Ok((
        StatusCode::CREATED,
        envelope::user_with_token(UserPublic::from(user), &token),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload.map_err(|_| AppError::BadRequest("Invalid JSON body".to_string()))?;

    let user = body
        .email
        .as_deref()
        .and_then(|email| state.store.user_by_email(email));

    // One rejection path for both unknown email and wrong password, so the
    // response never reveals which was wrong.
    let user = match user {
        Some(u) if body.password.as_deref() == Some(u.password.as_str()) => u,
        _ => return Err(AppError::Unauthenticated),
    };

    let token = token::mint_token(&user.id);
    Ok(envelope::user_with_token(UserPublic::from(user), &token))
}

pub async fn me(Extension(user): Extension<User>) -> Json<Value> {
    envelope::success("user", UserPublic::from(user))
}
