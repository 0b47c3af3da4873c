use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;

use crate::auth::token;
use crate::error::AppError;
use crate::routes::AppState;

/// Bearer gate for protected routes. Resolves the presented token to a
/// user and stashes it in request extensions; handlers pick it up via
/// `Extension<User>`. Missing header, wrong scheme, or an unknown token
/// all surface as 401.
pub async fn require_auth(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(auth) = bearer.ok_or(AppError::Unauthenticated)?;

    let user = token::resolve_token(&state.store, auth.token())
        .ok_or(AppError::Unauthenticated)?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
