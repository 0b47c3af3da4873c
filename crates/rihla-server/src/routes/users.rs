use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::envelope;
use crate::models::UserPublic;
use crate::routes::AppState;

/// Public profile lookup. An unknown id yields a 200 envelope with a null
/// user rather than a 404.
pub async fn profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Value> {
    let user = state
        .store
        .find_user_by_id(&user_id)
        .map(UserPublic::from);
    envelope::success("user", user)
}
