use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Uniform success shape: `{"success": true, "data": {<key>: <value>}}`.
/// Failures are shaped by `AppError::into_response`.
pub fn success(key: &'static str, value: impl Serialize) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": { key: value }
    }))
}

/// Register and login nest the minted token next to the user payload.
pub fn user_with_token(user: impl Serialize, token: &str) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "user": user,
            "tokens": { "accessToken": token }
        }
    }))
}
