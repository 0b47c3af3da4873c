use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::envelope;
use crate::error::{AppError, AppResult};
use crate::models::{Experience, User};
use crate::routes::{require, require_some, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<f64>,
    pub group_size: Option<u32>,
    pub highlights: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub host_id: Option<String>,
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    payload: Result<Json<CreateExperienceRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    // Role check comes before any look at the body.
    if !user.is_host {
        return Err(AppError::Forbidden(
            "Only hosts can create experiences".to_string(),
        ));
    }

    let Json(body) = payload.map_err(|_| AppError::BadRequest("Invalid JSON body".to_string()))?;

    // An absent or empty hostId falls back to the creating caller.
    let host_id = match body.host_id {
        Some(id) if !id.is_empty() => id,
        _ => user.id,
    };

    let experience = Experience {
        id: Uuid::new_v4().to_string(),
        title: require("title", body.title)?,
        description: require("description", body.description)?,
        category: require("category", body.category)?,
        location: require("location", body.location)?,
        price: require_some("price", body.price)?,
        duration: require_some("duration", body.duration)?,
        group_size: require_some("groupSize", body.group_size)?,
        highlights: require_some("highlights", body.highlights)?,
        images: require_some("images", body.images)?,
        host_id,
    };
    state.store.insert_experience(experience.clone());

    tracing::info!(experience_id = %experience.id, host_id = %experience.host_id, "created experience");

    Ok((
        StatusCode::CREATED,
        envelope::success("experience", experience),
    ))
}

pub async fn list(State(state): State<AppState>) -> Json<Value> {
    envelope::success("experiences", state.store.all_experiences())
}
