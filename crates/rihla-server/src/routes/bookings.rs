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
use crate::models::{Booking, User};
use crate::routes::{require, AppState};

const DEFAULT_DATE: &str = "2025-08-26";
const DEFAULT_STATUS: &str = "confirmed";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub experience_id: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload.map_err(|_| AppError::BadRequest("Invalid JSON body".to_string()))?;

    let experience_id = require("experienceId", body.experience_id)?;

    // The booking owner is always the authenticated caller; a userId in
    // the body is ignored.
    let booking = Booking {
        id: Uuid::new_v4().to_string(),
        user_id: user.id,
        experience_id,
        date: body.date.unwrap_or_else(|| DEFAULT_DATE.to_string()),
        status: body.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
    };
    state.store.insert_booking(booking.clone());

    tracing::info!(booking_id = %booking.id, user_id = %booking.user_id, "created booking");

    Ok((StatusCode::CREATED, envelope::success("booking", booking)))
}

pub async fn my_bookings(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Json<Value> {
    envelope::success("bookings", state.store.bookings_for_user(&user.id))
}
