use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;
use ebe_core::{
    errors::EbeError,
    models::meeting::{CreateMeetingRequest, MeetingResponse, MeetingStatus},
};
use uuid::Uuid;

use crate::{
    middleware::{auth::Claims, authz, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn create_meeting(
    State(state): State<Arc<ApiState>>,
    Extension(claims): Extension<Claims>,
    Path(club_id): Path<Uuid>,
    Json(payload): Json<CreateMeetingRequest>,
) -> Result<Json<MeetingResponse>, AppError> {
    // Only privileged members may schedule meetings for a club
    authz::require_privileged(&state.db_pool, club_id, claims.sub).await?;

    if payload.duration_minutes <= 0 {
        return Err(AppError(EbeError::Validation(
            "duration_minutes must be positive".to_string(),
        )));
    }

    let db_meeting = ebe_db::repositories::meeting::create_meeting(
        &state.db_pool,
        club_id,
        &payload.title,
        payload.scheduled_at,
        payload.duration_minutes,
        payload.waiting_room_enabled,
    )
    .await
    .map_err(EbeError::Database)?;

    let response = MeetingResponse {
        id: db_meeting.id,
        club_id: db_meeting.club_id,
        title: db_meeting.title,
        scheduled_at: db_meeting.scheduled_at,
        duration_minutes: db_meeting.duration_minutes,
        status: MeetingStatus::Scheduled,
        waiting_room_enabled: db_meeting.waiting_room_enabled,
        created_at: db_meeting.created_at,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_meeting(
    State(state): State<Arc<ApiState>>,
    Extension(claims): Extension<Claims>,
    Path(meeting_id): Path<Uuid>,
) -> Result<Json<MeetingResponse>, AppError> {
    // Get meeting from database
    let db_meeting = ebe_db::repositories::meeting::get_meeting_by_id(&state.db_pool, meeting_id)
        .await
        .map_err(EbeError::Database)?
        .ok_or_else(|| EbeError::NotFound(format!("Meeting with ID {} not found", meeting_id)))?;

    // Meeting details are visible to club members only
    authz::require_member(&state.db_pool, db_meeting.club_id, claims.sub).await?;

    let status = MeetingStatus::parse(&db_meeting.status).ok_or_else(|| {
        EbeError::Internal(format!("Unrecognized meeting status: {}", db_meeting.status).into())
    })?;

    let response = MeetingResponse {
        id: db_meeting.id,
        club_id: db_meeting.club_id,
        title: db_meeting.title,
        scheduled_at: db_meeting.scheduled_at,
        duration_minutes: db_meeting.duration_minutes,
        status,
        waiting_room_enabled: db_meeting.waiting_room_enabled,
        created_at: db_meeting.created_at,
    };

    Ok(Json(response))
}
