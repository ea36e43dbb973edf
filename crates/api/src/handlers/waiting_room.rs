//! # Waiting-Room Handlers
//!
//! This module implements the admission flow for book-club video meetings.
//! Each (meeting, user) pair has at most one waiting record that moves
//! between three states:
//!
//! 1. A member requests to join. Meetings without a waiting room, and
//!    privileged members (admin/moderator), are admitted directly without a
//!    record. Everyone else is upserted to `waiting`.
//! 2. A privileged member lists the waiting participants and admits or
//!    rejects them. Both decisions are idempotent single-row updates.
//! 3. The participant polls their own status until it leaves `waiting`.
//!
//! Re-joining after a decision moves the record back to `waiting` and
//! resets its `joined_at`, so a rejection is not permanent across attempts.
//! Concurrent decisions on the same record resolve last-write-wins; each
//! update is a single atomic statement, so no torn state is possible.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;
use ebe_core::{
    errors::EbeError,
    models::waiting_room::{
        admission_decision, AdmissionDecision, DecisionRequest, DecisionResponse,
        JoinMeetingResponse, ListWaitingResponse, ParticipantStatus, SelfWaitingStatus,
        WaitingParticipantResponse, WaitingStatusResponse,
    },
};
use ebe_db::models::DbMeeting;
use uuid::Uuid;

use crate::{
    middleware::{auth::Claims, authz, error_handling::AppError},
    ApiState,
};

/// Requests to join a meeting, entering the waiting room when required
///
/// # Endpoint
///
/// ```text
/// POST /meetings/:meeting_id/waiting-room/join
/// ```
///
/// # Errors
///
/// * `EbeError::NotFound` - Meeting does not exist
/// * `EbeError::Authorization` - Caller is not a member of the owning club
#[axum::debug_handler]
pub async fn join_waiting_room(
    State(state): State<Arc<ApiState>>,
    Extension(claims): Extension<Claims>,
    Path(meeting_id): Path<Uuid>,
) -> Result<Json<JoinMeetingResponse>, AppError> {
    let meeting = get_meeting_or_not_found(&state, meeting_id).await?;

    // Membership gates every join attempt, regardless of waiting-room policy
    let role = authz::require_member(&state.db_pool, meeting.club_id, claims.sub).await?;

    if admission_decision(meeting.waiting_room_enabled, role) == AdmissionDecision::Admit {
        // No record is created for direct admissions
        return Ok(Json(JoinMeetingResponse {
            status: ParticipantStatus::Admitted,
            participant: None,
        }));
    }

    // Upsert keyed by (meeting, user): a repeated join refreshes joined_at,
    // and a join after a decision returns the record to `waiting`
    let record = ebe_db::repositories::waiting_room::upsert_waiting(
        &state.db_pool,
        meeting_id,
        claims.sub,
    )
    .await
    .map_err(EbeError::Database)?;

    let participant = load_participant_display(&state, &record.user_id, ParticipantStatus::Waiting, record.joined_at).await?;

    Ok(Json(JoinMeetingResponse {
        status: ParticipantStatus::Waiting,
        participant: Some(participant),
    }))
}

/// Lists the participants still waiting for a meeting
///
/// Restricted to club admins and moderators. Entries are ordered by
/// `joined_at` ascending so the display order is first come, first served.
///
/// # Endpoint
///
/// ```text
/// GET /meetings/:meeting_id/waiting-room/participants
/// ```
#[axum::debug_handler]
pub async fn list_waiting_participants(
    State(state): State<Arc<ApiState>>,
    Extension(claims): Extension<Claims>,
    Path(meeting_id): Path<Uuid>,
) -> Result<Json<ListWaitingResponse>, AppError> {
    let meeting = get_meeting_or_not_found(&state, meeting_id).await?;

    authz::require_privileged(&state.db_pool, meeting.club_id, claims.sub).await?;

    let entries = ebe_db::repositories::waiting_room::get_waiting_participants(
        &state.db_pool,
        meeting_id,
    )
    .await
    .map_err(EbeError::Database)?;

    // The query filters on status = 'waiting'
    let participants: Vec<WaitingParticipantResponse> = entries
        .into_iter()
        .map(|entry| WaitingParticipantResponse {
            user_id: entry.user_id,
            username: entry.username,
            name: entry.name,
            avatar_url: entry.avatar_url,
            status: ParticipantStatus::Waiting,
            joined_at: entry.joined_at,
        })
        .collect();

    Ok(Json(ListWaitingResponse {
        total: participants.len(),
        participants,
    }))
}

/// Admits a waiting participant into the meeting
///
/// # Endpoint
///
/// ```text
/// POST /meetings/:meeting_id/waiting-room/admit
/// ```
///
/// # Errors
///
/// * `EbeError::Validation` - Body is missing `user_id`
/// * `EbeError::Authorization` - Caller is not an admin or moderator
/// * `EbeError::NotFound` - Meeting or waiting record does not exist
#[axum::debug_handler]
pub async fn admit_participant(
    State(state): State<Arc<ApiState>>,
    Extension(claims): Extension<Claims>,
    Path(meeting_id): Path<Uuid>,
    Json(payload): Json<DecisionRequest>,
) -> Result<Json<DecisionResponse>, AppError> {
    apply_decision(
        &state,
        meeting_id,
        claims.sub,
        payload,
        ParticipantStatus::Admitted,
        "Participant admitted",
    )
    .await
}

/// Rejects a waiting participant
///
/// # Endpoint
///
/// ```text
/// POST /meetings/:meeting_id/waiting-room/reject
/// ```
#[axum::debug_handler]
pub async fn reject_participant(
    State(state): State<Arc<ApiState>>,
    Extension(claims): Extension<Claims>,
    Path(meeting_id): Path<Uuid>,
    Json(payload): Json<DecisionRequest>,
) -> Result<Json<DecisionResponse>, AppError> {
    apply_decision(
        &state,
        meeting_id,
        claims.sub,
        payload,
        ParticipantStatus::Rejected,
        "Participant rejected",
    )
    .await
}

/// Returns the caller's own waiting-room standing for a meeting
///
/// A user who never attempted to join gets the `not_found` pseudo-status as
/// a normal response body, not an error.
///
/// # Endpoint
///
/// ```text
/// GET /meetings/:meeting_id/waiting-room/status
/// ```
#[axum::debug_handler]
pub async fn waiting_room_status(
    State(state): State<Arc<ApiState>>,
    Extension(claims): Extension<Claims>,
    Path(meeting_id): Path<Uuid>,
) -> Result<Json<WaitingStatusResponse>, AppError> {
    let record = ebe_db::repositories::waiting_room::get_participant(
        &state.db_pool,
        meeting_id,
        claims.sub,
    )
    .await
    .map_err(EbeError::Database)?;

    let response = match record {
        Some(record) => {
            let status = ParticipantStatus::parse(&record.status).ok_or_else(|| {
                EbeError::Internal(
                    format!("Unrecognized participant status: {}", record.status).into(),
                )
            })?;

            WaitingStatusResponse {
                status: SelfWaitingStatus::from(status),
                joined_at: Some(record.joined_at),
            }
        }
        None => WaitingStatusResponse {
            status: SelfWaitingStatus::NotFound,
            joined_at: None,
        },
    };

    Ok(Json(response))
}

/// Shared admit/reject path: authorize the caller, validate the target, and
/// overwrite the record's status in one statement
async fn apply_decision(
    state: &Arc<ApiState>,
    meeting_id: Uuid,
    caller_id: Uuid,
    payload: DecisionRequest,
    status: ParticipantStatus,
    message: &str,
) -> Result<Json<DecisionResponse>, AppError> {
    let meeting = get_meeting_or_not_found(state, meeting_id).await?;

    authz::require_privileged(&state.db_pool, meeting.club_id, caller_id).await?;

    let target_user_id = payload
        .user_id
        .ok_or_else(|| EbeError::Validation("user_id is required".to_string()))?;

    // Overwrites unconditionally: re-admitting an admitted participant is a
    // no-op rather than an error
    let record = ebe_db::repositories::waiting_room::set_participant_status(
        &state.db_pool,
        meeting_id,
        target_user_id,
        status.as_str(),
    )
    .await
    .map_err(EbeError::Database)?
    .ok_or_else(|| {
        EbeError::NotFound(format!(
            "No waiting-room record for user {} in meeting {}",
            target_user_id, meeting_id
        ))
    })?;

    let participant = load_participant_display(state, &record.user_id, status, record.joined_at).await?;

    Ok(Json(DecisionResponse {
        message: message.to_string(),
        participant,
    }))
}

async fn get_meeting_or_not_found(
    state: &Arc<ApiState>,
    meeting_id: Uuid,
) -> Result<DbMeeting, AppError> {
    let meeting = ebe_db::repositories::meeting::get_meeting_by_id(&state.db_pool, meeting_id)
        .await
        .map_err(EbeError::Database)?
        .ok_or_else(|| EbeError::NotFound(format!("Meeting with ID {} not found", meeting_id)))?;

    Ok(meeting)
}

/// Joins a waiting record with the user's public display fields
async fn load_participant_display(
    state: &Arc<ApiState>,
    user_id: &Uuid,
    status: ParticipantStatus,
    joined_at: chrono::DateTime<chrono::Utc>,
) -> Result<WaitingParticipantResponse, AppError> {
    let user = ebe_db::repositories::user::get_user_by_id(&state.db_pool, *user_id)
        .await
        .map_err(EbeError::Database)?
        .ok_or_else(|| EbeError::NotFound(format!("User with ID {} not found", user_id)))?;

    Ok(WaitingParticipantResponse {
        user_id: user.id,
        username: user.username,
        name: user.name,
        avatar_url: user.avatar_url,
        status,
        joined_at,
    })
}
