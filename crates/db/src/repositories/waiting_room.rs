use crate::models::{DbWaitingEntry, DbWaitingParticipant};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Creates or refreshes the waiting record for one (meeting, user) pair.
/// A re-join while already waiting, admitted, or rejected moves the record
/// back to `waiting` and resets `joined_at`.
pub async fn upsert_waiting(
    pool: &Pool<Postgres>,
    meeting_id: Uuid,
    user_id: Uuid,
) -> Result<DbWaitingParticipant> {
    let now = Utc::now();

    tracing::debug!(
        "Upserting waiting record: meeting_id={}, user_id={}",
        meeting_id,
        user_id
    );

    let participant = sqlx::query_as::<_, DbWaitingParticipant>(
        r#"
        INSERT INTO waiting_participants (meeting_id, user_id, status, joined_at)
        VALUES ($1, $2, 'waiting', $3)
        ON CONFLICT (meeting_id, user_id)
        DO UPDATE SET status = 'waiting', joined_at = EXCLUDED.joined_at
        RETURNING meeting_id, user_id, status, joined_at
        "#,
    )
    .bind(meeting_id)
    .bind(user_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(participant)
}

/// Returns the still-waiting participants for a meeting, first come first
/// served, joined with each user's public display fields.
pub async fn get_waiting_participants(
    pool: &Pool<Postgres>,
    meeting_id: Uuid,
) -> Result<Vec<DbWaitingEntry>> {
    let entries = sqlx::query_as::<_, DbWaitingEntry>(
        r#"
        SELECT wp.meeting_id, wp.user_id, u.username, u.name, u.avatar_url, wp.status, wp.joined_at
        FROM waiting_participants wp
        JOIN users u ON u.id = wp.user_id
        WHERE wp.meeting_id = $1 AND wp.status = 'waiting'
        ORDER BY wp.joined_at ASC
        "#,
    )
    .bind(meeting_id)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// Applies an admit/reject decision. Returns `None` when no record exists for
/// the pair; re-applying the same status is a plain overwrite.
pub async fn set_participant_status(
    pool: &Pool<Postgres>,
    meeting_id: Uuid,
    user_id: Uuid,
    status: &str,
) -> Result<Option<DbWaitingParticipant>> {
    tracing::debug!(
        "Setting participant status: meeting_id={}, user_id={}, status={}",
        meeting_id,
        user_id,
        status
    );

    let participant = sqlx::query_as::<_, DbWaitingParticipant>(
        r#"
        UPDATE waiting_participants
        SET status = $3
        WHERE meeting_id = $1 AND user_id = $2
        RETURNING meeting_id, user_id, status, joined_at
        "#,
    )
    .bind(meeting_id)
    .bind(user_id)
    .bind(status)
    .fetch_optional(pool)
    .await?;

    Ok(participant)
}

pub async fn get_participant(
    pool: &Pool<Postgres>,
    meeting_id: Uuid,
    user_id: Uuid,
) -> Result<Option<DbWaitingParticipant>> {
    let participant = sqlx::query_as::<_, DbWaitingParticipant>(
        r#"
        SELECT meeting_id, user_id, status, joined_at
        FROM waiting_participants
        WHERE meeting_id = $1 AND user_id = $2
        "#,
    )
    .bind(meeting_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(participant)
}
