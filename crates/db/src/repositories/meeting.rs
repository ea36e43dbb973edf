use crate::models::DbMeeting;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_meeting(
    pool: &Pool<Postgres>,
    club_id: Uuid,
    title: &str,
    scheduled_at: DateTime<Utc>,
    duration_minutes: i32,
    waiting_room_enabled: bool,
) -> Result<DbMeeting> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating meeting: id={}, club_id={}, waiting_room_enabled={}",
        id,
        club_id,
        waiting_room_enabled
    );

    let meeting = sqlx::query_as::<_, DbMeeting>(
        r#"
        INSERT INTO meetings (id, club_id, title, scheduled_at, duration_minutes, status, waiting_room_enabled, created_at)
        VALUES ($1, $2, $3, $4, $5, 'scheduled', $6, $7)
        RETURNING id, club_id, title, scheduled_at, duration_minutes, status, waiting_room_enabled, created_at
        "#,
    )
    .bind(id)
    .bind(club_id)
    .bind(title)
    .bind(scheduled_at)
    .bind(duration_minutes)
    .bind(waiting_room_enabled)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(meeting)
}

pub async fn get_meeting_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbMeeting>> {
    let meeting = sqlx::query_as::<_, DbMeeting>(
        r#"
        SELECT id, club_id, title, scheduled_at, duration_minutes, status, waiting_room_enabled, created_at
        FROM meetings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(meeting)
}
