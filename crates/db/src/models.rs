use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbMeeting {
    pub id: Uuid,
    pub club_id: Uuid,
    pub title: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: String,
    pub waiting_room_enabled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClubMember {
    pub club_id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWaitingParticipant {
    pub meeting_id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub joined_at: DateTime<Utc>,
}

/// Waiting-room row joined with the participant's public display fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWaitingEntry {
    pub meeting_id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub status: String,
    pub joined_at: DateTime<Utc>,
}
