use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    Scheduled,
    InProgress,
    Recording,
    Completed,
    Cancelled,
}

impl MeetingStatus {
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "scheduled" => Some(Self::Scheduled),
            "in_progress" => Some(Self::InProgress),
            "recording" => Some(Self::Recording),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Recording => "recording",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMeetingRequest {
    pub title: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    #[serde(default)]
    pub waiting_room_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingResponse {
    pub id: Uuid,
    pub club_id: Uuid,
    pub title: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: MeetingStatus,
    pub waiting_room_enabled: bool,
    pub created_at: DateTime<Utc>,
}
