use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::membership::ClubRole;

/// Status of a waiting-room record for one (meeting, user) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    Waiting,
    Admitted,
    Rejected,
}

impl ParticipantStatus {
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "waiting" => Some(Self::Waiting),
            "admitted" => Some(Self::Admitted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Admitted => "admitted",
            Self::Rejected => "rejected",
        }
    }
}

/// Status reported to a participant polling their own standing. Unlike
/// [`ParticipantStatus`], this includes `not_found` for users who never
/// attempted to join — a normal answer, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfWaitingStatus {
    NotFound,
    Waiting,
    Admitted,
    Rejected,
}

impl From<ParticipantStatus> for SelfWaitingStatus {
    fn from(status: ParticipantStatus) -> Self {
        match status {
            ParticipantStatus::Waiting => Self::Waiting,
            ParticipantStatus::Admitted => Self::Admitted,
            ParticipantStatus::Rejected => Self::Rejected,
        }
    }
}

/// Outcome of the admission rule for a single join attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionDecision {
    Admit,
    Wait,
}

/// Decides whether a club member enters the call directly or is held in the
/// waiting room. Meetings without a waiting room admit everyone; privileged
/// members bypass an enabled waiting room.
pub fn admission_decision(waiting_room_enabled: bool, role: ClubRole) -> AdmissionDecision {
    if !waiting_room_enabled || role.is_privileged() {
        AdmissionDecision::Admit
    } else {
        AdmissionDecision::Wait
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitingParticipantResponse {
    pub user_id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub status: ParticipantStatus,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinMeetingResponse {
    pub status: ParticipantStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<WaitingParticipantResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListWaitingResponse {
    pub participants: Vec<WaitingParticipantResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub message: String,
    pub participant: WaitingParticipantResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitingStatusResponse {
    pub status: SelfWaitingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}
