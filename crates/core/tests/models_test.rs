use chrono::Utc;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use uuid::Uuid;

use ebe_core::models::{
    meeting::{CreateMeetingRequest, MeetingResponse, MeetingStatus},
    membership::ClubRole,
    waiting_room::{
        admission_decision, AdmissionDecision, DecisionRequest, JoinMeetingResponse,
        ParticipantStatus, SelfWaitingStatus, WaitingParticipantResponse, WaitingStatusResponse,
    },
};

#[rstest]
#[case(false, ClubRole::Member, AdmissionDecision::Admit)]
#[case(false, ClubRole::Moderator, AdmissionDecision::Admit)]
#[case(false, ClubRole::Admin, AdmissionDecision::Admit)]
#[case(true, ClubRole::Admin, AdmissionDecision::Admit)]
#[case(true, ClubRole::Moderator, AdmissionDecision::Admit)]
#[case(true, ClubRole::Member, AdmissionDecision::Wait)]
fn test_admission_decision(
    #[case] waiting_room_enabled: bool,
    #[case] role: ClubRole,
    #[case] expected: AdmissionDecision,
) {
    assert_eq!(admission_decision(waiting_room_enabled, role), expected);
}

#[test]
fn test_club_role_parse_round_trip() {
    for role in [ClubRole::Admin, ClubRole::Moderator, ClubRole::Member] {
        assert_eq!(ClubRole::parse(role.as_str()), Some(role));
    }
    assert_eq!(ClubRole::parse("owner"), None);
    assert_eq!(ClubRole::parse(""), None);
}

#[test]
fn test_club_role_privileges() {
    assert!(ClubRole::Admin.is_privileged());
    assert!(ClubRole::Moderator.is_privileged());
    assert!(!ClubRole::Member.is_privileged());
}

#[test]
fn test_participant_status_parse_round_trip() {
    for status in [
        ParticipantStatus::Waiting,
        ParticipantStatus::Admitted,
        ParticipantStatus::Rejected,
    ] {
        assert_eq!(ParticipantStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(ParticipantStatus::parse("banned"), None);
}

#[test]
fn test_meeting_status_parse_round_trip() {
    for status in [
        MeetingStatus::Scheduled,
        MeetingStatus::InProgress,
        MeetingStatus::Recording,
        MeetingStatus::Completed,
        MeetingStatus::Cancelled,
    ] {
        assert_eq!(MeetingStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(MeetingStatus::parse("paused"), None);
}

#[test]
fn test_join_response_direct_admission_omits_participant() {
    let response = JoinMeetingResponse {
        status: ParticipantStatus::Admitted,
        participant: None,
    };

    let json = to_string(&response).expect("Failed to serialize join response");
    assert_eq!(json, r#"{"status":"admitted"}"#);
}

#[test]
fn test_join_response_waiting_includes_participant() {
    let user_id = Uuid::new_v4();
    let joined_at = Utc::now();

    let response = JoinMeetingResponse {
        status: ParticipantStatus::Waiting,
        participant: Some(WaitingParticipantResponse {
            user_id,
            username: "alice".to_string(),
            name: Some("Alice".to_string()),
            avatar_url: None,
            status: ParticipantStatus::Waiting,
            joined_at,
        }),
    };

    let json = to_string(&response).expect("Failed to serialize join response");
    let deserialized: JoinMeetingResponse =
        from_str(&json).expect("Failed to deserialize join response");

    assert_eq!(deserialized.status, ParticipantStatus::Waiting);
    let participant = deserialized.participant.expect("participant missing");
    assert_eq!(participant.user_id, user_id);
    assert_eq!(participant.username, "alice");
    assert_eq!(participant.status, ParticipantStatus::Waiting);
}

#[test]
fn test_waiting_status_not_found_serialization() {
    let response = WaitingStatusResponse {
        status: SelfWaitingStatus::NotFound,
        joined_at: None,
    };

    let json = to_string(&response).expect("Failed to serialize status response");
    assert_eq!(json, r#"{"status":"not_found"}"#);
}

#[test]
fn test_self_waiting_status_from_participant_status() {
    assert_eq!(
        SelfWaitingStatus::from(ParticipantStatus::Waiting),
        SelfWaitingStatus::Waiting
    );
    assert_eq!(
        SelfWaitingStatus::from(ParticipantStatus::Admitted),
        SelfWaitingStatus::Admitted
    );
    assert_eq!(
        SelfWaitingStatus::from(ParticipantStatus::Rejected),
        SelfWaitingStatus::Rejected
    );
}

#[test]
fn test_decision_request_tolerates_missing_user_id() {
    let request: DecisionRequest = from_str("{}").expect("Failed to deserialize empty body");
    assert_eq!(request.user_id, None);

    let user_id = Uuid::new_v4();
    let request: DecisionRequest = from_str(&format!(r#"{{"user_id":"{}"}}"#, user_id))
        .expect("Failed to deserialize decision request");
    assert_eq!(request.user_id, Some(user_id));
}

#[test]
fn test_meeting_response_serialization() {
    let response = MeetingResponse {
        id: Uuid::new_v4(),
        club_id: Uuid::new_v4(),
        title: "Chapter 12 discussion".to_string(),
        scheduled_at: Utc::now(),
        duration_minutes: 60,
        status: MeetingStatus::Scheduled,
        waiting_room_enabled: true,
        created_at: Utc::now(),
    };

    let json = to_string(&response).expect("Failed to serialize meeting response");
    assert!(json.contains(r#""status":"scheduled""#));

    let deserialized: MeetingResponse =
        from_str(&json).expect("Failed to deserialize meeting response");
    assert_eq!(deserialized.id, response.id);
    assert_eq!(deserialized.title, response.title);
    assert_eq!(deserialized.status, MeetingStatus::Scheduled);
}

#[test]
fn test_create_meeting_request_defaults() {
    let json = r#"{
        "title": "Kickoff",
        "scheduled_at": "2026-03-01T18:00:00Z",
        "duration_minutes": 45
    }"#;

    let request: CreateMeetingRequest =
        from_str(json).expect("Failed to deserialize create meeting request");
    assert!(!request.waiting_room_enabled);
    assert_eq!(request.duration_minutes, 45);
}
