use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbClubMember, DbMeeting, DbUser, DbWaitingEntry, DbWaitingParticipant};

// Mock repositories for testing
mock! {
    pub MeetingRepo {
        pub async fn create_meeting(
            &self,
            club_id: Uuid,
            title: &'static str,
            scheduled_at: DateTime<Utc>,
            duration_minutes: i32,
            waiting_room_enabled: bool,
        ) -> eyre::Result<DbMeeting>;

        pub async fn get_meeting_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbMeeting>>;
    }
}

mock! {
    pub MembershipRepo {
        pub async fn get_member(
            &self,
            club_id: Uuid,
            user_id: Uuid,
        ) -> eyre::Result<Option<DbClubMember>>;
    }
}

mock! {
    pub UserRepo {
        pub async fn get_user_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbUser>>;
    }
}

mock! {
    pub WaitingRoomRepo {
        pub async fn upsert_waiting(
            &self,
            meeting_id: Uuid,
            user_id: Uuid,
        ) -> eyre::Result<DbWaitingParticipant>;

        pub async fn get_waiting_participants(
            &self,
            meeting_id: Uuid,
        ) -> eyre::Result<Vec<DbWaitingEntry>>;

        pub async fn set_participant_status(
            &self,
            meeting_id: Uuid,
            user_id: Uuid,
            status: &'static str,
        ) -> eyre::Result<Option<DbWaitingParticipant>>;

        pub async fn get_participant(
            &self,
            meeting_id: Uuid,
            user_id: Uuid,
        ) -> eyre::Result<Option<DbWaitingParticipant>>;
    }
}
