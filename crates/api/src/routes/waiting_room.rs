use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, middleware::auth, ApiState};

pub fn routes(state: Arc<ApiState>) -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/meetings/:meeting_id/waiting-room/join",
            post(handlers::waiting_room::join_waiting_room),
        )
        .route(
            "/meetings/:meeting_id/waiting-room/participants",
            get(handlers::waiting_room::list_waiting_participants),
        )
        .route(
            "/meetings/:meeting_id/waiting-room/admit",
            post(handlers::waiting_room::admit_participant),
        )
        .route(
            "/meetings/:meeting_id/waiting-room/reject",
            post(handlers::waiting_room::reject_participant),
        )
        .route(
            "/meetings/:meeting_id/waiting-room/status",
            get(handlers::waiting_room::waiting_room_status),
        )
        .route_layer(from_fn_with_state(state, auth::require_auth))
}
