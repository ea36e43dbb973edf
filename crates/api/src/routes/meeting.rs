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
            "/clubs/:club_id/meetings",
            post(handlers::meeting::create_meeting),
        )
        .route("/meetings/:meeting_id", get(handlers::meeting::get_meeting))
        .route_layer(from_fn_with_state(state, auth::require_auth))
}
