//! # Authorization Helpers
//!
//! Every waiting-room operation answers the same two questions: is the
//! caller a member of the club that owns the meeting, and does their role
//! let them manage the waiting room? Handlers consume these helpers instead
//! of re-implementing the membership lookup per operation.

use ebe_core::{errors::EbeError, models::membership::ClubRole};
use sqlx::PgPool;
use uuid::Uuid;

/// Resolves the caller's role within a club
///
/// Returns `None` when the user is not a member of the club. Unknown role
/// strings in storage are treated as non-membership rather than an error.
pub async fn resolve_role(
    pool: &PgPool,
    club_id: Uuid,
    user_id: Uuid,
) -> Result<Option<ClubRole>, EbeError> {
    let member = ebe_db::repositories::membership::get_member(pool, club_id, user_id)
        .await
        .map_err(EbeError::Database)?;

    Ok(member.and_then(|m| ClubRole::parse(&m.role)))
}

/// Requires the caller to be a member of the club, returning their role
pub async fn require_member(
    pool: &PgPool,
    club_id: Uuid,
    user_id: Uuid,
) -> Result<ClubRole, EbeError> {
    resolve_role(pool, club_id, user_id)
        .await?
        .ok_or_else(|| EbeError::Authorization("Only club members may access this meeting".to_string()))
}

/// Requires the caller to hold an admin or moderator role in the club
pub async fn require_privileged(
    pool: &PgPool,
    club_id: Uuid,
    user_id: Uuid,
) -> Result<ClubRole, EbeError> {
    match resolve_role(pool, club_id, user_id).await? {
        Some(role) if role.is_privileged() => Ok(role),
        _ => Err(EbeError::Authorization(
            "Admin or moderator role required".to_string(),
        )),
    }
}
