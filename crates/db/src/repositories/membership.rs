use crate::models::DbClubMember;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_member(
    pool: &Pool<Postgres>,
    club_id: Uuid,
    user_id: Uuid,
) -> Result<Option<DbClubMember>> {
    let member = sqlx::query_as::<_, DbClubMember>(
        r#"
        SELECT club_id, user_id, role, joined_at
        FROM club_members
        WHERE club_id = $1 AND user_id = $2
        "#,
    )
    .bind(club_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(member)
}
