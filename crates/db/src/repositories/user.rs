use crate::models::DbUser;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, name, avatar_url, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
