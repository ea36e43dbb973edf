use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            username VARCHAR(255) NOT NULL UNIQUE,
            name VARCHAR(255) NULL,
            avatar_url TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create book_clubs table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS book_clubs (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create club_members table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS club_members (
            club_id UUID NOT NULL REFERENCES book_clubs(id),
            user_id UUID NOT NULL REFERENCES users(id),
            role VARCHAR(32) NOT NULL DEFAULT 'member',
            joined_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (club_id, user_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create meetings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS meetings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            club_id UUID NOT NULL REFERENCES book_clubs(id),
            title VARCHAR(255) NOT NULL,
            scheduled_at TIMESTAMP WITH TIME ZONE NOT NULL,
            duration_minutes INTEGER NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'scheduled',
            waiting_room_enabled BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_duration CHECK (duration_minutes > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create waiting_participants table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS waiting_participants (
            meeting_id UUID NOT NULL REFERENCES meetings(id),
            user_id UUID NOT NULL REFERENCES users(id),
            status VARCHAR(32) NOT NULL DEFAULT 'waiting',
            joined_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (meeting_id, user_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_club_members_user_id ON club_members(user_id);
        CREATE INDEX IF NOT EXISTS idx_meetings_club_id ON meetings(club_id);
        CREATE INDEX IF NOT EXISTS idx_meetings_scheduled_at ON meetings(scheduled_at);
        CREATE INDEX IF NOT EXISTS idx_waiting_participants_meeting_status ON waiting_participants(meeting_id, status);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
