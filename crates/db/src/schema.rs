use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // One row per judge; a new submission overwrites the row
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS responses (
            judge_id VARCHAR(255) PRIMARY KEY,
            payload JSONB NOT NULL,
            submitted_at TIMESTAMP WITH TIME ZONE NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully");

    Ok(())
}
