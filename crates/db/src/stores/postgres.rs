//! PostgreSQL backend. Each judge is one row, so a submission is a single
//! upsert statement and concurrent writers for different judges never touch
//! the same data.
//!
//! Read failures are logged and reported as "no response" so that a flaky
//! connection never turns a form load into an error. Writes still fail loudly.

use std::collections::BTreeMap;

use async_trait::async_trait;
use defensesync_core::{models::response::Response, store::ResponseStore};
use eyre::Result;
use sqlx::types::Json;
use tracing::warn;

use crate::{DbPool, models::DbResponse};

#[derive(Debug, Clone)]
pub struct PgResponseStore {
    pool: DbPool,
}

impl PgResponseStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResponseStore for PgResponseStore {
    async fn get(&self, judge_id: &str) -> Result<Option<Response>> {
        let row = sqlx::query_as::<_, DbResponse>(
            r#"
            SELECT judge_id, payload, submitted_at
            FROM responses
            WHERE judge_id = $1
            "#,
        )
        .bind(judge_id)
        .fetch_optional(&self.pool)
        .await;

        match row {
            Ok(row) => Ok(row.map(|row| row.payload.0)),
            Err(err) => {
                warn!(judge_id, "Failed to read response, treating as absent: {}", err);
                Ok(None)
            }
        }
    }

    async fn put(&self, judge_id: &str, response: &Response) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO responses (judge_id, payload, submitted_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (judge_id)
            DO UPDATE SET payload = EXCLUDED.payload, submitted_at = EXCLUDED.submitted_at
            "#,
        )
        .bind(judge_id)
        .bind(Json(response))
        .bind(response.submitted_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> Result<BTreeMap<String, Response>> {
        let rows = sqlx::query_as::<_, DbResponse>(
            r#"
            SELECT judge_id, payload, submitted_at
            FROM responses
            ORDER BY judge_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;

        match rows {
            Ok(rows) => Ok(rows
                .into_iter()
                .map(|row| (row.judge_id, row.payload.0))
                .collect()),
            Err(err) => {
                warn!("Failed to list responses, treating as empty: {}", err);
                Ok(BTreeMap::new())
            }
        }
    }
}
