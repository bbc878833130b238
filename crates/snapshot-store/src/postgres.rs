use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::{CartSnapshot, Result, SlotKey, store::SnapshotStore};

/// PostgreSQL-backed snapshot store implementation.
#[derive(Clone)]
pub struct PostgresSnapshotStore {
    pool: PgPool,
}

impl PostgresSnapshotStore {
    /// Creates a new PostgreSQL snapshot store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }
}

#[async_trait]
impl SnapshotStore for PostgresSnapshotStore {
    async fn load(&self, slot: &SlotKey) -> Result<Option<CartSnapshot>> {
        let row = sqlx::query(
            r#"
            SELECT state, saved_at
            FROM cart_snapshots
            WHERE slot = $1
            "#,
        )
        .bind(slot.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let state: serde_json::Value = row.try_get("state")?;
                let saved_at: DateTime<Utc> = row.try_get("saved_at")?;
                Ok(Some(CartSnapshot { saved_at, state }))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, slot: &SlotKey, snapshot: CartSnapshot) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO cart_snapshots (slot, state, saved_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (slot)
            DO UPDATE SET state = EXCLUDED.state, saved_at = EXCLUDED.saved_at
            "#,
        )
        .bind(slot.as_str())
        .bind(&snapshot.state)
        .bind(snapshot.saved_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
