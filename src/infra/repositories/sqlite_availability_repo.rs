use crate::domain::{models::availability::AvailabilityRule, ports::AvailabilityRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteAvailabilityRepo {
    pool: SqlitePool,
}

impl SqliteAvailabilityRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for SqliteAvailabilityRepo {
    async fn list(&self) -> Result<Vec<AvailabilityRule>, AppError> {
        sqlx::query_as::<_, AvailabilityRule>(
            "SELECT * FROM availability_rules ORDER BY day_of_week ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn upsert_all(&self, rules: &[AvailabilityRule]) -> Result<Vec<AvailabilityRule>, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        for rule in rules {
            sqlx::query(
                "INSERT INTO availability_rules (day_of_week, is_active, start_time, end_time)
                 VALUES (?, ?, ?, ?)
                 ON CONFLICT(day_of_week) DO UPDATE SET
                     is_active = excluded.is_active,
                     start_time = excluded.start_time,
                     end_time = excluded.end_time",
            )
            .bind(rule.day_of_week)
            .bind(rule.is_active)
            .bind(&rule.start_time)
            .bind(&rule.end_time)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        }
        let stored = sqlx::query_as::<_, AvailabilityRule>(
            "SELECT * FROM availability_rules ORDER BY day_of_week ASC",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(AppError::Database)?;
        tx.commit().await.map_err(AppError::Database)?;
        Ok(stored)
    }
}
