use crate::domain::{models::holiday::Holiday, ports::HolidayRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

pub struct PostgresHolidayRepo {
    pool: PgPool,
}

impl PostgresHolidayRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HolidayRepository for PostgresHolidayRepo {
    async fn list(&self) -> Result<Vec<Holiday>, AppError> {
        sqlx::query_as::<_, Holiday>("SELECT * FROM holidays ORDER BY date ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<Holiday>, AppError> {
        sqlx::query_as::<_, Holiday>("SELECT * FROM holidays WHERE date = $1")
            .bind(date)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn insert(&self, holiday: &Holiday) -> Result<Holiday, AppError> {
        sqlx::query_as::<_, Holiday>(
            "INSERT INTO holidays (date, name, reason, created_at) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(holiday.date)
        .bind(&holiday.name)
        .bind(&holiday.reason)
        .bind(holiday.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn insert_many(&self, holidays: &[Holiday]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        for holiday in holidays {
            sqlx::query(
                "INSERT INTO holidays (date, name, reason, created_at) VALUES ($1, $2, $3, $4)
                 ON CONFLICT(date) DO NOTHING",
            )
            .bind(holiday.date)
            .bind(&holiday.name)
            .bind(&holiday.reason)
            .bind(holiday.created_at)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        }
        tx.commit().await.map_err(AppError::Database)
    }

    async fn delete(&self, date: NaiveDate) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM holidays WHERE date = $1")
            .bind(date)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Holiday not found".into()));
        }
        Ok(())
    }

    async fn clear(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM holidays")
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }
}
