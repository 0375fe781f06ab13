use crate::domain::{
    models::appointment::Appointment,
    ports::AppointmentRepository,
    services::conflict::{appointment_interval, find_conflicts},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

pub struct PostgresAppointmentRepo {
    pool: PgPool,
}

impl PostgresAppointmentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Serializes writers per calendar date with an advisory lock, then re-runs
/// the overlap scan inside the transaction. Concurrent inserts for the same
/// day queue on the lock, so the second one sees the first one's row.
async fn guard_no_overlap(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    appointment: &Appointment,
    exclude_id: Option<&str>,
) -> Result<(), AppError> {
    sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
        .bind(appointment.date.to_string())
        .execute(&mut **tx)
        .await
        .map_err(AppError::Database)?;

    let same_day = sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE date = $1")
        .bind(appointment.date)
        .fetch_all(&mut **tx)
        .await
        .map_err(AppError::Database)?;

    let candidate = appointment_interval(appointment)?;
    if !find_conflicts(candidate, &same_day, exclude_id)?.is_empty() {
        return Err(AppError::Conflict(
            "conflicts with another appointment".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl AppointmentRepository for PostgresAppointmentRepo {
    async fn insert_checked(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        if !appointment.is_cancelled() {
            guard_no_overlap(&mut tx, appointment, None).await?;
        }
        let created = sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments (
                id, date, start_time, end_time, duration_min, event_type_id,
                client_name, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *",
        )
        .bind(&appointment.id)
        .bind(appointment.date)
        .bind(&appointment.start_time)
        .bind(&appointment.end_time)
        .bind(appointment.duration_min)
        .bind(&appointment.event_type_id)
        .bind(&appointment.client_name)
        .bind(&appointment.status)
        .bind(appointment.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;
        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE date = $1 ORDER BY start_time ASC",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE date >= $1 AND date <= $2 ORDER BY date ASC, start_time ASC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update_checked(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        if !appointment.is_cancelled() {
            guard_no_overlap(&mut tx, appointment, Some(&appointment.id)).await?;
        }
        let updated = sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET
                date = $1, start_time = $2, end_time = $3, duration_min = $4,
                event_type_id = $5, client_name = $6, status = $7
             WHERE id = $8
             RETURNING *",
        )
        .bind(appointment.date)
        .bind(&appointment.start_time)
        .bind(&appointment.end_time)
        .bind(appointment.duration_min)
        .bind(&appointment.event_type_id)
        .bind(&appointment.client_name)
        .bind(&appointment.status)
        .bind(&appointment.id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;
        tx.commit().await.map_err(AppError::Database)?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Appointment not found".into()));
        }
        Ok(())
    }
}
