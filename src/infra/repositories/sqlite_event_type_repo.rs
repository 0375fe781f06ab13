use crate::domain::{models::event_type::EventType, ports::EventTypeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEventTypeRepo {
    pool: SqlitePool,
}

impl SqliteEventTypeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventTypeRepository for SqliteEventTypeRepo {
    async fn create(&self, event_type: &EventType) -> Result<EventType, AppError> {
        sqlx::query_as::<_, EventType>(
            "INSERT INTO event_types (
                id, name, slug, description, duration_min, location_type, color,
                buffer_before, buffer_after, max_per_day, max_per_week,
                min_notice_hours, max_days_ahead, is_active, is_public, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *",
        )
        .bind(&event_type.id)
        .bind(&event_type.name)
        .bind(&event_type.slug)
        .bind(&event_type.description)
        .bind(event_type.duration_min)
        .bind(&event_type.location_type)
        .bind(&event_type.color)
        .bind(event_type.buffer_before)
        .bind(event_type.buffer_after)
        .bind(event_type.max_per_day)
        .bind(event_type.max_per_week)
        .bind(event_type.min_notice_hours)
        .bind(event_type.max_days_ahead)
        .bind(event_type.is_active)
        .bind(event_type.is_public)
        .bind(event_type.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<EventType>, AppError> {
        sqlx::query_as::<_, EventType>("SELECT * FROM event_types WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<EventType>, AppError> {
        sqlx::query_as::<_, EventType>("SELECT * FROM event_types WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, include_inactive: bool) -> Result<Vec<EventType>, AppError> {
        let query = if include_inactive {
            "SELECT * FROM event_types ORDER BY name ASC"
        } else {
            "SELECT * FROM event_types WHERE is_active = TRUE ORDER BY name ASC"
        };
        sqlx::query_as::<_, EventType>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, event_type: &EventType) -> Result<EventType, AppError> {
        sqlx::query_as::<_, EventType>(
            "UPDATE event_types SET
                name = ?, slug = ?, description = ?, duration_min = ?, location_type = ?,
                color = ?, buffer_before = ?, buffer_after = ?, max_per_day = ?,
                max_per_week = ?, min_notice_hours = ?, max_days_ahead = ?,
                is_active = ?, is_public = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(&event_type.name)
        .bind(&event_type.slug)
        .bind(&event_type.description)
        .bind(event_type.duration_min)
        .bind(&event_type.location_type)
        .bind(&event_type.color)
        .bind(event_type.buffer_before)
        .bind(event_type.buffer_after)
        .bind(event_type.max_per_day)
        .bind(event_type.max_per_week)
        .bind(event_type.min_notice_hours)
        .bind(event_type.max_days_ahead)
        .bind(event_type.is_active)
        .bind(event_type.is_public)
        .bind(&event_type.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM event_types WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event type not found".into()));
        }
        Ok(())
    }
}
