use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const LOCATION_TYPES: [&str; 5] = ["VIDEO_A", "VIDEO_B", "PHONE", "IN_PERSON", "CUSTOM"];

/// A reusable bookable meeting template. The numeric constraints all treat
/// 0 as "disabled": no cap, no notice requirement, no horizon.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct EventType {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub duration_min: i32,
    pub location_type: String,
    pub color: String,
    pub buffer_before: i32,
    pub buffer_after: i32,
    pub max_per_day: i32,
    pub max_per_week: i32,
    pub min_notice_hours: i32,
    pub max_days_ahead: i32,
    pub is_active: bool,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewEventTypeParams {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub duration_min: i32,
    pub location_type: String,
    pub color: String,
    pub buffer_before: i32,
    pub buffer_after: i32,
    pub max_per_day: i32,
    pub max_per_week: i32,
    pub min_notice_hours: i32,
    pub max_days_ahead: i32,
    pub is_active: bool,
    pub is_public: bool,
}

impl EventType {
    pub fn new(params: NewEventTypeParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            slug: params.slug,
            description: params.description,
            duration_min: params.duration_min,
            location_type: params.location_type,
            color: params.color,
            buffer_before: params.buffer_before,
            buffer_after: params.buffer_after,
            max_per_day: params.max_per_day,
            max_per_week: params.max_per_week,
            min_notice_hours: params.min_notice_hours,
            max_days_ahead: params.max_days_ahead,
            is_active: params.is_active,
            is_public: params.is_public,
            created_at: Utc::now(),
        }
    }

    /// Copy of this template under a fresh id. The slug gets a uuid-derived
    /// suffix so two copies made in the same instant cannot collide; the DB
    /// unique constraint on slug remains the backstop.
    pub fn duplicate(&self) -> Self {
        let suffix: String = Uuid::new_v4().simple().to_string()[..8].to_string();
        Self {
            id: Uuid::new_v4().to_string(),
            name: format!("{} (Copy)", self.name),
            slug: format!("{}-{}", self.slug, suffix),
            created_at: Utc::now(),
            ..self.clone()
        }
    }
}
