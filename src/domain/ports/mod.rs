use crate::domain::models::{
    appointment::Appointment,
    availability::AvailabilityRule,
    event_type::EventType,
    holiday::{Holiday, HolidayCandidate},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<AvailabilityRule>, AppError>;
    async fn upsert_all(&self, rules: &[AvailabilityRule]) -> Result<Vec<AvailabilityRule>, AppError>;
}

#[async_trait]
pub trait HolidayRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Holiday>, AppError>;
    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<Holiday>, AppError>;
    async fn insert(&self, holiday: &Holiday) -> Result<Holiday, AppError>;
    async fn insert_many(&self, holidays: &[Holiday]) -> Result<(), AppError>;
    async fn delete(&self, date: NaiveDate) -> Result<(), AppError>;
    async fn clear(&self) -> Result<u64, AppError>;
}

#[async_trait]
pub trait EventTypeRepository: Send + Sync {
    async fn create(&self, event_type: &EventType) -> Result<EventType, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<EventType>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<EventType>, AppError>;
    async fn list(&self, include_inactive: bool) -> Result<Vec<EventType>, AppError>;
    async fn update(&self, event_type: &EventType) -> Result<EventType, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Inserts inside a transaction that re-checks for overlapping
    /// appointments on the same date. Returns `AppError::Conflict` when a
    /// competing write got there first.
    async fn insert_checked(&self, appointment: &Appointment) -> Result<Appointment, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError>;
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Appointment>, AppError>;
    async fn list_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Appointment>, AppError>;
    /// Same overlap guard as `insert_checked`, with the updated row itself
    /// excluded from the check.
    async fn update_checked(&self, appointment: &Appointment) -> Result<Appointment, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get_category(&self, category: &str) -> Result<HashMap<String, Value>, AppError>;
    async fn set_many(&self, category: &str, pairs: &[(String, Value)]) -> Result<(), AppError>;
}

#[async_trait]
pub trait HolidayFeed: Send + Sync {
    async fn fetch(&self, country: &str, year: i32) -> Result<Vec<HolidayCandidate>, AppError>;
}
