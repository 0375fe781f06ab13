pub mod sqlite_appointment_repo;
pub mod sqlite_availability_repo;
pub mod sqlite_event_type_repo;
pub mod sqlite_holiday_repo;
pub mod sqlite_settings_repo;

pub mod postgres_appointment_repo;
pub mod postgres_availability_repo;
pub mod postgres_event_type_repo;
pub mod postgres_holiday_repo;
pub mod postgres_settings_repo;
