pub mod appointment;
pub mod availability;
pub mod calendar;
pub mod event_type;
pub mod health;
pub mod holiday;
pub mod settings;
