pub mod appointment;
pub mod availability;
pub mod event_type;
pub mod holiday;
pub mod settings;
