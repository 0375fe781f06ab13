use std::sync::Arc;
use crate::domain::ports::{
    AppointmentRepository, AvailabilityRepository, EventTypeRepository,
    HolidayFeed, HolidayRepository, SettingsRepository,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub availability_repo: Arc<dyn AvailabilityRepository>,
    pub holiday_repo: Arc<dyn HolidayRepository>,
    pub event_type_repo: Arc<dyn EventTypeRepository>,
    pub appointment_repo: Arc<dyn AppointmentRepository>,
    pub settings_repo: Arc<dyn SettingsRepository>,
    pub holiday_feed: Arc<dyn HolidayFeed>,
}
