pub mod factory;
pub mod holiday_feed;
pub mod repositories;
