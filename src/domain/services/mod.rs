pub mod availability;
pub mod conflict;
pub mod defaults;
pub mod holiday_import;
pub mod placement;
