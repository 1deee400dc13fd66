pub mod roster_model;
pub mod rotation;
pub mod week_calendar;
