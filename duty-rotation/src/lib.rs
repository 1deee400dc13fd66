//! Weekly household duty rotation.
//!
//! `domain` holds the week calendar and the rotation arithmetic,
//! `application` composes them into the views the tools print,
//! `infrastructure` reads and writes the roster configuration file.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use application::dto::{
    MemberDutyDto, MemberSchedule, MonthlyRosterReport, ScheduleRowDto, WeekAssignments,
};
pub use application::report::ReportFormat;
pub use application::roster_service::Roster;
pub use domain::roster_model::{AbsWeek, Duty, Member, PhaseOffset, RosterConfig};
pub use domain::rotation::RotationEngine;
pub use domain::week_calendar::{
    absolute_week_offset, current_week_index, locate_today, weeks_in_month, CalendarWeek,
};
pub use error::{ConfigError, RosterError, RosterResult};
pub use logging::init_logging;
