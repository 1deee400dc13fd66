pub mod dto;
pub mod report;
pub mod roster_service;
pub mod time;
