//! Core types and constants for the localization system

pub mod types;
pub mod constants;

pub use constants::SPEED_OF_SOUND_AIR;
pub use types::{ArrivalTimes, Point3, SensorArray};
