//! Acoustic Impulse Source Localization
//!
//! Estimates the 3D origin of an acoustic impulse (e.g. a gunshot) from
//! the differential arrival times of its wavefront at a fixed array of
//! sensors with known positions, using exact time-of-arrival
//! trilateration over sensors 0–3.

pub mod core;
pub mod validation;
pub mod algorithms;
pub mod render;

// Re-export commonly used types
pub use crate::core::{ArrivalTimes, Point3, SensorArray, SPEED_OF_SOUND_AIR};
pub use crate::algorithms::trilateration::ToaLocator;
pub use crate::validation::error::{ErrorKind, LocalizationError};
pub use crate::validation::geometry::{assess, GeometryQuality};
pub use crate::render::{render, Scene3d};
