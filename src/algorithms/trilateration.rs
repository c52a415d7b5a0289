//! Exact time-of-arrival trilateration
//!
//! Converts per-sensor arrival times into range estimates and solves the
//! linearized sphere-difference system for the source position. Sensor 0
//! is the reference: subtracting its sphere equation from those of
//! sensors 1–3 eliminates the quadratic term and leaves three linear
//! equations in the unknown position.
//!
//! Only sensors 0–3 participate in the solve even when more are
//! configured. This is a limitation of the exact (non-least-squares)
//! method, kept deliberately; extending to a least-squares fit over all
//! sensors would change observable behavior.

use crate::core::constants::{MIN_SENSORS, SINGULARITY_TOLERANCE, SPEED_OF_SOUND_AIR};
use crate::core::types::{ArrivalTimes, Point3, SensorArray};
use crate::validation::error::LocalizationError;
use crate::validation::geometry;
use log::debug;
use nalgebra::Vector3;

/// Exact TOA trilateration solver
///
/// Holds only the propagation speed. Each [`ToaLocator::locate`] call is
/// a pure function of its inputs: no state is kept across calls, so a
/// single locator can serve concurrent solves without synchronization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToaLocator {
    speed_of_sound: f64,
}

impl Default for ToaLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ToaLocator {
    /// Locator using the standard speed of sound in air (343.0 m/s)
    pub fn new() -> Self {
        Self {
            speed_of_sound: SPEED_OF_SOUND_AIR,
        }
    }

    /// Locator with an explicit propagation speed, for other media or
    /// temperatures
    pub fn with_speed_of_sound(speed_of_sound: f64) -> Self {
        Self { speed_of_sound }
    }

    pub fn speed_of_sound(&self) -> f64 {
        self.speed_of_sound
    }

    /// Estimate the source position for one detection event.
    ///
    /// Arrival times must be index-aligned with the array and share a
    /// common trigger epoch; each is converted to an absolute range as
    /// `toa[i] * speed_of_sound`. Physical plausibility of the resulting
    /// ranges (e.g. negative values) is not validated.
    ///
    /// Fails with a dimension mismatch before any computation when the
    /// arrival-time count differs from the sensor count, and with a
    /// singular-geometry error when sensors 0–3 span a degenerate
    /// coefficient matrix. No approximate result is ever substituted for
    /// a failed solve.
    pub fn locate(
        &self,
        array: &SensorArray,
        arrival_times: &ArrivalTimes,
    ) -> Result<Point3, LocalizationError> {
        if arrival_times.len() != array.len() {
            return Err(LocalizationError::DimensionMismatch {
                sensors: array.len(),
                arrival_times: arrival_times.len(),
            });
        }

        // A validated SensorArray already guarantees this; the solve
        // structurally needs sensors 0-3, so re-check rather than index
        // out of bounds.
        if array.len() < MIN_SENSORS {
            return Err(LocalizationError::InsufficientSensors {
                available: array.len(),
                required: MIN_SENSORS,
            });
        }

        let distances: Vec<f64> = arrival_times
            .as_slice()
            .iter()
            .take(MIN_SENSORS)
            .map(|toa| toa * self.speed_of_sound)
            .collect();
        debug!("range estimates for sensors 0-3: {:?}", distances);

        let reference = array.positions()[0].to_vector3();
        let a = geometry::coefficient_matrix(array);
        let mut b = Vector3::zeros();
        for i in 0..3 {
            let sensor = array.positions()[i + 1].to_vector3();
            b[i] = distances[0] * distances[0] - distances[i + 1] * distances[i + 1]
                + sensor.norm_squared()
                - reference.norm_squared();
        }

        let svd = a.svd(false, false);
        let s_max = svd.singular_values[0];
        let s_min = svd.singular_values[2];
        if s_min <= SINGULARITY_TOLERANCE * s_max.max(1.0) {
            let condition_number = if s_min > 0.0 {
                s_max / s_min
            } else {
                f64::INFINITY
            };
            return Err(LocalizationError::SingularGeometry { condition_number });
        }
        debug!("solve matrix condition number: {:.3e}", s_max / s_min);

        let position = a
            .lu()
            .solve(&b)
            .ok_or(LocalizationError::SingularGeometry {
                condition_number: s_max / s_min,
            })?;

        Ok(Point3::from_vector3(&position))
    }
}
