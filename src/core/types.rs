//! Core data types for the localization system

use crate::core::constants::{COINCIDENT_EPS_M, MIN_SENSORS};
use crate::validation::error::LocalizationError;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// 3D position in array-local Cartesian coordinates (meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn from_vector3(v: &Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Euclidean distance to another point (meters)
    pub fn distance_to(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Immutable sensor array geometry
///
/// An ordered sequence of at least four sensor positions. Validated at
/// construction: coincident sensors and undersized arrays are rejected
/// here rather than surfacing later as solve failures. Never mutated
/// after construction, so concurrent solves can share one array freely.
/// Serializable for scene output; deserialization is deliberately not
/// derived so every array passes construction-time validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorArray {
    positions: Vec<Point3>,
}

impl SensorArray {
    /// Create an array from explicit sensor positions.
    ///
    /// Fails with a configuration error when fewer than four sensors are
    /// given or when any two sensors coincide.
    pub fn new(positions: Vec<Point3>) -> Result<Self, LocalizationError> {
        if positions.len() < MIN_SENSORS {
            return Err(LocalizationError::InsufficientSensors {
                available: positions.len(),
                required: MIN_SENSORS,
            });
        }

        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let separation = positions[i].distance_to(&positions[j]);
                if separation < COINCIDENT_EPS_M {
                    return Err(LocalizationError::CoincidentSensors {
                        first: i,
                        second: j,
                        separation_m: separation,
                    });
                }
            }
        }

        Ok(Self { positions })
    }

    /// Place `count` sensors evenly on a circle of `radius` in the z = 0
    /// plane, at angles `2π·i/count`.
    ///
    /// A planar ring cannot resolve the z coordinate with the exact solve
    /// in [`crate::algorithms::trilateration`]; solving against one fails
    /// deterministically with a numerical error. A non-planar geometry via
    /// [`SensorArray::new`] is required for full 3D localization.
    pub fn circular(radius: f64, count: usize) -> Result<Self, LocalizationError> {
        let positions = (0..count)
            .map(|i| {
                let theta = 2.0 * PI * i as f64 / count as f64;
                Point3::new(radius * theta.cos(), radius * theta.sin(), 0.0)
            })
            .collect();
        // radius <= 0 collapses the ring onto one point and is rejected
        // by the coincidence check
        Self::new(positions)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    pub fn get(&self, index: usize) -> Option<&Point3> {
        self.positions.get(index)
    }
}

/// Per-sensor arrival times in seconds
///
/// Index-aligned with a [`SensorArray`]: entry i is the arrival time at
/// sensor i, measured from a common trigger epoch. Produced externally per
/// detection event and consumed once per solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalTimes {
    times: Vec<f64>,
}

impl ArrivalTimes {
    pub fn new(times: Vec<f64>) -> Self {
        Self { times }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.times
    }
}

impl From<Vec<f64>> for ArrivalTimes {
    fn from(times: Vec<f64>) -> Self {
        Self::new(times)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::error::ErrorKind;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_circular_array_placement() {
        let array = SensorArray::circular(1.0, 6).unwrap();
        assert_eq!(array.len(), 6);

        // First sensor at angle 0, second at 60 degrees
        assert_approx_eq!(array.get(0).unwrap().x, 1.0, 1e-12);
        assert_approx_eq!(array.get(0).unwrap().y, 0.0, 1e-12);
        assert_approx_eq!(array.get(1).unwrap().x, 0.5, 1e-12);
        assert_approx_eq!(array.get(1).unwrap().y, 3.0_f64.sqrt() / 2.0, 1e-12);

        for sensor in array.positions() {
            assert_approx_eq!(sensor.z, 0.0, 1e-12);
            assert_approx_eq!(sensor.distance_to(&Point3::new(0.0, 0.0, 0.0)), 1.0, 1e-12);
        }
    }

    #[test]
    fn test_too_few_sensors_rejected_at_construction() {
        let err = SensorArray::circular(1.0, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            err,
            LocalizationError::InsufficientSensors {
                available: 3,
                required: 4
            }
        );
    }

    #[test]
    fn test_zero_radius_rejected_as_coincident() {
        let err = SensorArray::circular(0.0, 6).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(matches!(err, LocalizationError::CoincidentSensors { .. }));
    }

    #[test]
    fn test_duplicate_positions_rejected() {
        let err = SensorArray::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            LocalizationError::CoincidentSensors {
                first: 1,
                second: 3,
                separation_m: 0.0
            }
        );
    }

    #[test]
    fn test_arrival_times_alignment() {
        let toa = ArrivalTimes::from(vec![0.01, 0.02, 0.03, 0.04]);
        assert_eq!(toa.len(), 4);
        assert_approx_eq!(toa.as_slice()[2], 0.03, 1e-15);
    }

    #[test]
    fn test_point_distance() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0, 2.0, 3.0);
        assert_approx_eq!(a.distance_to(&b), 0.0, 1e-15);

        let c = Point3::new(4.0, 6.0, 3.0);
        assert_approx_eq!(a.distance_to(&c), 5.0, 1e-12);
    }
}
