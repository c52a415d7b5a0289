use serde::{Deserialize, Serialize};
use std::fmt;

/// Error classification for the localization pipeline
///
/// Every failure is reported to the immediate caller; nothing is retried
/// or recovered internally, since the solve is a pure computation with no
/// transient conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocalizationError {
    /// Arrival-time vector length does not match the sensor count
    DimensionMismatch { sensors: usize, arrival_times: usize },
    /// Fewer sensors than the exact solve structurally requires
    InsufficientSensors { available: usize, required: usize },
    /// Two sensors occupy the same position
    CoincidentSensors {
        first: usize,
        second: usize,
        separation_m: f64,
    },
    /// The solve matrix is singular or near-singular; no position is
    /// produced and no approximation is substituted
    SingularGeometry { condition_number: f64 },
}

/// Coarse error category, matching where in the pipeline the fault lies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Caller-correctable input shape problem
    Input,
    /// Invalid or insufficient sensor geometry, caught at setup time
    Configuration,
    /// Degenerate geometry surfacing in the linear solve
    Numerical,
}

impl LocalizationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LocalizationError::DimensionMismatch { .. } => ErrorKind::Input,
            LocalizationError::InsufficientSensors { .. } => ErrorKind::Configuration,
            LocalizationError::CoincidentSensors { .. } => ErrorKind::Configuration,
            LocalizationError::SingularGeometry { .. } => ErrorKind::Numerical,
        }
    }
}

impl fmt::Display for LocalizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalizationError::DimensionMismatch {
                sensors,
                arrival_times,
            } => {
                write!(
                    f,
                    "Arrival-time count {} does not match sensor count {}",
                    arrival_times, sensors
                )
            }
            LocalizationError::InsufficientSensors {
                available,
                required,
            } => {
                write!(
                    f,
                    "Insufficient sensors: {} available, {} required",
                    available, required
                )
            }
            LocalizationError::CoincidentSensors {
                first,
                second,
                separation_m,
            } => {
                write!(
                    f,
                    "Sensors {} and {} are coincident: {:.3e} m apart",
                    first, second, separation_m
                )
            }
            LocalizationError::SingularGeometry { condition_number } => {
                write!(
                    f,
                    "Solve matrix is singular: condition number {:.3e}",
                    condition_number
                )
            }
        }
    }
}

impl std::error::Error for LocalizationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let input = LocalizationError::DimensionMismatch {
            sensors: 4,
            arrival_times: 6,
        };
        assert_eq!(input.kind(), ErrorKind::Input);

        let config = LocalizationError::InsufficientSensors {
            available: 3,
            required: 4,
        };
        assert_eq!(config.kind(), ErrorKind::Configuration);

        let numerical = LocalizationError::SingularGeometry {
            condition_number: 1e15,
        };
        assert_eq!(numerical.kind(), ErrorKind::Numerical);
    }

    #[test]
    fn test_display_messages() {
        let err = LocalizationError::DimensionMismatch {
            sensors: 4,
            arrival_times: 6,
        };
        assert_eq!(
            err.to_string(),
            "Arrival-time count 6 does not match sensor count 4"
        );

        let err = LocalizationError::InsufficientSensors {
            available: 3,
            required: 4,
        };
        assert!(err.to_string().contains("3 available, 4 required"));
    }
}
