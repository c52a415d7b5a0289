//! Physical constants and system parameters

/// Speed of sound in dry air at 20 °C (m/s)
pub const SPEED_OF_SOUND_AIR: f64 = 343.0;

/// Minimum sensor count for a determined 3D solve: sensor 0 is the
/// reference and three more sensors supply the three independent equations.
pub const MIN_SENSORS: usize = 4;

/// Two sensors closer than this are treated as coincident (m)
pub const COINCIDENT_EPS_M: f64 = 1e-9;

/// Relative singular-value floor below which the solve matrix is
/// treated as singular
pub const SINGULARITY_TOLERANCE: f64 = 1e-12;
