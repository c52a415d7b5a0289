//! Geometric conditioning assessment for the exact solve
//!
//! The solver only ever uses sensors 0–3, so the conditioning of the
//! 3×3 coefficient matrix they span determines whether a solve can
//! succeed and how much measurement noise it amplifies. The assessment
//! here is advisory: the solver re-detects singularity itself and fails
//! with a numerical error rather than consulting this module.

use crate::core::constants::SINGULARITY_TOLERANCE;
use crate::core::types::SensorArray;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// Quality of the sensor geometry for the exact 4-sensor solve
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum GeometryQuality {
    /// Well-spread sensors, minimal noise amplification
    Excellent,
    /// Adequate spread
    Good,
    /// Marginal but usable
    Acceptable,
    /// Strong noise amplification expected
    Poor,
    /// Singular or nearly singular; the solve will fail
    Degenerate,
}

/// Coefficient matrix of the linearized system, rows `2·(S_i − S_0)`
/// for i = 1..3.
pub(crate) fn coefficient_matrix(array: &SensorArray) -> Matrix3<f64> {
    let reference = array.positions()[0].to_vector3();
    let mut a = Matrix3::zeros();
    for i in 0..3 {
        let sensor = array.positions()[i + 1].to_vector3();
        a.set_row(i, &(2.0 * (sensor - reference)).transpose());
    }
    a
}

/// Assess the conditioning of the solve matrix built from sensors 0–3.
///
/// Any planar arrangement of the first four sensors (every circular
/// array included) zeroes one column of the matrix and is reported as
/// [`GeometryQuality::Degenerate`].
pub fn assess(array: &SensorArray) -> GeometryQuality {
    let a = coefficient_matrix(array);
    let svd = a.svd(false, false);
    let s_max = svd.singular_values[0];
    let s_min = svd.singular_values[2];

    if s_min <= SINGULARITY_TOLERANCE * s_max.max(1.0) {
        return GeometryQuality::Degenerate;
    }

    let condition_number = s_max / s_min;
    if condition_number < 10.0 {
        GeometryQuality::Excellent
    } else if condition_number < 100.0 {
        GeometryQuality::Good
    } else if condition_number < 1000.0 {
        GeometryQuality::Acceptable
    } else {
        GeometryQuality::Poor
    }
}
