//! Error taxonomy and geometry quality checks

pub mod error;
pub mod geometry;

pub use error::{ErrorKind, LocalizationError};
pub use geometry::{assess, GeometryQuality};
