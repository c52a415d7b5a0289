//! Localization algorithms

pub mod trilateration;

pub use trilateration::ToaLocator;
