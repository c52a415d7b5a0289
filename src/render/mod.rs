//! Visualization of localization results

pub mod scene;

pub use scene::{render, MarkerStyle, ScatterTrace, Scene3d, SceneLayout};
