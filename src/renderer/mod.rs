//! Thin rendering layer: converts session state into a flat draw list.
//! No simulation logic lives here.

pub mod scene;

pub use scene::{build_scene, Scene, Shape};
