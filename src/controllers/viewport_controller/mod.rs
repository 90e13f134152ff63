pub mod controller;
pub mod controls;

pub use controller::{ViewportController, apply_action};
pub use controls::{ViewportAction, ViewportControlsSnapshot};
