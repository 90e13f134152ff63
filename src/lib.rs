mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::{CliController, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use crate::controllers::frame_driver::{
    ConfigHandle, DriverState, DriverStatus, FrameData, FrameDriver, RenderError, RenderEvent,
};
pub use crate::controllers::ports::{FilePresenterPort, FrameSink};
pub use crate::controllers::viewport_controller::{
    ViewportAction, ViewportController, ViewportControlsSnapshot, apply_action,
};
pub use crate::core::actions::dispatch::{PhaseDispatcher, RayonDispatcher, SerialDispatcher};
pub use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::image_buffer::ImageBuffer;
pub use crate::core::data::resolution::Resolution;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::newton::basin::Basin;
pub use crate::core::fractals::newton::derivative::DerivativeKind;
pub use crate::core::fractals::newton::errors::FrameConfigError;
pub use crate::core::fractals::newton::frame_config::{DEFAULT_ITERATIONS, FrameConfig};
pub use crate::presenters::file::PpmFilePresenter;
