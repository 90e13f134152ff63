//! Port definitions for the controllers.
//!
//! Traits the presentation side implements to receive finished frames.

pub mod file_presenter;
pub mod frame_sink;

pub use file_presenter::FilePresenterPort;
pub use frame_sink::FrameSink;
