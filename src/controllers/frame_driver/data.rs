use std::time::Duration;

use crate::core::data::image_buffer::ImageBuffer;

#[derive(Debug)]
pub struct FrameData {
    pub frame_number: u64,
    pub image: ImageBuffer,
    pub render_duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub frame_number: u64,
    pub message: String,
}

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
}
