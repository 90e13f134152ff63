use crate::controllers::frame_driver::data::RenderEvent;

/// Receives each finished frame, e.g. a window surface or a file writer.
pub trait FrameSink: Send + Sync {
    fn present(&self, event: RenderEvent);
}
