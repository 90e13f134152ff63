pub mod config_handle;
pub mod data;
pub mod driver;

pub use config_handle::ConfigHandle;
pub use data::{FrameData, RenderError, RenderEvent};
pub use driver::{DriverState, DriverStatus, FrameDriver};
