use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::controllers::frame_driver::config_handle::ConfigHandle;
use crate::controllers::frame_driver::data::{FrameData, RenderError, RenderEvent};
use crate::controllers::ports::frame_sink::FrameSink;
use crate::core::actions::dispatch::ports::phase_dispatcher::PhaseDispatcher;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::resolution::Resolution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    #[default]
    Idle,
    Computing,
}

/// Read side of a driver's state, cloneable into a sink or another thread.
///
/// The driver stays `Computing` until the sink has taken the frame.
#[derive(Debug, Clone, Default)]
pub struct DriverStatus {
    computing: Arc<AtomicBool>,
}

impl DriverStatus {
    #[must_use]
    pub fn state(&self) -> DriverState {
        if self.computing.load(Ordering::Acquire) {
            DriverState::Computing
        } else {
            DriverState::Idle
        }
    }

    fn set(&self, state: DriverState) {
        self.computing
            .store(state == DriverState::Computing, Ordering::Release);
    }
}

/// Recomputes the whole frame on every tick.
///
/// There is no dirty tracking and nothing carries over between frames: each
/// tick snapshots the configuration, runs every phase against that snapshot
/// and hands the result to the sink.
pub struct FrameDriver<D: PhaseDispatcher> {
    dispatcher: D,
    resolution: Resolution,
    config: ConfigHandle,
    sink: Arc<dyn FrameSink>,
    status: DriverStatus,
    frames_rendered: u64,
}

impl<D: PhaseDispatcher> FrameDriver<D> {
    pub fn new(
        dispatcher: D,
        resolution: Resolution,
        config: ConfigHandle,
        sink: Arc<dyn FrameSink>,
    ) -> Self {
        Self {
            dispatcher,
            resolution,
            config,
            sink,
            status: DriverStatus::default(),
            frames_rendered: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> DriverState {
        self.status.state()
    }

    #[must_use]
    pub fn status(&self) -> DriverStatus {
        self.status.clone()
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    /// Renders one frame and returns its number. Frame numbers start at 1.
    pub fn tick(&mut self) -> u64 {
        self.status.set(DriverState::Computing);
        let frame_number = self.frames_rendered + 1;

        let snapshot = self.config.snapshot();

        let start = Instant::now();
        let result = render_frame(&self.dispatcher, self.resolution, &snapshot);
        let render_duration = start.elapsed();

        debug!(
            "frame {} ({}x{}, {} iterations, {}, {}) rendered in {:?}",
            frame_number,
            self.resolution.width(),
            self.resolution.height(),
            snapshot.iterations(),
            snapshot.derivative_kind(),
            self.dispatcher.display_name(),
            render_duration
        );

        let event = match result {
            Ok(image) => RenderEvent::Frame(FrameData {
                frame_number,
                image,
                render_duration,
            }),
            Err(err) => RenderEvent::Error(RenderError {
                frame_number,
                message: err.to_string(),
            }),
        };

        self.frames_rendered = frame_number;
        self.sink.present(event);
        self.status.set(DriverState::Idle);

        frame_number
    }
}
