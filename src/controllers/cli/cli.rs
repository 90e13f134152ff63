use log::info;
use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::dispatch::ports::phase_dispatcher::PhaseDispatcher;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::image_buffer::ImageBuffer;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::newton::frame_config::FrameConfig;

pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 720;

/// Renders a single frame and hands it to a file presenter.
pub struct CliController<P: FilePresenterPort, D: PhaseDispatcher> {
    presenter: P,
    dispatcher: D,
    image: Option<ImageBuffer>,
}

impl<P: FilePresenterPort, D: PhaseDispatcher> CliController<P, D> {
    pub fn new(presenter: P, dispatcher: D) -> Self {
        Self {
            presenter,
            dispatcher,
            image: None,
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageBuffer> {
        self.image.as_ref()
    }

    pub fn generate(
        &mut self,
        resolution: Resolution,
        config: &FrameConfig,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!(
            "rendering {} roots at {}x{}, {} iterations, {} derivative, {} dispatch",
            config.roots().len(),
            resolution.width(),
            resolution.height(),
            config.iterations(),
            config.derivative_kind(),
            self.dispatcher.display_name()
        );

        let start = Instant::now();
        let image = render_frame(&self.dispatcher, resolution, config)?;
        info!("rendered in {:?}", start.elapsed());

        self.image = Some(image);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(image) = &self.image {
            info!("writing {}", filepath.as_ref().display());
            self.presenter.present(image, filepath)?
        }

        Ok(())
    }
}
