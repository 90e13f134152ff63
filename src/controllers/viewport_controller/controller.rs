use crate::controllers::frame_driver::config_handle::ConfigHandle;
use crate::controllers::viewport_controller::controls::{ViewportAction, ViewportControlsSnapshot};
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::newton::derivative::DerivativeKind;
use crate::core::fractals::newton::errors::FrameConfigError;

pub const ZOOM_FACTOR: f64 = 1.02;
pub const PAN_STEP: f64 = 0.02;
pub const ROOT_MIN: f64 = -1.0;
pub const ROOT_MAX: f64 = 1.0;

/// Moves the viewport by one action. Pans are proportional to the current
/// scale so they feel the same at every zoom level.
pub fn apply_action(viewport: Viewport, action: ViewportAction) -> Result<Viewport, ViewportError> {
    let scale = viewport.scale();
    let translate = viewport.translate();
    let step = PAN_STEP * scale;

    match action {
        ViewportAction::ZoomIn => viewport.with_scale(scale / ZOOM_FACTOR),
        ViewportAction::ZoomOut => viewport.with_scale(scale * ZOOM_FACTOR),
        ViewportAction::PanLeft => {
            viewport.with_translate(Complex::new(translate.real - step, translate.imag))
        }
        ViewportAction::PanRight => {
            viewport.with_translate(Complex::new(translate.real + step, translate.imag))
        }
        ViewportAction::PanUp => {
            viewport.with_translate(Complex::new(translate.real, translate.imag + step))
        }
        ViewportAction::PanDown => {
            viewport.with_translate(Complex::new(translate.real, translate.imag - step))
        }
    }
}

fn clamp_root(root: Complex) -> Complex {
    Complex::new(
        root.real.clamp(ROOT_MIN, ROOT_MAX),
        root.imag.clamp(ROOT_MIN, ROOT_MAX),
    )
}

/// Interaction commands against the shared configuration. Every edit is
/// validated before it is committed.
#[derive(Debug, Clone)]
pub struct ViewportController {
    config: ConfigHandle,
}

impl ViewportController {
    #[must_use]
    pub fn new(config: ConfigHandle) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    /// Returns the action that was applied, if any key was held.
    pub fn apply_controls(
        &self,
        controls: ViewportControlsSnapshot,
    ) -> Result<Option<ViewportAction>, FrameConfigError> {
        let Some(action) = controls.action() else {
            return Ok(None);
        };

        self.config.update(|config| {
            config.set_viewport(apply_action(config.viewport(), action)?);
            Ok(())
        })?;

        Ok(Some(action))
    }

    pub fn set_root(&self, index: usize, root: Complex) -> Result<(), FrameConfigError> {
        self.config
            .update(|config| config.set_root(index, clamp_root(root)))
    }

    pub fn set_colour(&self, index: usize, colour: Colour) -> Result<(), FrameConfigError> {
        self.config.update(|config| config.set_colour(index, colour))
    }

    pub fn set_roots_and_colours(
        &self,
        roots: Vec<Complex>,
        colours: Vec<Colour>,
    ) -> Result<(), FrameConfigError> {
        let roots = roots.into_iter().map(clamp_root).collect();

        self.config
            .update(|config| config.set_roots_and_colours(roots, colours))
    }

    pub fn set_iterations(&self, iterations: u32) -> Result<(), FrameConfigError> {
        self.config.update(|config| {
            config.set_iterations(iterations);
            Ok(())
        })
    }

    pub fn set_derivative_kind(&self, kind: DerivativeKind) -> Result<(), FrameConfigError> {
        self.config.update(|config| {
            config.set_derivative_kind(kind);
            Ok(())
        })
    }

    pub fn set_viewport(&self, viewport: Viewport) -> Result<(), FrameConfigError> {
        self.config.update(|config| {
            config.set_viewport(viewport);
            Ok(())
        })
    }

    pub fn reset_view(&self) -> Result<(), FrameConfigError> {
        self.set_viewport(Viewport::default())
    }
}
