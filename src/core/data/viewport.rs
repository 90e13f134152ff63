use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidScale { scale: f64 },
    InvalidTranslate { translate: Complex },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(f, "viewport scale must be positive and finite: {}", scale)
            }
            Self::InvalidTranslate { translate } => {
                write!(
                    f,
                    "viewport translate must be finite: ({}, {})",
                    translate.real, translate.imag
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Affine mapping from normalised pixel space to the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    translate: Complex,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate: Complex::ZERO,
        }
    }
}

impl Viewport {
    pub fn new(scale: f64, translate: Complex) -> Result<Self, ViewportError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ViewportError::InvalidScale { scale });
        }

        if !translate.is_finite() {
            return Err(ViewportError::InvalidTranslate { translate });
        }

        Ok(Self { scale, translate })
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn translate(&self) -> Complex {
        self.translate
    }

    pub fn with_scale(&self, scale: f64) -> Result<Self, ViewportError> {
        Self::new(scale, self.translate)
    }

    pub fn with_translate(&self, translate: Complex) -> Result<Self, ViewportError> {
        Self::new(self.scale, translate)
    }
}
