use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::ViewportError;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum RootSetError {
    TooFewRoots { count: usize },
    NonFiniteRoot { index: usize, root: Complex },
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for RootSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewRoots { count } => {
                write!(f, "at least two roots are required, got {}", count)
            }
            Self::NonFiniteRoot { index, root } => {
                write!(
                    f,
                    "root {} is not finite: ({}, {})",
                    index, root.real, root.imag
                )
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "root index {} out of range for {} roots", index, len)
            }
        }
    }
}

impl Error for RootSetError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ColourTableError {
    Empty,
    InvalidColour { index: usize, colour: Colour },
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for ColourTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "colour table must not be empty"),
            Self::InvalidColour { index, colour } => {
                write!(
                    f,
                    "colour {} has channels outside [0, 1]: ({}, {}, {})",
                    index, colour.r, colour.g, colour.b
                )
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "colour index {} out of range for {} colours", index, len)
            }
        }
    }
}

impl Error for ColourTableError {}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameConfigError {
    LengthMismatch { roots: usize, colours: usize },
    RootSet(RootSetError),
    ColourTable(ColourTableError),
    Viewport(ViewportError),
}

impl fmt::Display for FrameConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { roots, colours } => {
                write!(
                    f,
                    "root count {} does not match colour count {}",
                    roots, colours
                )
            }
            Self::RootSet(err) => write!(f, "root set error: {}", err),
            Self::ColourTable(err) => write!(f, "colour table error: {}", err),
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
        }
    }
}

impl Error for FrameConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::LengthMismatch { .. } => None,
            Self::RootSet(err) => Some(err),
            Self::ColourTable(err) => Some(err),
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<RootSetError> for FrameConfigError {
    fn from(err: RootSetError) -> Self {
        Self::RootSet(err)
    }
}

impl From<ColourTableError> for FrameConfigError {
    fn from(err: ColourTableError) -> Self {
        Self::ColourTable(err)
    }
}

impl From<ViewportError> for FrameConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}
