use log::trace;

use crate::core::actions::dispatch::ports::phase_dispatcher::PhaseDispatcher;
use crate::core::actions::generate_image::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::image_buffer::{ImageBuffer, ImageBufferError};
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GenerateImageError<E> {
    ColourMap(E),
    ImageBuffer(ImageBufferError),
}

impl<E: fmt::Display> fmt::Display for GenerateImageError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::ImageBuffer(err) => write!(f, "image buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GenerateImageError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::ImageBuffer(err) => Some(err),
        }
    }
}

impl<E> From<ImageBufferError> for GenerateImageError<E> {
    fn from(err: ImageBufferError) -> Self {
        Self::ImageBuffer(err)
    }
}

/// Colours every pixel of a classified grid in one phase.
pub fn generate_image<T, CMap, D>(
    dispatcher: &D,
    input: &[T],
    mapper: &CMap,
    resolution: Resolution,
) -> Result<ImageBuffer, GenerateImageError<CMap::Failure>>
where
    T: Copy + Sync,
    CMap: ColourMap<T> + Sync,
    CMap::Failure: Send,
    D: PhaseDispatcher,
{
    trace!("begin colourise phase with {}", mapper.display_name());

    let pixels = dispatcher
        .map_each(input, |value| mapper.map(*value))
        .into_iter()
        .collect::<Result<Vec<Colour>, _>>()
        .map_err(GenerateImageError::ColourMap)?;

    Ok(ImageBuffer::from_data(resolution, pixels)?)
}
