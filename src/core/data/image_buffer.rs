use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ImageBufferError {
    PixelOutsideBounds {
        pixel: Point,
        resolution: Resolution,
    },
    BoundsMismatch {
        resolution_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for ImageBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                resolution_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "resolution size {} does not match buffer size {}",
                    resolution_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, resolution } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} image",
                    pixel.x,
                    pixel.y,
                    resolution.width(),
                    resolution.height()
                )
            }
        }
    }
}

impl Error for ImageBufferError {}

/// The finished frame: one colour per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    resolution: Resolution,
    pixels: Vec<Colour>,
}

impl ImageBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            pixels: vec![Colour::BLACK; resolution.size()],
        }
    }

    pub fn from_data(
        resolution: Resolution,
        pixels: Vec<Colour>,
    ) -> Result<Self, ImageBufferError> {
        if resolution.size() != pixels.len() {
            return Err(ImageBufferError::BoundsMismatch {
                resolution_size: resolution.size(),
                buffer_size: pixels.len(),
            });
        }

        Ok(Self { resolution, pixels })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, ImageBufferError> {
        if !self.resolution.contains_point(pixel) {
            return Err(ImageBufferError::PixelOutsideBounds {
                pixel,
                resolution: self.resolution,
            });
        }

        Ok(self.pixels[self.resolution.index_of(pixel)])
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), ImageBufferError> {
        if !self.resolution.contains_point(pixel) {
            return Err(ImageBufferError::PixelOutsideBounds {
                pixel,
                resolution: self.resolution,
            });
        }

        let index = self.resolution.index_of(pixel);
        self.pixels[index] = colour;

        Ok(())
    }

    /// Packed 8-bit RGB, row-major, three bytes per pixel.
    #[must_use]
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(Colour::to_rgb8).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_black_image() {
        let resolution = create_resolution(10, 10);
        let image = ImageBuffer::new(resolution);

        assert_eq!(image.resolution(), resolution);
        assert_eq!(image.pixels().len(), 100);
        assert!(image.pixels().iter().all(|&c| c == Colour::BLACK));
    }

    #[test]
    fn test_from_data_valid() {
        let resolution = create_resolution(2, 1);
        let data = vec![Colour::RED, Colour::BLUE];

        let image = ImageBuffer::from_data(resolution, data.clone()).unwrap();

        assert_eq!(image.pixels(), data.as_slice());
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let resolution = create_resolution(2, 2);

        let result = ImageBuffer::from_data(resolution, vec![Colour::RED; 3]);

        assert_eq!(
            result.unwrap_err(),
            ImageBufferError::BoundsMismatch {
                resolution_size: 4,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_set_and_get_pixel() {
        let mut image = ImageBuffer::new(create_resolution(3, 2));
        let pixel = Point { x: 2, y: 1 };

        image.set_pixel(pixel, Colour::GREEN).unwrap();

        assert_eq!(image.pixel(pixel).unwrap(), Colour::GREEN);
        assert_eq!(image.pixels()[5], Colour::GREEN);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let resolution = create_resolution(3, 2);
        let mut image = ImageBuffer::new(resolution);
        let pixel = Point { x: 3, y: 0 };

        assert_eq!(
            image.set_pixel(pixel, Colour::RED),
            Err(ImageBufferError::PixelOutsideBounds { pixel, resolution })
        );
    }

    #[test]
    fn test_to_rgb8_packs_row_major() {
        let resolution = create_resolution(2, 1);
        let image = ImageBuffer::from_data(resolution, vec![Colour::RED, Colour::BLUE]).unwrap();

        assert_eq!(image.to_rgb8(), vec![255, 0, 0, 0, 0, 255]);
    }
}
