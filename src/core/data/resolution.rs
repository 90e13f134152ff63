use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "resolution must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ResolutionError {}

/// Image dimensions in pixels. Pixels are addressed row-major, `y * width + x`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ResolutionError> {
        if width == 0 || height == 0 {
            return Err(ResolutionError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The larger of the two dimensions, used so the transform keeps a square
    /// aspect in the complex plane.
    #[must_use]
    pub fn denominator(&self) -> u32 {
        self.width.max(self.height)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn index_of(&self, point: Point) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }

    #[must_use]
    pub fn point_at(&self, index: usize) -> Point {
        let width = self.width as usize;

        Point {
            x: (index % width) as u32,
            y: (index / width) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_new_valid() {
        let resolution = Resolution::new(1280, 720).unwrap();

        assert_eq!(resolution.width(), 1280);
        assert_eq!(resolution.height(), 720);
        assert_eq!(resolution.size(), 921_600);
    }

    #[test]
    fn test_resolution_single_pixel_is_valid() {
        assert!(Resolution::new(1, 1).is_ok());
    }

    #[test]
    fn test_resolution_dimensions_must_be_positive() {
        assert_eq!(
            Resolution::new(0, 10),
            Err(ResolutionError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            Resolution::new(10, 0),
            Err(ResolutionError::InvalidSize { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_denominator_is_larger_dimension() {
        assert_eq!(Resolution::new(1280, 720).unwrap().denominator(), 1280);
        assert_eq!(Resolution::new(300, 512).unwrap().denominator(), 512);
    }

    #[test]
    fn test_contains_point() {
        let resolution = Resolution::new(4, 3).unwrap();

        assert!(resolution.contains_point(Point { x: 0, y: 0 }));
        assert!(resolution.contains_point(Point { x: 3, y: 2 }));
        assert!(!resolution.contains_point(Point { x: 4, y: 0 }));
        assert!(!resolution.contains_point(Point { x: 0, y: 3 }));
    }

    #[test]
    fn test_index_and_point_are_row_major() {
        let resolution = Resolution::new(4, 3).unwrap();

        assert_eq!(resolution.index_of(Point { x: 1, y: 2 }), 9);
        assert_eq!(resolution.point_at(9), Point { x: 1, y: 2 });
        assert_eq!(resolution.point_at(3), Point { x: 3, y: 0 });
    }
}
