use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;

/// Maps a pixel to its starting point in the complex plane.
///
/// Both axes are divided by the larger image dimension so roots keep their
/// geometry on non-square images: `((2 * p / max(w, h)) - 1) * scale + translate`.
/// The real axis follows `x`, the imaginary axis follows `y`. Points past the
/// resolution extrapolate the same grid.
#[inline]
#[must_use]
pub fn viewport_to_complex_coords(
    pixel_position: Point,
    resolution: Resolution,
    viewport: Viewport,
) -> Complex {
    let denominator = f64::from(resolution.denominator());
    let normalised = Complex {
        real: 2.0 * f64::from(pixel_position.x) / denominator - 1.0,
        imag: 2.0 * f64::from(pixel_position.y) / denominator - 1.0,
    };

    normalised.scale(viewport.scale()) + viewport.translate()
}
