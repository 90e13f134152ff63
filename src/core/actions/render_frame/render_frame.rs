use crate::core::actions::compute_basins::compute_basins::compute_basins;
use crate::core::actions::dispatch::ports::phase_dispatcher::PhaseDispatcher;
use crate::core::actions::generate_image::generate_image::{GenerateImageError, generate_image};
use crate::core::data::image_buffer::ImageBuffer;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::newton::errors::ColourTableError;
use crate::core::fractals::newton::frame_config::FrameConfig;

pub type RenderFrameError = GenerateImageError<ColourTableError>;

/// All phases of one frame against a single configuration snapshot.
pub fn render_frame<D: PhaseDispatcher>(
    dispatcher: &D,
    resolution: Resolution,
    config: &FrameConfig,
) -> Result<ImageBuffer, RenderFrameError> {
    let basins = compute_basins(dispatcher, resolution, config);

    generate_image(dispatcher, &basins, &config.colour_map(), resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::dispatch::{RayonDispatcher, SerialDispatcher};
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::newton::colour_map::BACKGROUND_COLOUR;
    use crate::core::fractals::newton::derivative::DerivativeKind;

    #[test]
    fn test_three_roots_four_by_four_without_iterating() {
        // Samples are the grid {-1, -0.5, 0, 0.5}² with x along the real axis.
        // Roots: R (0.5, 0), G (-0.5, 0.5), B (-0.5, -0.5). Rows run y = 0..3,
        // i.e. imag -1, -0.5, 0, 0.5.
        let (r, g, b) = (Colour::RED, Colour::GREEN, Colour::BLUE);
        let expected = vec![
            b, b, b, r, //
            b, b, b, r, //
            g, g, r, r, // imag 0: (-1,0) and (-0.5,0) tie between G and B, G has the lower index
            g, g, g, r,
        ];
        let resolution = Resolution::new(4, 4).unwrap();

        let image =
            render_frame(&SerialDispatcher, resolution, &FrameConfig::three_roots()).unwrap();

        assert_eq!(image.pixels(), expected.as_slice());
    }

    #[test]
    fn test_critical_point_renders_background_and_frame_completes() {
        // x² - 1 on a 4x4 grid: pixel (2, 2) is the origin where p' vanishes
        let config = FrameConfig::new(
            vec![Complex::ONE, Complex::new(-1.0, 0.0)],
            vec![Colour::RED, Colour::BLUE],
            Viewport::default(),
            5,
            DerivativeKind::Analytic,
        )
        .unwrap();
        let resolution = Resolution::new(4, 4).unwrap();

        let image = render_frame(&RayonDispatcher, resolution, &config).unwrap();

        assert_eq!(image.pixels().len(), 16);
        assert_eq!(image.pixel(Point { x: 2, y: 2 }).unwrap(), BACKGROUND_COLOUR);
        assert_eq!(image.pixel(Point { x: 3, y: 2 }).unwrap(), Colour::RED);
        assert_eq!(image.pixel(Point { x: 0, y: 2 }).unwrap(), Colour::BLUE);
    }

    #[test]
    fn test_rayon_and_serial_render_identical_frames() {
        let config = FrameConfig::default();
        let resolution = Resolution::new(48, 27).unwrap();

        let serial = render_frame(&SerialDispatcher, resolution, &config).unwrap();
        let parallel = render_frame(&RayonDispatcher, resolution, &config).unwrap();

        assert_eq!(parallel, serial);
    }
}
