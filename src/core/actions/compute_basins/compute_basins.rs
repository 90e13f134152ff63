use log::trace;

use crate::core::actions::dispatch::ports::phase_dispatcher::PhaseDispatcher;
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::newton::basin::{Basin, classify_basin};
use crate::core::fractals::newton::derivative::{DerivativeProvider, DerivativeScratch};
use crate::core::fractals::newton::frame_config::FrameConfig;
use crate::core::fractals::newton::newton_step::newton_step;
use crate::core::fractals::newton::polynomial::evaluate_polynomial;
use crate::core::util::viewport_to_complex_coords::viewport_to_complex_coords;

/// Per-pixel `p(x)` and `p'(x)` for the current iterate. Rewritten every
/// iteration.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NewtonTerms {
    pub value: Complex,
    pub slope: Complex,
}

/// Starting points for every pixel, row-major.
pub fn build_sample_grid<D: PhaseDispatcher>(
    dispatcher: &D,
    resolution: Resolution,
    viewport: Viewport,
) -> Vec<Complex> {
    dispatcher.map_pixels(resolution, |pixel| {
        viewport_to_complex_coords(pixel, resolution, viewport)
    })
}

/// Runs `iterations` Newton steps over the grid in place.
///
/// Each iteration is three phases: evaluate `p`, evaluate `p'`, step. A phase
/// completes for every pixel before the next begins.
pub fn iterate_samples<D, P>(
    dispatcher: &D,
    samples: &mut [Complex],
    roots: &[Complex],
    provider: &P,
    iterations: u32,
) where
    D: PhaseDispatcher,
    P: DerivativeProvider + ?Sized,
{
    let mut terms = vec![NewtonTerms::default(); samples.len()];

    for _ in 0..iterations {
        dispatcher.zip_update(&*samples, &mut terms, || (), |_, x, pixel| {
            pixel.value = evaluate_polynomial(*x, roots);
        });

        dispatcher.zip_update(
            &*samples,
            &mut terms,
            DerivativeScratch::default,
            |scratch, x, pixel| {
                pixel.slope = provider.derivative(*x, roots, scratch);
            },
        );

        dispatcher.zip_update(&terms, &mut *samples, || (), |_, pixel, x| {
            *x = newton_step(*x, pixel.value, pixel.slope);
        });
    }
}

pub fn classify_samples<D: PhaseDispatcher>(
    dispatcher: &D,
    samples: &[Complex],
    roots: &[Complex],
) -> Vec<Basin> {
    dispatcher.map_each(samples, |x| classify_basin(*x, roots))
}

/// Transform, iterate and classify for one frame.
pub fn compute_basins<D: PhaseDispatcher>(
    dispatcher: &D,
    resolution: Resolution,
    config: &FrameConfig,
) -> Vec<Basin> {
    let roots = config.roots().roots();
    let provider = config.derivative_provider();

    trace!("begin transform phase ({})", dispatcher.display_name());
    let mut samples = build_sample_grid(dispatcher, resolution, config.viewport());

    trace!(
        "begin {} iterations with {} derivative",
        config.iterations(),
        provider.display_name()
    );
    iterate_samples(dispatcher, &mut samples, roots, provider.as_ref(), config.iterations());

    trace!("begin classify phase");
    classify_samples(dispatcher, &samples, roots)
}
