use rayon::prelude::*;

use crate::core::actions::dispatch::ports::phase_dispatcher::PhaseDispatcher;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Parallel dispatcher on rayon's work-stealing pool.
///
/// Each phase is a single indexed parallel iterator, so results land in
/// row-major order and the call does not return until every pixel is done.
#[derive(Debug, Default, Clone, Copy)]
pub struct RayonDispatcher;

impl PhaseDispatcher for RayonDispatcher {
    fn display_name(&self) -> &str {
        "Rayon"
    }

    fn map_pixels<T, F>(&self, resolution: Resolution, kernel: F) -> Vec<T>
    where
        T: Send,
        F: Fn(Point) -> T + Sync + Send,
    {
        (0..resolution.size())
            .into_par_iter()
            .map(|index| kernel(resolution.point_at(index)))
            .collect()
    }

    fn map_each<A, B, F>(&self, inputs: &[A], kernel: F) -> Vec<B>
    where
        A: Sync,
        B: Send,
        F: Fn(&A) -> B + Sync + Send,
    {
        inputs.par_iter().map(kernel).collect()
    }

    fn zip_update<A, B, S, I, F>(&self, inputs: &[A], outputs: &mut [B], init: I, kernel: F)
    where
        A: Sync,
        B: Send,
        I: Fn() -> S + Sync + Send,
        F: Fn(&mut S, &A, &mut B) + Sync + Send,
    {
        inputs
            .par_iter()
            .zip(outputs.par_iter_mut())
            .for_each_init(init, |scratch, (input, output)| {
                kernel(scratch, input, output)
            });
    }
}
