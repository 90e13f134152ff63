use crate::core::actions::dispatch::ports::phase_dispatcher::PhaseDispatcher;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Single-threaded reference dispatcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialDispatcher;

impl PhaseDispatcher for SerialDispatcher {
    fn display_name(&self) -> &str {
        "Serial"
    }

    fn map_pixels<T, F>(&self, resolution: Resolution, kernel: F) -> Vec<T>
    where
        T: Send,
        F: Fn(Point) -> T + Sync + Send,
    {
        (0..resolution.height())
            .flat_map(|y| (0..resolution.width()).map(move |x| Point { x, y }))
            .map(kernel)
            .collect()
    }

    fn map_each<A, B, F>(&self, inputs: &[A], kernel: F) -> Vec<B>
    where
        A: Sync,
        B: Send,
        F: Fn(&A) -> B + Sync + Send,
    {
        inputs.iter().map(kernel).collect()
    }

    fn zip_update<A, B, S, I, F>(&self, inputs: &[A], outputs: &mut [B], init: I, kernel: F)
    where
        A: Sync,
        B: Send,
        I: Fn() -> S + Sync + Send,
        F: Fn(&mut S, &A, &mut B) + Sync + Send,
    {
        let mut scratch = init();

        for (input, output) in inputs.iter().zip(outputs.iter_mut()) {
            kernel(&mut scratch, input, output);
        }
    }
}
