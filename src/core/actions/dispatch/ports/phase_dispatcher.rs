use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Runs one per-pixel phase over a whole grid.
///
/// Every method returns only after all pixels have been processed, which is the
/// barrier between phases. Each kernel call sees only its own pixel's inputs
/// and writes only its own output slot.
pub trait PhaseDispatcher {
    fn display_name(&self) -> &str;

    /// Builds a row-major grid by evaluating `kernel` at every pixel.
    fn map_pixels<T, F>(&self, resolution: Resolution, kernel: F) -> Vec<T>
    where
        T: Send,
        F: Fn(Point) -> T + Sync + Send;

    /// Builds a new grid from an existing one, element by element.
    fn map_each<A, B, F>(&self, inputs: &[A], kernel: F) -> Vec<B>
    where
        A: Sync,
        B: Send,
        F: Fn(&A) -> B + Sync + Send;

    /// Writes `outputs[i]` from `inputs[i]`. `init` creates scratch state that a
    /// worker reuses across the pixels it handles.
    fn zip_update<A, B, S, I, F>(&self, inputs: &[A], outputs: &mut [B], init: I, kernel: F)
    where
        A: Sync,
        B: Send,
        I: Fn() -> S + Sync + Send,
        F: Fn(&mut S, &A, &mut B) + Sync + Send;
}
