use crate::core::data::complex::Complex;
use crate::core::fractals::newton::derivative::kinds::DerivativeKind;
use crate::core::fractals::newton::derivative::provider::{DerivativeProvider, DerivativeScratch};

/// Records the product evaluation of `p` on a tape and differentiates it by
/// propagating a unit sensitivity backward.
///
/// For a product of linear factors this is exactly the product rule, which
/// makes it a cross-check for [`AnalyticDerivative`](super::analytic::AnalyticDerivative).
#[derive(Debug, Default, Clone, Copy)]
pub struct ReverseModeDerivative;

impl DerivativeProvider for ReverseModeDerivative {
    fn derivative(
        &self,
        x: Complex,
        roots: &[Complex],
        scratch: &mut DerivativeScratch,
    ) -> Complex {
        let tape = &mut scratch.tape;
        tape.clear();

        let input = tape.leaf(x);
        let mut product = tape.leaf(Complex::ONE);

        for &root in roots {
            let root = tape.leaf(root);
            let factor = tape.sub(input, root);
            product = tape.mul(product, factor);
        }

        let gradient = tape.gradient(product, input);
        tape.clear();

        gradient
    }

    fn kind(&self) -> DerivativeKind {
        DerivativeKind::ReverseMode
    }
}
