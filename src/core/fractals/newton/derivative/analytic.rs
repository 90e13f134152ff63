use crate::core::data::complex::Complex;
use crate::core::fractals::newton::derivative::kinds::DerivativeKind;
use crate::core::fractals::newton::derivative::provider::{DerivativeProvider, DerivativeScratch};

/// Product rule: `p'(x) = Σ_r Π_{k≠r} (x - root_k)`.
///
/// Runs in O(R) using suffix products `g_r = Π_{k>r}` computed back to front and
/// a running prefix `acc_r = Π_{k<r}` built front to back.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticDerivative;

impl DerivativeProvider for AnalyticDerivative {
    fn derivative(
        &self,
        x: Complex,
        roots: &[Complex],
        scratch: &mut DerivativeScratch,
    ) -> Complex {
        let suffix = &mut scratch.suffix_products;
        suffix.clear();
        suffix.resize(roots.len(), Complex::ONE);

        for r in (0..roots.len().saturating_sub(1)).rev() {
            suffix[r] = suffix[r + 1] * (x - roots[r + 1]);
        }

        let mut prefix = Complex::ONE;
        let mut sum = Complex::ZERO;

        for (r, &root) in roots.iter().enumerate() {
            sum = sum + suffix[r] * prefix;
            prefix = prefix * (x - root);
        }

        sum
    }

    fn kind(&self) -> DerivativeKind {
        DerivativeKind::Analytic
    }
}
