use crate::core::data::complex::Complex;
use crate::core::fractals::newton::derivative::kinds::DerivativeKind;
use crate::core::fractals::newton::derivative::tape::Tape;

/// Per-worker buffers reused across pixels so the kernels never allocate in
/// the hot loop.
#[derive(Debug, Default)]
pub struct DerivativeScratch {
    pub(crate) suffix_products: Vec<Complex>,
    pub(crate) tape: Tape,
}

/// Computes `p'(x)` for `p(x) = Π (x - root_r)`.
pub trait DerivativeProvider: Send + Sync {
    fn derivative(
        &self,
        x: Complex,
        roots: &[Complex],
        scratch: &mut DerivativeScratch,
    ) -> Complex;

    fn kind(&self) -> DerivativeKind;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl DerivativeProvider for Box<dyn DerivativeProvider> {
    fn derivative(
        &self,
        x: Complex,
        roots: &[Complex],
        scratch: &mut DerivativeScratch,
    ) -> Complex {
        (**self).derivative(x, roots, scratch)
    }

    fn kind(&self) -> DerivativeKind {
        (**self).kind()
    }
}
