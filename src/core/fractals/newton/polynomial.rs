use crate::core::data::complex::Complex;

/// Evaluates `p(x) = Π (x - root_r)`, multiplying factors in ascending root
/// order starting from one.
#[inline]
#[must_use]
pub fn evaluate_polynomial(x: Complex, roots: &[Complex]) -> Complex {
    roots
        .iter()
        .fold(Complex::ONE, |acc, &root| acc * (x - root))
}
