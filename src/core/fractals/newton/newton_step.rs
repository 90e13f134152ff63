use crate::core::data::complex::Complex;

/// One Newton-Raphson update, `x - p(x) / p'(x)`.
///
/// A zero slope produces a non-finite iterate which is carried forward as is;
/// classification treats it as unclassified.
#[inline]
#[must_use]
pub fn newton_step(x: Complex, value: Complex, slope: Complex) -> Complex {
    x - value / slope
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::newton::derivative::analytic::AnalyticDerivative;
    use crate::core::fractals::newton::derivative::{DerivativeProvider, DerivativeScratch};
    use crate::core::fractals::newton::polynomial::evaluate_polynomial;

    fn iterate(mut x: Complex, roots: &[Complex], iterations: u32) -> Complex {
        let mut scratch = DerivativeScratch::default();

        for _ in 0..iterations {
            let value = evaluate_polynomial(x, roots);
            let slope = AnalyticDerivative.derivative(x, roots, &mut scratch);
            x = newton_step(x, value, slope);
        }

        x
    }

    #[test]
    fn test_step_on_linear_polynomial_lands_on_root() {
        // p(x) = x - 2 has p' = 1, so one step from anywhere reaches 2
        let x = Complex::new(7.0, -3.0);
        let value = x - Complex::new(2.0, 0.0);

        assert_eq!(newton_step(x, value, Complex::ONE), Complex::new(2.0, 0.0));
    }

    #[test]
    fn test_converges_to_nearby_simple_root() {
        let roots = [
            Complex::new(0.5, 0.0),
            Complex::new(-0.5, 0.0),
            Complex::new(0.0, 0.5),
            Complex::new(0.0, -0.5),
        ];

        for &root in &roots {
            let start = root + Complex::new(0.05, -0.03);
            let x = iterate(start, &roots, 20);

            assert!(x.distance(root) < 1e-3, "started near {:?}, ended at {:?}", root, x);
        }
    }

    #[test]
    fn test_zero_slope_yields_non_finite_iterate() {
        let x = newton_step(Complex::ZERO, Complex::new(-1.0, 0.0), Complex::ZERO);

        assert!(!x.is_finite());
    }

    #[test]
    fn test_non_finite_iterate_stays_non_finite() {
        // x² - 1 starting on its critical point
        let roots = [Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0)];

        let x = iterate(Complex::ZERO, &roots, 5);

        assert!(!x.is_finite());
    }
}
