use crate::core::data::complex::Complex;

/// Which root a sample point ended up nearest to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basin {
    Root(usize),
    /// The iterate is NaN or infinite, typically after a step through a zero
    /// derivative.
    Unclassified,
}

/// Nearest root by Euclidean distance.
///
/// Roots are scanned in index order with a strict `<`, so on a tie the lower
/// index wins.
#[inline]
#[must_use]
pub fn classify_basin(x: Complex, roots: &[Complex]) -> Basin {
    if !x.is_finite() {
        return Basin::Unclassified;
    }

    let mut nearest: Option<(usize, f64)> = None;

    for (index, &root) in roots.iter().enumerate() {
        let distance = x.distance(root);

        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((index, distance)),
        }
    }

    nearest.map_or(Basin::Unclassified, |(index, _)| Basin::Root(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real_pair() -> [Complex; 2] {
        [Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0)]
    }

    #[test]
    fn test_classifies_to_nearest_root() {
        let roots = real_pair();

        assert_eq!(classify_basin(Complex::new(0.9, 0.0), &roots), Basin::Root(0));
        assert_eq!(classify_basin(Complex::new(-0.2, 3.0), &roots), Basin::Root(1));
    }

    #[test]
    fn test_equidistant_point_prefers_lower_index() {
        let roots = real_pair();

        assert_eq!(classify_basin(Complex::ZERO, &roots), Basin::Root(0));
        assert_eq!(classify_basin(Complex::new(0.0, 7.0), &roots), Basin::Root(0));
    }

    #[test]
    fn test_equidistant_point_prefers_lower_index_when_reversed() {
        let roots = [Complex::new(-1.0, 0.0), Complex::new(1.0, 0.0)];

        assert_eq!(classify_basin(Complex::ZERO, &roots), Basin::Root(0));
    }

    #[test]
    fn test_non_finite_is_unclassified() {
        let roots = real_pair();

        assert_eq!(
            classify_basin(Complex::new(f64::NAN, 0.0), &roots),
            Basin::Unclassified
        );
        assert_eq!(
            classify_basin(Complex::new(0.0, f64::NEG_INFINITY), &roots),
            Basin::Unclassified
        );
    }

    #[test]
    fn test_point_on_root_classifies_to_that_root() {
        let roots = [
            Complex::new(0.5, 0.0),
            Complex::new(-0.5, 0.5),
            Complex::new(-0.5, -0.5),
        ];

        for (index, &root) in roots.iter().enumerate() {
            assert_eq!(classify_basin(root, &roots), Basin::Root(index));
        }
    }

    #[test]
    fn test_huge_finite_point_still_picks_nearest_root() {
        // Squared distances here overflow f64, the distances themselves do not
        let roots = [Complex::new(-1e200, 0.0), Complex::new(1e200, 0.0)];

        assert_eq!(classify_basin(Complex::new(3e200, 0.0), &roots), Basin::Root(1));
    }
}
