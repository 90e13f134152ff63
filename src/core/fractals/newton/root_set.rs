use crate::core::data::complex::Complex;
use crate::core::fractals::newton::errors::RootSetError;

pub const MIN_ROOTS: usize = 2;

/// The roots defining `p(x) = Π (x - root_r)`. A root's index is its identity
/// and lines up with the colour table.
#[derive(Debug, Clone, PartialEq)]
pub struct RootSet {
    roots: Vec<Complex>,
}

impl RootSet {
    pub fn new(roots: Vec<Complex>) -> Result<Self, RootSetError> {
        if roots.len() < MIN_ROOTS {
            return Err(RootSetError::TooFewRoots { count: roots.len() });
        }

        if let Some((index, &root)) = roots.iter().enumerate().find(|(_, r)| !r.is_finite()) {
            return Err(RootSetError::NonFiniteRoot { index, root });
        }

        Ok(Self { roots })
    }

    /// Built-in root sets only. They are checked against [`RootSet::new`] in
    /// the frame config tests.
    pub(crate) fn from_preset(roots: &[Complex]) -> Self {
        Self {
            roots: roots.to_vec(),
        }
    }

    #[must_use]
    pub fn roots(&self) -> &[Complex] {
        &self.roots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<Complex, RootSetError> {
        self.roots
            .get(index)
            .copied()
            .ok_or(RootSetError::IndexOutOfRange {
                index,
                len: self.roots.len(),
            })
    }

    pub fn set(&mut self, index: usize, root: Complex) -> Result<(), RootSetError> {
        let len = self.roots.len();
        let slot = self
            .roots
            .get_mut(index)
            .ok_or(RootSetError::IndexOutOfRange { index, len })?;

        if !root.is_finite() {
            return Err(RootSetError::NonFiniteRoot { index, root });
        }

        *slot = root;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_two_roots() {
        assert_eq!(
            RootSet::new(vec![Complex::ONE]),
            Err(RootSetError::TooFewRoots { count: 1 })
        );
        assert!(RootSet::new(vec![Complex::ONE, Complex::ZERO]).is_ok());
    }

    #[test]
    fn test_new_rejects_non_finite_root() {
        let result = RootSet::new(vec![Complex::ONE, Complex::new(f64::NAN, 0.0)]);

        assert!(matches!(
            result,
            Err(RootSetError::NonFiniteRoot { index: 1, .. })
        ));
    }

    #[test]
    fn test_set_replaces_root_in_place() {
        let mut roots = RootSet::new(vec![Complex::ONE, Complex::ZERO]).unwrap();

        roots.set(1, Complex::new(0.0, 0.5)).unwrap();

        assert_eq!(roots.get(1).unwrap(), Complex::new(0.0, 0.5));
        assert_eq!(roots.len(), 2);
    }

    #[test]
    fn test_set_out_of_range() {
        let mut roots = RootSet::new(vec![Complex::ONE, Complex::ZERO]).unwrap();

        assert_eq!(
            roots.set(2, Complex::ZERO),
            Err(RootSetError::IndexOutOfRange { index: 2, len: 2 })
        );
    }
}
