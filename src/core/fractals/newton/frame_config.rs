use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::newton::colour_map::BasinColourMap;
use crate::core::fractals::newton::colour_table::ColourTable;
use crate::core::fractals::newton::derivative::{
    DerivativeKind, DerivativeProvider, derivative_provider_factory,
};
use crate::core::fractals::newton::errors::FrameConfigError;
use crate::core::fractals::newton::root_set::RootSet;

pub const DEFAULT_ITERATIONS: u32 = 20;

const FOUR_ROOTS: [Complex; 4] = [
    Complex::new(0.5, 0.0),
    Complex::new(-0.5, 0.0),
    Complex::new(0.0, 0.5),
    Complex::new(0.0, -0.5),
];

const FOUR_ROOT_COLOURS: [Colour; 4] = [
    Colour::new(0.3, 0.1, 0.7),
    Colour::new(0.7, 0.1, 0.3),
    Colour::new(0.3, 0.7, 0.1),
    Colour::new(0.7, 0.3, 0.1),
];

const THREE_ROOTS: [Complex; 3] = [
    Complex::new(0.5, 0.0),
    Complex::new(-0.5, 0.5),
    Complex::new(-0.5, -0.5),
];

const THREE_ROOT_COLOURS: [Colour; 3] = [Colour::RED, Colour::GREEN, Colour::BLUE];

/// Everything one frame needs besides the resolution. Cloned as a snapshot at
/// the start of each frame.
///
/// Roots and colours only change together or one slot at a time, so their
/// lengths always match.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameConfig {
    roots: RootSet,
    colours: ColourTable,
    viewport: Viewport,
    iterations: u32,
    derivative_kind: DerivativeKind,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::from_preset(&FOUR_ROOTS, &FOUR_ROOT_COLOURS, DEFAULT_ITERATIONS)
    }
}

impl FrameConfig {
    pub fn new(
        roots: Vec<Complex>,
        colours: Vec<Colour>,
        viewport: Viewport,
        iterations: u32,
        derivative_kind: DerivativeKind,
    ) -> Result<Self, FrameConfigError> {
        let (roots, colours) = Self::validate_roots_and_colours(roots, colours)?;

        Ok(Self {
            roots,
            colours,
            viewport,
            iterations,
            derivative_kind,
        })
    }

    /// Three roots coloured red, green and blue, rendered without iterating.
    #[must_use]
    pub fn three_roots() -> Self {
        Self::from_preset(&THREE_ROOTS, &THREE_ROOT_COLOURS, 0)
    }

    fn from_preset<const N: usize>(
        roots: &[Complex; N],
        colours: &[Colour; N],
        iterations: u32,
    ) -> Self {
        Self {
            roots: RootSet::from_preset(roots),
            colours: ColourTable::from_preset(colours),
            viewport: Viewport::default(),
            iterations,
            derivative_kind: DerivativeKind::default(),
        }
    }

    fn validate_roots_and_colours(
        roots: Vec<Complex>,
        colours: Vec<Colour>,
    ) -> Result<(RootSet, ColourTable), FrameConfigError> {
        if roots.len() != colours.len() {
            return Err(FrameConfigError::LengthMismatch {
                roots: roots.len(),
                colours: colours.len(),
            });
        }

        Ok((RootSet::new(roots)?, ColourTable::new(colours)?))
    }

    #[must_use]
    pub fn roots(&self) -> &RootSet {
        &self.roots
    }

    #[must_use]
    pub fn colours(&self) -> &ColourTable {
        &self.colours
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn derivative_kind(&self) -> DerivativeKind {
        self.derivative_kind
    }

    #[must_use]
    pub fn derivative_provider(&self) -> Box<dyn DerivativeProvider> {
        derivative_provider_factory(self.derivative_kind)
    }

    #[must_use]
    pub fn colour_map(&self) -> BasinColourMap {
        BasinColourMap::new(self.colours.clone())
    }

    pub fn set_roots_and_colours(
        &mut self,
        roots: Vec<Complex>,
        colours: Vec<Colour>,
    ) -> Result<(), FrameConfigError> {
        let (roots, colours) = Self::validate_roots_and_colours(roots, colours)?;
        self.roots = roots;
        self.colours = colours;

        Ok(())
    }

    pub fn set_root(&mut self, index: usize, root: Complex) -> Result<(), FrameConfigError> {
        Ok(self.roots.set(index, root)?)
    }

    pub fn set_colour(&mut self, index: usize, colour: Colour) -> Result<(), FrameConfigError> {
        Ok(self.colours.set(index, colour)?)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_iterations(&mut self, iterations: u32) {
        self.iterations = iterations;
    }

    pub fn set_derivative_kind(&mut self, derivative_kind: DerivativeKind) {
        self.derivative_kind = derivative_kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::newton::errors::{ColourTableError, RootSetError};

    #[test]
    fn test_default_is_four_root_preset() {
        let config = FrameConfig::default();

        assert_eq!(config.roots().len(), 4);
        assert_eq!(config.colours().len(), 4);
        assert_eq!(config.iterations(), DEFAULT_ITERATIONS);
        assert_eq!(config.derivative_kind(), DerivativeKind::Analytic);
        assert_eq!(config.viewport(), Viewport::default());
    }

    #[test]
    fn test_three_roots_preset() {
        let config = FrameConfig::three_roots();

        assert_eq!(config.roots().len(), 3);
        assert_eq!(config.colours().get(1), Some(Colour::GREEN));
        assert_eq!(config.iterations(), 0);
    }

    #[test]
    fn test_presets_pass_validation() {
        let four = FrameConfig::new(
            FOUR_ROOTS.to_vec(),
            FOUR_ROOT_COLOURS.to_vec(),
            Viewport::default(),
            DEFAULT_ITERATIONS,
            DerivativeKind::default(),
        );
        let three = FrameConfig::new(
            THREE_ROOTS.to_vec(),
            THREE_ROOT_COLOURS.to_vec(),
            Viewport::default(),
            0,
            DerivativeKind::default(),
        );

        assert_eq!(four, Ok(FrameConfig::default()));
        assert_eq!(three, Ok(FrameConfig::three_roots()));
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let result = FrameConfig::new(
            vec![Complex::ONE, Complex::ZERO, Complex::new(0.0, 1.0)],
            vec![Colour::RED, Colour::GREEN],
            Viewport::default(),
            10,
            DerivativeKind::Analytic,
        );

        assert_eq!(
            result,
            Err(FrameConfigError::LengthMismatch {
                roots: 3,
                colours: 2
            })
        );
    }

    #[test]
    fn test_new_rejects_single_root() {
        let result = FrameConfig::new(
            vec![Complex::ONE],
            vec![Colour::RED],
            Viewport::default(),
            10,
            DerivativeKind::Analytic,
        );

        assert_eq!(
            result,
            Err(FrameConfigError::RootSet(RootSetError::TooFewRoots {
                count: 1
            }))
        );
    }

    #[test]
    fn test_set_roots_and_colours_leaves_config_untouched_on_error() {
        let mut config = FrameConfig::default();
        let before = config.clone();

        let result =
            config.set_roots_and_colours(vec![Complex::ONE, Complex::ZERO], vec![Colour::RED]);

        assert!(result.is_err());
        assert_eq!(config, before);
    }

    #[test]
    fn test_set_colour_out_of_range() {
        let mut config = FrameConfig::three_roots();

        assert_eq!(
            config.set_colour(3, Colour::RED),
            Err(FrameConfigError::ColourTable(
                ColourTableError::IndexOutOfRange { index: 3, len: 3 }
            ))
        );
    }

    #[test]
    fn test_derivative_provider_follows_kind() {
        let mut config = FrameConfig::default();
        config.set_derivative_kind(DerivativeKind::ReverseMode);

        assert_eq!(config.derivative_provider().kind(), DerivativeKind::ReverseMode);
    }
}
