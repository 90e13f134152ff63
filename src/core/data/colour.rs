/// Linear RGB with each channel in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Colour {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|channel| (0.0..=1.0).contains(channel))
    }

    /// Quantises to 8-bit channels, rounding to nearest.
    #[must_use]
    pub fn to_rgb8(&self) -> [u8; 3] {
        let quantise = |channel: f64| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;

        [quantise(self.r), quantise(self.g), quantise(self.b)]
    }
}
