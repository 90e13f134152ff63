use crate::core::data::colour::Colour;
use crate::core::fractals::newton::errors::ColourTableError;

#[derive(Debug, Clone, PartialEq)]
pub struct ColourTable {
    colours: Vec<Colour>,
}

impl ColourTable {
    pub fn new(colours: Vec<Colour>) -> Result<Self, ColourTableError> {
        if colours.is_empty() {
            return Err(ColourTableError::Empty);
        }

        if let Some((index, &colour)) = colours.iter().enumerate().find(|(_, c)| !c.is_valid()) {
            return Err(ColourTableError::InvalidColour { index, colour });
        }

        Ok(Self { colours })
    }

    pub(crate) fn from_preset(colours: &[Colour]) -> Self {
        Self {
            colours: colours.to_vec(),
        }
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    pub fn set(&mut self, index: usize, colour: Colour) -> Result<(), ColourTableError> {
        let len = self.colours.len();
        let slot = self
            .colours
            .get_mut(index)
            .ok_or(ColourTableError::IndexOutOfRange { index, len })?;

        if !colour.is_valid() {
            return Err(ColourTableError::InvalidColour { index, colour });
        }

        *slot = colour;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_table() {
        assert_eq!(ColourTable::new(vec![]), Err(ColourTableError::Empty));
    }

    #[test]
    fn test_new_rejects_out_of_range_channel() {
        let result = ColourTable::new(vec![Colour::RED, Colour::new(0.0, 2.0, 0.0)]);

        assert!(matches!(
            result,
            Err(ColourTableError::InvalidColour { index: 1, .. })
        ));
    }

    #[test]
    fn test_set_validates_colour() {
        let mut table = ColourTable::new(vec![Colour::RED, Colour::GREEN]).unwrap();

        assert!(table.set(0, Colour::new(-1.0, 0.0, 0.0)).is_err());
        assert_eq!(table.get(0), Some(Colour::RED));

        table.set(0, Colour::BLUE).unwrap();
        assert_eq!(table.get(0), Some(Colour::BLUE));
    }
}
