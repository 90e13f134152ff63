use crate::core::actions::generate_image::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::newton::basin::Basin;
use crate::core::fractals::newton::colour_table::ColourTable;
use crate::core::fractals::newton::errors::ColourTableError;

pub const BACKGROUND_COLOUR: Colour = Colour::BLACK;

/// Looks up a basin's colour in the table; unclassified pixels get the
/// background colour.
#[derive(Debug, Clone)]
pub struct BasinColourMap {
    table: ColourTable,
    background: Colour,
}

impl ColourMap<Basin> for BasinColourMap {
    type Failure = ColourTableError;

    fn map(&self, basin: Basin) -> Result<Colour, Self::Failure> {
        match basin {
            Basin::Root(index) => self.table.get(index).ok_or(ColourTableError::IndexOutOfRange {
                index,
                len: self.table.len(),
            }),
            Basin::Unclassified => Ok(self.background),
        }
    }

    fn display_name(&self) -> &str {
        "Basin lookup"
    }
}

impl BasinColourMap {
    #[must_use]
    pub fn new(table: ColourTable) -> Self {
        Self {
            table,
            background: BACKGROUND_COLOUR,
        }
    }

    #[must_use]
    pub fn background(&self) -> Colour {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> BasinColourMap {
        BasinColourMap::new(
            ColourTable::new(vec![Colour::RED, Colour::GREEN, Colour::BLUE]).unwrap(),
        )
    }

    #[test]
    fn test_map_looks_up_root_colour() {
        let mapper = mapper();

        assert_eq!(mapper.map(Basin::Root(0)).unwrap(), Colour::RED);
        assert_eq!(mapper.map(Basin::Root(2)).unwrap(), Colour::BLUE);
    }

    #[test]
    fn test_map_unclassified_is_background() {
        assert_eq!(mapper().map(Basin::Unclassified).unwrap(), BACKGROUND_COLOUR);
    }

    #[test]
    fn test_map_index_outside_table_fails() {
        assert_eq!(
            mapper().map(Basin::Root(3)),
            Err(ColourTableError::IndexOutOfRange { index: 3, len: 3 })
        );
    }
}
