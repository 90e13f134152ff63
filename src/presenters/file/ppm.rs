use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::colour::Colour;
use crate::core::data::image_buffer::ImageBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM writer. Row `y = 0` holds the smallest imaginary part, so rows
/// are written last to first to put the imaginary axis pointing up.
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(&self, image: &ImageBuffer, out: &mut W) -> std::io::Result<()> {
        let width = image.resolution().width();
        let height = image.resolution().height();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", width, height)?;
        writeln!(out, "255")?;

        for row in image.pixels().chunks(width as usize).rev() {
            let bytes: Vec<u8> = row.iter().flat_map(Colour::to_rgb8).collect();
            out.write_all(&bytes)?;
        }

        out.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, image: &ImageBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(std::fs::File::create(filepath)?);

        self.write_to(image, &mut file)
    }
}
