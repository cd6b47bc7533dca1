use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `buffer` as a binary PPM (P6) image.
pub fn encode_ppm(buffer: &PixelBuffer, mut writer: impl Write) -> std::io::Result<()> {
    let size = buffer.domain_size();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", size, size)?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;
    writer.flush()
}

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        encode_ppm(buffer, BufWriter::new(File::create(filepath)?))
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    #[test]
    fn test_encode_ppm_header_and_pixels() {
        let mut buffer = PixelBuffer::new(2);
        buffer.set_pixel(Point { x: 1, y: 0 }, Colour { r: 1, g: 2, b: 3 }).unwrap();
        let mut bytes = Vec::new();

        encode_ppm(&buffer, &mut bytes).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(&bytes[header.len()..], buffer.buffer().as_slice());
        assert_eq!(&bytes[header.len() + 3..header.len() + 6], &[1, 2, 3]);
    }

    #[test]
    fn test_present_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("frame.ppm");
        let buffer = PixelBuffer::new(3);

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n3 3\n255\n"));
        assert_eq!(written.len(), 11 + 27);
    }
}
