use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 3;

/// Largest supported image side in pixels, about 3 GiB of RGB data.
pub const MAX_DOMAIN_SIZE: u32 = 1 << 15;

fn domain_size_to_buffer_size(domain_size: u32) -> Option<usize> {
    (domain_size as usize)
        .checked_mul(domain_size as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of {domain_size}x{domain_size} buffer", .pixel.x, .pixel.y)]
    PixelOutsideBounds { pixel: Point, domain_size: u32 },
    #[error("buffer size {buffer_size} does not match expected size {expected_size}")]
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
    #[error("{0}x{0} buffer does not fit in memory")]
    DomainTooLarge(u32),
}

pub type PixelBufferData = Vec<u8>;

/// Square RGB image, row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    domain_size: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Allocates a black buffer.
    ///
    /// # Panics
    ///
    /// If the buffer size overflows `usize`. [`Viewport`](crate::core::data::viewport::Viewport)
    /// caps the side at [`MAX_DOMAIN_SIZE`] so rendered buffers never get there.
    #[must_use]
    pub fn new(domain_size: u32) -> Self {
        let buffer_size = domain_size_to_buffer_size(domain_size)
            .unwrap_or_else(|| panic!("{}", PixelBufferError::DomainTooLarge(domain_size)));

        Self {
            domain_size,
            buffer: vec![0; buffer_size],
        }
    }

    pub fn from_data(domain_size: u32, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected_size = domain_size_to_buffer_size(domain_size)
            .ok_or(PixelBufferError::DomainTooLarge(domain_size))?;

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            domain_size,
            buffer,
        })
    }

    #[must_use]
    pub fn domain_size(&self) -> u32 {
        self.domain_size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.domain_size as usize * BYTES_PER_PIXEL
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if pixel.x >= self.domain_size || pixel.y >= self.domain_size {
            return None;
        }

        Some(pixel.y as usize * self.row_stride() + pixel.x as usize * BYTES_PER_PIXEL)
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        self.index_of(pixel).map(|index| Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                domain_size: self.domain_size,
            })?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}
