use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Maps a pixel on the viewport's grid to the complex point it samples.
///
/// Pixel `(0, 0)` samples `(left, top)`; the last pixel on each axis samples one grid step
/// short of `left + side_length` / `top + side_length`. Points outside the grid extrapolate
/// linearly, so callers handling user input should check `Viewport::contains_pixel` first.
#[inline]
#[must_use]
pub fn map_pixel_to_complex(viewport: &Viewport, pixel: Point) -> Complex {
    let domain_size = viewport.domain_size() as f64;

    Complex {
        real: viewport.side_length() * (pixel.x as f64 / domain_size) + viewport.left(),
        imag: viewport.side_length() * (pixel.y as f64 / domain_size) + viewport.top(),
    }
}
