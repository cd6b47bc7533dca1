use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::Point;

/// Fills one row slice of the output buffer, polling `cancel` at the row start and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels after that.
fn fill_row<Alg, CMap, C>(
    y: u32,
    row: &mut [u8],
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<(), Cancelled>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
    C: CancelToken,
{
    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(Cancelled);
        }

        let value = algorithm.compute(Point { x: x as u32, y });
        let colour = colour_map.map(value);

        pixel[0] = colour.r;
        pixel[1] = colour.g;
        pixel[2] = colour.b;
    }

    Ok(())
}

/// Single-threaded reference renderer. Rows are produced top to bottom.
pub fn generate_pixel_buffer_serial<Alg, CMap>(
    domain_size: u32,
    algorithm: &Alg,
    colour_map: &CMap,
) -> PixelBuffer
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let mut pixel_buffer = PixelBuffer::new(domain_size);
    let row_stride = pixel_buffer.row_stride();

    if row_stride == 0 {
        return pixel_buffer;
    }

    for (y, row) in pixel_buffer.data_mut().chunks_mut(row_stride).enumerate() {
        if fill_row(y as u32, row, algorithm, colour_map, &NeverCancel).is_err() {
            unreachable!("NeverCancel token should never signal cancellation");
        }
    }

    pixel_buffer
}

/// Renders every pixel in parallel on rayon's pool.
///
/// For cancel-aware generation, use [`generate_pixel_buffer_cancelable`].
pub fn generate_pixel_buffer<Alg, CMap>(
    domain_size: u32,
    algorithm: &Alg,
    colour_map: &CMap,
) -> PixelBuffer
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    generate_pixel_buffer_cancelable(domain_size, algorithm, colour_map, &NeverCancel)
        .unwrap_or_else(|_| unreachable!("NeverCancel token should never signal cancellation"))
}

/// Renders every pixel in parallel, abandoning the pass once `cancel` fires.
///
/// The buffer is allocated once up front and split into rows; each rayon task owns one
/// row slice, so no locking is involved. Cancellation is polled per row (and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels on very wide rows), never per pixel.
///
/// Returns [`Cancelled`] if cancellation was requested, which callers should treat as
/// expected control flow rather than an error to display.
pub fn generate_pixel_buffer_cancelable<Alg, CMap, C>(
    domain_size: u32,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<PixelBuffer, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
    C: CancelToken,
{
    let mut pixel_buffer = PixelBuffer::new(domain_size);
    let row_stride = pixel_buffer.row_stride();

    if row_stride == 0 {
        return Ok(pixel_buffer);
    }

    pixel_buffer
        .data_mut()
        .par_chunks_mut(row_stride)
        .enumerate()
        .try_for_each(|(y, row)| fill_row(y as u32, row, algorithm, colour_map, cancel))?;

    Ok(pixel_buffer)
}
