use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, generate_pixel_buffer_cancelable,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotLogGradient;

/// Renders the Mandelbrot set over `viewport` into a `domain_size × domain_size` buffer.
#[must_use]
pub fn render(viewport: Viewport, config: RenderConfig) -> PixelBuffer {
    let algorithm = MandelbrotAlgorithm::new(viewport, config);
    let colour_map = MandelbrotLogGradient::new(config.bail_out());

    generate_pixel_buffer(viewport.domain_size(), &algorithm, &colour_map)
}

pub fn render_cancelable<C: CancelToken>(
    viewport: Viewport,
    config: RenderConfig,
    cancel: &C,
) -> Result<PixelBuffer, Cancelled> {
    let algorithm = MandelbrotAlgorithm::new(viewport, config);
    let colour_map = MandelbrotLogGradient::new(config.bail_out());

    generate_pixel_buffer_cancelable(viewport.domain_size(), &algorithm, &colour_map, cancel)
}
