use crate::core::data::point::Point;
use crate::core::data::render_config::{RenderConfig, RenderConfigError};
use crate::core::data::viewport::{Viewport, ViewportError};
use thiserror::Error;

/// Magnification applied by one zoom step.
pub const ZOOM_FACTOR: f64 = 16.0;

/// Extra iterations granted per zoom step.
pub const BAIL_OUT_INCREMENT: u32 = 300;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZoomError {
    #[error("click at x:{}, y:{} is outside the {domain_size}x{domain_size} render area", .click.x, .click.y)]
    ClickOutsideViewport { click: Point, domain_size: u32 },
    #[error("zoomed viewport is invalid: {0}")]
    Viewport(#[from] ViewportError),
    #[error("zoomed render config is invalid: {0}")]
    RenderConfig(#[from] RenderConfigError),
}

/// Recentres the view on the clicked pixel and narrows it by [`ZOOM_FACTOR`].
///
/// The new centre is the complex point that was under the click. The bail-out grows by
/// [`BAIL_OUT_INCREMENT`], saturating at `u32::MAX`. Fails once the side length underflows
/// to zero.
pub fn zoom(
    viewport: &Viewport,
    config: &RenderConfig,
    click: Point,
) -> Result<(Viewport, RenderConfig), ZoomError> {
    if !viewport.contains_pixel(click.x, click.y) {
        return Err(ZoomError::ClickOutsideViewport {
            click,
            domain_size: viewport.domain_size(),
        });
    }

    let ratio = viewport.side_length() / viewport.domain_size() as f64;
    let centre_real = viewport.left() + ratio * click.x as f64;
    let centre_imag = viewport.top() + ratio * click.y as f64;

    let side_length = viewport.side_length() / ZOOM_FACTOR;
    let left = centre_real - side_length / 2.0;
    let top = centre_imag - side_length / 2.0;

    let zoomed = Viewport::new(top, left, side_length, viewport.domain_size())?;
    let zoomed_config = RenderConfig::new(config.bail_out().saturating_add(BAIL_OUT_INCREMENT))?;

    Ok((zoomed, zoomed_config))
}
