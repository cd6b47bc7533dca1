mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::cli::CliController;
pub use controllers::explore::{ExploreError, ExploreSession, SessionFlow};
pub use controllers::interactive::{
    FrameData, InteractiveController, InteractiveControllerPresenterPort, RenderRequest,
};
pub use controllers::ports::file_presenter::FilePresenterPort;

pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, generate_pixel_buffer_cancelable, generate_pixel_buffer_serial,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render::{render, render_cancelable};
pub use crate::core::actions::zoom::{BAIL_OUT_INCREMENT, ZOOM_FACTOR, ZoomError, zoom};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{MAX_DOMAIN_SIZE, PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_config::{RenderConfig, RenderConfigError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, evaluate};
pub use crate::core::fractals::mandelbrot::colour_map::{MandelbrotLogGradient, map_iteration_to_colour};
pub use crate::core::util::pixel_to_complex_coords::map_pixel_to_complex;

pub use input::commands::{CommandParseError, ExploreCommand};
pub use input::text_fields::{Field, TextFields};
pub use input::ui_state::UiState;

pub use presenters::file::frame_writer::PpmFrameWriter;
pub use presenters::file::ppm::{PpmFilePresenter, encode_ppm};
