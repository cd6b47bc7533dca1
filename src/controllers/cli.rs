use std::error::Error;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render::render;
use crate::core::actions::zoom::ZoomError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::input::ui_state::UiState;

/// One-shot rendering: apply zooms, render once, write the result.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    state: UiState,
    domain_size: u32,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P, state: UiState, domain_size: u32) -> Self {
        Self {
            presenter,
            state,
            domain_size,
            buffer: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &UiState {
        &self.state
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn zoom(&mut self, click: Point) -> Result<(), ZoomError> {
        self.state.apply_zoom(click, self.domain_size)?;
        info!("zoomed on ({}, {}): {}", click.x, click.y, self.state.fields());

        Ok(())
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn Error>> {
        let viewport = self.state.viewport(self.domain_size)?;
        let config = self.state.render_config()?;

        info!("rendering Mandelbrot set");
        info!("image size: {0}x{0}", self.domain_size);
        info!("view: {}", self.state.fields());

        let start = Instant::now();
        self.buffer = Some(render(viewport, config));

        info!("duration: {:?}", start.elapsed());

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, &filepath)?;
            info!("saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}
