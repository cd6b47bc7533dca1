use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};
use thiserror::Error;

use crate::controllers::interactive::{
    InteractiveController, InteractiveControllerPresenterPort, RenderRequest,
};
use crate::core::data::point::Point;
use crate::core::data::render_config::RenderConfigError;
use crate::core::data::viewport::ViewportError;
use crate::input::commands::ExploreCommand;
use crate::input::ui_state::UiState;

#[derive(Debug, Error)]
pub enum ExploreError {
    #[error("invalid viewport: {0}")]
    Viewport(#[from] ViewportError),
    #[error("invalid render config: {0}")]
    RenderConfig(#[from] RenderConfigError),
    #[error("failed to write session output: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionFlow {
    Continue,
    Quit,
}

/// Text-driven stand-in for the explorer window: field edits, render requests and
/// double-click zooms arrive as [`ExploreCommand`]s, frames leave through the presenter.
pub struct ExploreSession<W: Write> {
    state: UiState,
    domain_size: u32,
    controller: InteractiveController,
    last_submitted_generation: u64,
    out: W,
}

impl<W: Write> ExploreSession<W> {
    pub fn new(
        domain_size: u32,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
        out: W,
    ) -> Result<Self, ExploreError> {
        let state = UiState::default();
        state.viewport(domain_size)?;

        Ok(Self {
            state,
            domain_size,
            controller: InteractiveController::new(presenter_port),
            last_submitted_generation: 0,
            out,
        })
    }

    #[must_use]
    pub fn state(&self) -> &UiState {
        &self.state
    }

    #[must_use]
    pub fn last_submitted_generation(&self) -> u64 {
        self.last_submitted_generation
    }

    pub fn handle(&mut self, command: ExploreCommand) -> Result<SessionFlow, ExploreError> {
        match command {
            ExploreCommand::Set { field, text } => {
                self.state.set_field(field, &text);
            }
            ExploreCommand::Render => {
                self.submit_render()?;
            }
            ExploreCommand::Zoom(click) => self.zoom(click)?,
            ExploreCommand::Show => {
                writeln!(self.out, "{}", self.state.fields())?;
            }
            ExploreCommand::Reset => {
                self.state.reset_view();
                self.submit_render()?;
            }
            ExploreCommand::Quit => return Ok(SessionFlow::Quit),
        }

        Ok(SessionFlow::Continue)
    }

    fn zoom(&mut self, click: Point) -> Result<(), ExploreError> {
        if let Err(err) = self.state.apply_zoom(click, self.domain_size) {
            warn!("zoom ignored: {err}");
            return Ok(());
        }

        writeln!(self.out, "{}", self.state.fields())?;
        self.submit_render()?;

        Ok(())
    }

    pub fn submit_render(&mut self) -> Result<u64, ExploreError> {
        let request = RenderRequest {
            viewport: self.state.viewport(self.domain_size)?,
            config: self.state.render_config()?,
        };

        let generation = self.controller.submit_request(Arc::new(request));
        self.last_submitted_generation = generation;
        info!("submitted render {generation}: {}", self.state.fields());

        Ok(generation)
    }

    /// Blocks until the newest submitted render has been presented, or `timeout` elapses.
    pub fn wait_for_idle(&self, timeout: Duration) -> bool {
        let start = Instant::now();

        while self.controller.last_completed_generation() < self.last_submitted_generation {
            if start.elapsed() >= timeout {
                return false;
            }
            thread::sleep(Duration::from_millis(10));
        }

        true
    }

    pub fn finish(mut self) {
        self.controller.shutdown();
    }
}
