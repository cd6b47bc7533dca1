use std::path::PathBuf;

use log::{error, info};

use crate::controllers::interactive::{FrameData, InteractiveControllerPresenterPort};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::presenters::file::ppm::PpmFilePresenter;

/// Interactive frame sink that overwrites one PPM file with each completed frame.
pub struct PpmFrameWriter {
    filepath: PathBuf,
    presenter: PpmFilePresenter,
}

impl PpmFrameWriter {
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
            presenter: PpmFilePresenter::new(),
        }
    }
}

impl InteractiveControllerPresenterPort for PpmFrameWriter {
    fn present(&self, frame: FrameData) {
        match self.presenter.present(&frame.pixel_buffer, &self.filepath) {
            Ok(()) => info!(
                "frame {} ({:?}) saved to {}",
                frame.generation,
                frame.render_duration,
                self.filepath.display()
            ),
            Err(err) => error!(
                "failed to write frame {} to {}: {err}",
                frame.generation,
                self.filepath.display()
            ),
        }
    }
}
