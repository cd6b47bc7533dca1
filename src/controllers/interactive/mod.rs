//! Background rendering for interactive exploration.
//!
//! The presentation layer submits [`RenderRequest`]s and receives finished frames through
//! the [`InteractiveControllerPresenterPort`]. Only the newest request matters: submitting
//! a new one cancels whatever pass is still running.

mod controller;
pub mod data;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use ports::presenter::InteractiveControllerPresenterPort;
