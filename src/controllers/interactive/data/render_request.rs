use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;

/// Snapshot of everything one render pass needs. Immutable for the duration of the pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub config: RenderConfig,
}
