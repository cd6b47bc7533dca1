use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum RenderConfigError {
    #[error("bail-out must be greater than zero")]
    ZeroBailOut,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    bail_out: u32,
}

impl RenderConfig {
    pub fn new(bail_out: u32) -> Result<Self, RenderConfigError> {
        if bail_out == 0 {
            return Err(RenderConfigError::ZeroBailOut);
        }

        Ok(Self { bail_out })
    }

    /// Iteration cap. An evaluation that reaches it is treated as bounded.
    #[must_use]
    pub fn bail_out(&self) -> u32 {
        self.bail_out
    }
}
