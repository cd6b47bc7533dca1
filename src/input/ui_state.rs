use log::warn;

use crate::core::actions::zoom::{ZoomError, zoom};
use crate::core::data::point::Point;
use crate::core::data::render_config::{RenderConfig, RenderConfigError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::input::text_fields::{
    Field, TextFields, parse_bail_out, parse_coordinate, parse_side_length,
};

pub const DEFAULT_TOP: f64 = -2.0;
pub const DEFAULT_LEFT: f64 = -2.0;
pub const DEFAULT_SIDE_LENGTH: f64 = 4.0;
pub const DEFAULT_BAIL_OUT: u32 = 150;

/// Last known-good view values.
///
/// Text that fails to parse, or parses to a value the core would reject, leaves the
/// previous value in place, so the core is only ever handed valid input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UiState {
    top: f64,
    left: f64,
    side_length: f64,
    bail_out: u32,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            left: DEFAULT_LEFT,
            side_length: DEFAULT_SIDE_LENGTH,
            bail_out: DEFAULT_BAIL_OUT,
        }
    }
}

impl UiState {
    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    #[must_use]
    pub fn bail_out(&self) -> u32 {
        self.bail_out
    }

    /// Applies one field's text. Returns `false` (keeping the old value) if it was rejected.
    pub fn set_field(&mut self, field: Field, text: &str) -> bool {
        let accepted = match field {
            Field::Top => parse_coordinate(text).map(|value| self.top = value),
            Field::Left => parse_coordinate(text).map(|value| self.left = value),
            Field::SideLength => parse_side_length(text).map(|value| self.side_length = value),
            Field::BailOut => parse_bail_out(text).map(|value| self.bail_out = value),
        }
        .is_some();

        if !accepted {
            warn!("ignoring invalid {field} `{text}`, keeping {}", self.field_text(field));
        }

        accepted
    }

    /// Applies all four fields independently, returning the ones that were rejected.
    pub fn apply_fields(&mut self, fields: &TextFields) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|&field| !self.set_field(field, fields.get(field)))
            .collect()
    }

    fn field_text(&self, field: Field) -> String {
        match field {
            Field::Top => self.top.to_string(),
            Field::Left => self.left.to_string(),
            Field::SideLength => self.side_length.to_string(),
            Field::BailOut => self.bail_out.to_string(),
        }
    }

    /// Current values as text, for reflecting back into the editable fields.
    #[must_use]
    pub fn fields(&self) -> TextFields {
        TextFields {
            top: self.field_text(Field::Top),
            left: self.field_text(Field::Left),
            side_length: self.field_text(Field::SideLength),
            bail_out: self.field_text(Field::BailOut),
        }
    }

    pub fn viewport(&self, domain_size: u32) -> Result<Viewport, ViewportError> {
        Viewport::new(self.top, self.left, self.side_length, domain_size)
    }

    pub fn render_config(&self) -> Result<RenderConfig, RenderConfigError> {
        RenderConfig::new(self.bail_out)
    }

    /// Zooms on a clicked pixel and stores the resulting view.
    pub fn apply_zoom(&mut self, click: Point, domain_size: u32) -> Result<(), ZoomError> {
        let viewport = self.viewport(domain_size)?;
        let config = self.render_config()?;
        let (zoomed, zoomed_config) = zoom(&viewport, &config, click)?;

        self.top = zoomed.top();
        self.left = zoomed.left();
        self.side_length = zoomed.side_length();
        self.bail_out = zoomed_config.bail_out();

        Ok(())
    }

    pub fn reset_view(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(top: &str, left: &str, side_length: &str, bail_out: &str) -> TextFields {
        TextFields {
            top: top.into(),
            left: left.into(),
            side_length: side_length.into(),
            bail_out: bail_out.into(),
        }
    }

    #[test]
    fn test_default_matches_full_view() {
        let state = UiState::default();

        assert_eq!(state.fields(), fields("-2", "-2", "4", "150"));
    }

    #[test]
    fn test_apply_valid_fields() {
        let mut state = UiState::default();

        let rejected = state.apply_fields(&fields("-1.25", "-0.5", "0.75", "400"));

        assert!(rejected.is_empty());
        assert_eq!(state.top(), -1.25);
        assert_eq!(state.left(), -0.5);
        assert_eq!(state.side_length(), 0.75);
        assert_eq!(state.bail_out(), 400);
    }

    #[test]
    fn test_invalid_fields_keep_previous_values() {
        let mut state = UiState::default();
        state.apply_fields(&fields("-1", "-1", "2", "200"));

        let rejected = state.apply_fields(&fields("oops", "0.5", "-3", "0"));

        assert_eq!(rejected, vec![Field::Top, Field::SideLength, Field::BailOut]);
        assert_eq!(state.fields(), fields("-1", "0.5", "2", "200"));
    }

    #[test]
    fn test_state_always_builds_valid_core_inputs() {
        let mut state = UiState::default();
        state.apply_fields(&fields("", "NaN", "0", "-1"));

        assert!(state.viewport(10).is_ok());
        assert!(state.render_config().is_ok());
    }

    #[test]
    fn test_viewport_uses_domain_size() {
        let state = UiState::default();

        assert_eq!(state.viewport(64).unwrap().domain_size(), 64);
        assert_eq!(state.viewport(0), Err(ViewportError::ZeroDomainSize));
    }

    #[test]
    fn test_apply_zoom_updates_fields() {
        let mut state = UiState::default();

        state.apply_zoom(Point { x: 2, y: 2 }, 4).unwrap();

        assert_eq!(state.fields(), fields("-0.125", "-0.125", "0.25", "450"));
    }

    #[test]
    fn test_apply_zoom_outside_render_area_keeps_state() {
        let mut state = UiState::default();

        let result = state.apply_zoom(Point { x: 10, y: 0 }, 4);

        assert!(matches!(result, Err(ZoomError::ClickOutsideViewport { .. })));
        assert_eq!(state, UiState::default());
    }

    #[test]
    fn test_reset_view() {
        let mut state = UiState::default();
        state.apply_zoom(Point { x: 0, y: 0 }, 4).unwrap();

        state.reset_view();

        assert_eq!(state, UiState::default());
    }
}
