//! The four user-editable values as they arrive from the outside world: plain text.

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Top,
    Left,
    SideLength,
    BailOut,
}

impl Field {
    pub const ALL: &'static [Self] = &[Self::Top, Self::Left, Self::SideLength, Self::BailOut];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::SideLength => "side length",
            Self::BailOut => "bail-out",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFields {
    pub top: String,
    pub left: String,
    pub side_length: String,
    pub bail_out: String,
}

impl TextFields {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Top => &self.top,
            Field::Left => &self.left,
            Field::SideLength => &self.side_length,
            Field::BailOut => &self.bail_out,
        }
    }
}

impl fmt::Display for TextFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "top: {}, left: {}, side length: {}, bail-out: {}",
            self.top, self.left, self.side_length, self.bail_out
        )
    }
}

pub(crate) fn parse_coordinate(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

pub(crate) fn parse_side_length(text: &str) -> Option<f64> {
    parse_coordinate(text).filter(|value| *value > 0.0)
}

pub(crate) fn parse_bail_out(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|value| *value >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("-2"), Some(-2.0));
        assert_eq!(parse_coordinate("  0.125 "), Some(0.125));
        assert_eq!(parse_coordinate("1e-3"), Some(0.001));
        assert_eq!(parse_coordinate("abc"), None);
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("inf"), None);
        assert_eq!(parse_coordinate("NaN"), None);
    }

    #[test]
    fn test_parse_side_length_must_be_positive() {
        assert_eq!(parse_side_length("4"), Some(4.0));
        assert_eq!(parse_side_length("0"), None);
        assert_eq!(parse_side_length("-1"), None);
    }

    #[test]
    fn test_parse_bail_out() {
        assert_eq!(parse_bail_out("150"), Some(150));
        assert_eq!(parse_bail_out("1"), Some(1));
        assert_eq!(parse_bail_out("0"), None);
        assert_eq!(parse_bail_out("-5"), None);
        assert_eq!(parse_bail_out("12.5"), None);
    }

    #[test]
    fn test_get_and_display() {
        let fields = TextFields {
            top: "-2".into(),
            left: "-1.5".into(),
            side_length: "3".into(),
            bail_out: "150".into(),
        };

        assert_eq!(fields.get(Field::Left), "-1.5");
        assert_eq!(fields.get(Field::BailOut), "150");
        assert_eq!(
            fields.to_string(),
            "top: -2, left: -1.5, side length: 3, bail-out: 150"
        );
    }
}
