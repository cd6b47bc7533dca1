use thiserror::Error;

use crate::core::data::point::Point;
use crate::input::text_fields::Field;

/// One line of input to an explore session.
///
/// ```text
/// top -0.75        set a field (text is validated later, with fallback)
/// left -1.2
/// side 0.5
/// bailout 600
/// render           render the current view
/// zoom 412 120     double-click equivalent: zoom on a pixel, then render
/// show             print the current field values
/// reset            back to the full view
/// quit
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreCommand {
    Set { field: Field, text: String },
    Render,
    Zoom(Point),
    Show,
    Reset,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(&'static str),
    #[error("invalid pixel coordinate `{0}`")]
    InvalidCoordinate(String),
}

fn field_for_keyword(keyword: &str) -> Option<Field> {
    match keyword {
        "top" => Some(Field::Top),
        "left" => Some(Field::Left),
        "side" | "size" => Some(Field::SideLength),
        "bailout" | "bail-out" => Some(Field::BailOut),
        _ => None,
    }
}

fn parse_coordinate(text: &str) -> Result<u32, CommandParseError> {
    text.parse::<u32>()
        .map_err(|_| CommandParseError::InvalidCoordinate(text.to_string()))
}

fn no_arguments(command: &'static str, rest: &str, parsed: ExploreCommand) -> Result<ExploreCommand, CommandParseError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandParseError::UnexpectedArgument(command))
    }
}

impl ExploreCommand {
    /// Parses one input line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandParseError> {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };
        let keyword = keyword.to_ascii_lowercase();

        if let Some(field) = field_for_keyword(&keyword) {
            if rest.is_empty() {
                return Err(CommandParseError::MissingArgument {
                    command: field.display_name(),
                    expected: "a value",
                });
            }

            return Ok(Some(Self::Set {
                field,
                text: rest.to_string(),
            }));
        }

        let command = match keyword.as_str() {
            "render" | "generate" => no_arguments("render", rest, Self::Render)?,
            "show" => no_arguments("show", rest, Self::Show)?,
            "reset" => no_arguments("reset", rest, Self::Reset)?,
            "quit" | "exit" => no_arguments("quit", rest, Self::Quit)?,
            "zoom" => {
                let mut parts = rest.split_whitespace();
                let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
                    return Err(CommandParseError::MissingArgument {
                        command: "zoom",
                        expected: "two pixel coordinates",
                    });
                };

                Self::Zoom(Point {
                    x: parse_coordinate(x)?,
                    y: parse_coordinate(y)?,
                })
            }
            _ => return Err(CommandParseError::Unknown(keyword)),
        };

        Ok(Some(command))
    }
}
