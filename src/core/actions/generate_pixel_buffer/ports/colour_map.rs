use crate::core::data::colour::Colour;

/// Turns one computed value into a pixel colour.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;

    fn display_name(&self) -> &str;
}
