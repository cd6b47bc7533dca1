use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Colour of points that did not escape within the bail-out.
pub const IN_SET_COLOUR: Colour = Colour::BLACK;

/// Maps an escape count to a blue-to-yellow colour along a log10 curve.
///
/// `s = n / bail_out`, `t = round(log10(10s + 1) * 255)` clamped to `0..=255`, giving
/// `(t, t, 255 - t)`. Counts at or above `bail_out` are in the set and map to black.
#[inline]
#[must_use]
pub fn map_iteration_to_colour(iterations: u32, bail_out: u32) -> Colour {
    if iterations >= bail_out {
        return IN_SET_COLOUR;
    }

    let s = iterations as f64 / bail_out as f64;
    let t = ((10.0 * s + 1.0).log10() * 255.0).round().clamp(0.0, 255.0) as u8;

    Colour {
        r: t,
        g: t,
        b: 255 - t,
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotLogGradient {
    bail_out: u32,
}

impl ColourMap<u32> for MandelbrotLogGradient {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        map_iteration_to_colour(iterations, self.bail_out)
    }

    fn display_name(&self) -> &str {
        "Logarithmic blue-yellow gradient"
    }
}

impl MandelbrotLogGradient {
    #[must_use]
    pub fn new(bail_out: u32) -> Self {
        Self { bail_out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_black_at_bail_out() {
        for bail_out in [1, 2, 50, 150, 10_000] {
            assert_eq!(map_iteration_to_colour(bail_out, bail_out), Colour::BLACK);
        }
    }

    #[test]
    fn test_map_returns_blue_at_zero_iterations() {
        assert_eq!(map_iteration_to_colour(0, 100), Colour { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_map_known_values() {
        assert_eq!(map_iteration_to_colour(1, 100), Colour { r: 11, g: 11, b: 244 });
        assert_eq!(map_iteration_to_colour(5, 100), Colour { r: 45, g: 45, b: 210 });
        assert_eq!(map_iteration_to_colour(25, 100), Colour { r: 139, g: 139, b: 116 });
        assert_eq!(map_iteration_to_colour(49, 100), Colour { r: 197, g: 197, b: 58 });
    }

    #[test]
    fn test_map_clamps_near_bail_out() {
        // log10(10.9) * 255 is above 255
        assert_eq!(map_iteration_to_colour(99, 100), Colour { r: 255, g: 255, b: 0 });
    }

    #[test]
    fn test_map_is_monotonic_in_red_and_blue() {
        for bail_out in [2, 7, 50, 150, 450] {
            let mut previous = map_iteration_to_colour(0, bail_out);

            for n in 1..bail_out {
                let colour = map_iteration_to_colour(n, bail_out);
                assert!(colour.r >= previous.r, "red decreased at n = {n}, bail_out = {bail_out}");
                assert!(colour.b <= previous.b, "blue increased at n = {n}, bail_out = {bail_out}");
                assert_eq!(colour.r, colour.g);
                previous = colour;
            }
        }
    }

    #[test]
    fn test_gradient_delegates_to_map() {
        let gradient = MandelbrotLogGradient::new(50);

        assert_eq!(gradient.map(50), Colour::BLACK);
        assert_eq!(gradient.map(1), map_iteration_to_colour(1, 50));
        assert_eq!(gradient.display_name(), "Logarithmic blue-yellow gradient");
    }
}
