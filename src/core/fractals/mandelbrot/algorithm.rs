use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::map_pixel_to_complex;

/// Escape radius of z ↦ z² + c. Once |z| > 2 the orbit diverges.
pub const MAX_DIST: f64 = 2.0;
pub const ESCAPE_RADIUS_SQUARED: f64 = MAX_DIST * MAX_DIST;

/// Counts iterations of z ↦ z² + c, starting from z = 0, until |z| exceeds [`MAX_DIST`].
///
/// Returns the escape iteration, or `bail_out` if the orbit is still bounded after
/// `bail_out` steps. A NaN magnitude counts as escaped.
#[inline]
#[must_use]
pub fn evaluate(c: Complex, bail_out: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut iterations = 0;

    loop {
        let magnitude_squared = z.magnitude_squared();
        if magnitude_squared > ESCAPE_RADIUS_SQUARED || magnitude_squared.is_nan() {
            return iterations;
        }

        if iterations >= bail_out {
            return bail_out;
        }

        z = z * z + c;
        iterations += 1;
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    bail_out: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    #[inline]
    fn compute(&self, pixel: Point) -> Self::Success {
        evaluate(map_pixel_to_complex(&self.viewport, pixel), self.bail_out)
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, config: RenderConfig) -> Self {
        Self {
            viewport,
            bail_out: config.bail_out(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn bail_out(&self) -> u32 {
        self.bail_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_inside_main_cardioid_reach_bail_out() {
        // |c|² <= 0.0625 lies well inside the main cardioid
        let samples = [
            Complex::new(0.0, 0.0),
            Complex::new(0.25, 0.0),
            Complex::new(-0.25, 0.0),
            Complex::new(0.0, 0.25),
            Complex::new(0.0, -0.25),
            Complex::new(0.17, 0.17),
            Complex::new(-0.1, 0.2),
        ];

        for c in samples {
            assert!(c.magnitude_squared() <= 0.0625);
            for bail_out in [1, 2, 10, 150, 1000] {
                assert_eq!(evaluate(c, bail_out), bail_out, "c = {:?}", c);
            }
        }
    }

    #[test]
    fn test_far_point_escapes_after_first_step() {
        // z0 = 0 never exceeds the radius, z1 = c = 3 does
        assert_eq!(evaluate(Complex::new(3.0, 0.0), 10), 1);
        assert_eq!(evaluate(Complex::new(-2.0, -2.0), 50), 1);
    }

    #[test]
    fn test_boundary_point_two_escapes_on_second_step() {
        // z1 = 2 sits exactly on the radius, z2 = 6 is past it
        assert_eq!(evaluate(Complex::new(2.0, 0.0), 10), 2);
    }

    #[test]
    fn test_minus_two_is_bounded() {
        // 0 -> -2 -> 2 -> 2 -> ... never strictly exceeds the radius
        assert_eq!(evaluate(Complex::new(-2.0, 0.0), 10), 10);
    }

    #[test]
    fn test_result_never_exceeds_bail_out() {
        for bail_out in 1..20 {
            for c in [Complex::new(-0.75, 0.1), Complex::new(0.3, 0.5), Complex::new(-1.0, 0.0)] {
                assert!(evaluate(c, bail_out) <= bail_out);
            }
        }
    }

    #[test]
    fn test_non_finite_input_terminates() {
        assert_eq!(evaluate(Complex::new(f64::NAN, 0.0), 100), 1);
        assert_eq!(evaluate(Complex::new(f64::INFINITY, 0.0), 100), 1);
    }

    #[test]
    fn test_algorithm_composes_mapper_and_evaluator() {
        let viewport = Viewport::new(-2.0, -2.0, 4.0, 4).unwrap();
        let config = RenderConfig::new(50).unwrap();
        let algorithm = MandelbrotAlgorithm::new(viewport, config);

        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), 1);
        assert_eq!(algorithm.compute(Point { x: 2, y: 2 }), 50);
        assert_eq!(algorithm.compute(Point { x: 1, y: 1 }), 3);
        assert_eq!(algorithm.bail_out(), 50);
        assert_eq!(algorithm.viewport(), viewport);
    }
}
