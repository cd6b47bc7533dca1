use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::MAX_DOMAIN_SIZE;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport side length must be positive and finite, got {0}")]
    InvalidSideLength(f64),
    #[error("viewport domain size must be greater than zero")]
    ZeroDomainSize,
    #[error("viewport domain size {0} exceeds the maximum of {MAX_DOMAIN_SIZE}")]
    DomainSizeTooLarge(u32),
    #[error("viewport origin must be finite, got top: {top}, left: {left}")]
    NonFiniteOrigin { top: f64, left: f64 },
}

/// A square region of the complex plane mapped onto a `domain_size × domain_size` pixel grid.
///
/// The region spans `[left, left + side_length)` on the real axis and
/// `[top, top + side_length)` on the imaginary axis. Pixel rows grow downwards, so
/// `top` is the smallest imaginary value rendered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    top: f64,
    left: f64,
    side_length: f64,
    domain_size: u32,
}

impl Viewport {
    pub fn new(top: f64, left: f64, side_length: f64, domain_size: u32) -> Result<Self, ViewportError> {
        if !top.is_finite() || !left.is_finite() {
            return Err(ViewportError::NonFiniteOrigin { top, left });
        }

        if !side_length.is_finite() || side_length <= 0.0 {
            return Err(ViewportError::InvalidSideLength(side_length));
        }

        if domain_size == 0 {
            return Err(ViewportError::ZeroDomainSize);
        }

        if domain_size > MAX_DOMAIN_SIZE {
            return Err(ViewportError::DomainSizeTooLarge(domain_size));
        }

        Ok(Self {
            top,
            left,
            side_length,
            domain_size,
        })
    }

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
    pub fn domain_size(&self) -> u32 {
        self.domain_size
    }

    /// Width of one pixel in complex-plane units.
    #[must_use]
    pub fn pixel_step(&self) -> f64 {
        self.side_length / self.domain_size as f64
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        let half = self.side_length / 2.0;

        Complex {
            real: self.left + half,
            imag: self.top + half,
        }
    }

    #[must_use]
    pub fn contains_pixel(&self, x: u32, y: u32) -> bool {
        x < self.domain_size && y < self.domain_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(-2.0, -1.5, 4.0, 800).unwrap();

        assert_eq!(viewport.top(), -2.0);
        assert_eq!(viewport.left(), -1.5);
        assert_eq!(viewport.side_length(), 4.0);
        assert_eq!(viewport.domain_size(), 800);
    }

    #[test]
    fn test_side_length_must_be_positive() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 0.0, 10),
            Err(ViewportError::InvalidSideLength(0.0))
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, -1.0, 10),
            Err(ViewportError::InvalidSideLength(-1.0))
        );
        assert!(matches!(
            Viewport::new(0.0, 0.0, f64::INFINITY, 10),
            Err(ViewportError::InvalidSideLength(_))
        ));
        assert!(matches!(
            Viewport::new(0.0, 0.0, f64::NAN, 10),
            Err(ViewportError::InvalidSideLength(_))
        ));
    }

    #[test]
    fn test_domain_size_must_be_positive() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 1.0, 0),
            Err(ViewportError::ZeroDomainSize)
        );
    }

    #[test]
    fn test_domain_size_is_capped() {
        assert!(Viewport::new(0.0, 0.0, 1.0, MAX_DOMAIN_SIZE).is_ok());
        assert_eq!(
            Viewport::new(0.0, 0.0, 1.0, MAX_DOMAIN_SIZE + 1),
            Err(ViewportError::DomainSizeTooLarge(MAX_DOMAIN_SIZE + 1))
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, 1.0, u32::MAX),
            Err(ViewportError::DomainSizeTooLarge(u32::MAX))
        );
    }

    #[test]
    fn test_origin_must_be_finite() {
        assert!(matches!(
            Viewport::new(f64::NAN, 0.0, 1.0, 10),
            Err(ViewportError::NonFiniteOrigin { .. })
        ));
        assert!(matches!(
            Viewport::new(0.0, f64::NEG_INFINITY, 1.0, 10),
            Err(ViewportError::NonFiniteOrigin { .. })
        ));
    }

    #[test]
    fn test_pixel_step_and_centre() {
        let viewport = Viewport::new(-2.0, -2.0, 4.0, 400).unwrap();

        assert_eq!(viewport.pixel_step(), 0.01);
        assert_eq!(viewport.centre(), Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_contains_pixel() {
        let viewport = Viewport::new(0.0, 0.0, 1.0, 4).unwrap();

        assert!(viewport.contains_pixel(0, 0));
        assert!(viewport.contains_pixel(3, 3));
        assert!(!viewport.contains_pixel(4, 0));
        assert!(!viewport.contains_pixel(0, 4));
    }
}
