use crate::core::data::point::Point;

/// Per-pixel computation. Must depend only on `pixel` and `self`, so pixels can be
/// evaluated in any order and on any thread.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
