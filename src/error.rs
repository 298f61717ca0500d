use thiserror::Error;
use util::math::Point2f;

/// Precondition violations reported by
/// [`ConicConverter::try_to_quadratics`](crate::ConicConverter::try_to_quadratics).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConversionError {
    #[error("Control point {index} is not finite: {point:?}")]
    NonFinitePoint { index: usize, point: Point2f },
    #[error("Conic weight must be positive and finite, got {0}")]
    InvalidWeight(f32),
    #[error("Tolerance must be non-negative, got {0}")]
    InvalidTolerance(f32),
}
