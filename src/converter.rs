use log::{trace, warning, AsLogger};
use util::math::{Point2, Point2f, QuadraticBezier};

use crate::{
    conic::{Conic, DEFAULT_QUADRATIC_COUNT},
    ConversionError,
};

/// Tolerance used by [`ConicConverter::to_quadratics_default`], a quarter of a
/// unit which is a reasonable error budget for device pixel coordinates.
pub const DEFAULT_TOLERANCE: f32 = 0.25;

const STORAGE_LEN: usize = 1 + 2 * DEFAULT_QUADRATIC_COUNT;

/// Converts conics into chains of quadratics stored in a fixed-size inline buffer.
///
/// A converter can be reused, each conversion overwrites the previous result.
/// The quadratics are stored as `2 * quadratic_count() + 1` points where point
/// `2i` starts quadratic `i`, point `2i + 1` is its control point and point
/// `2i + 2` ends it (and starts quadratic `i + 1`).
#[derive(Debug, Clone)]
pub struct ConicConverter {
    quadratic_count: usize,
    storage: [Point2f; STORAGE_LEN],
}

impl ConicConverter {
    pub const fn new() -> Self {
        Self {
            quadratic_count: 0,
            storage: [Point2::ZERO; STORAGE_LEN],
        }
    }

    /// Converts the conic given by `points` and `weight` into quadratics that
    /// deviate from it by at most `tolerance`, or as close as
    /// [`DEFAULT_QUADRATIC_COUNT`] quadratics get.
    ///
    /// The weight must be positive and the coordinates finite, use
    /// [`Self::try_to_quadratics`] for input that wasn't validated.
    pub fn to_quadratics(
        &mut self,
        points: &[Point2f; 3],
        weight: f32,
        tolerance: f32,
    ) -> &[Point2f] {
        debug_assert!(weight > 0.0, "conic weight must be positive, got {weight}");

        let conic = Conic::from_points(points, weight);
        let count = conic.compute_quadratic_count(tolerance);
        self.store(&conic, count)
    }

    pub fn to_quadratics_default(&mut self, points: &[Point2f; 3], weight: f32) -> &[Point2f] {
        self.to_quadratics(points, weight, DEFAULT_TOLERANCE)
    }

    /// Like [`Self::to_quadratics`] but validates its input first.
    ///
    /// On error the result of the previous conversion is left untouched.
    pub fn try_to_quadratics(
        &mut self,
        logger: &impl AsLogger,
        points: &[Point2f; 3],
        weight: f32,
        tolerance: f32,
    ) -> Result<&[Point2f], ConversionError> {
        if let Some((index, &point)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(ConversionError::NonFinitePoint { index, point });
        }
        if !(weight > 0.0 && weight.is_finite()) {
            return Err(ConversionError::InvalidWeight(weight));
        }
        if !(tolerance >= 0.0) {
            return Err(ConversionError::InvalidTolerance(tolerance));
        }

        let conic = Conic::from_points(points, weight);
        let count = conic.compute_quadratic_count(tolerance);
        let error = conic.approximation_error(count);
        if error > tolerance {
            warning!(
                logger,
                "Conic with weight {weight} needs more than {DEFAULT_QUADRATIC_COUNT} quadratics \
                 to stay within {tolerance}, estimated error is {error}"
            );
        }
        trace!(logger, "Converting conic with weight {weight} into {count} quadratics");

        Ok(self.store(&conic, count))
    }

    fn store(&mut self, conic: &Conic, count: usize) -> &[Point2f] {
        let written = conic.split_into_quadratics(&mut self.storage, count);
        self.quadratic_count = count;
        &self.storage[..written]
    }

    /// Number of quadratics produced by the last conversion, zero before the first one.
    pub fn quadratic_count(&self) -> usize {
        self.quadratic_count
    }

    /// Points produced by the last conversion, `None` before the first one.
    pub fn quadratics(&self) -> Option<&[Point2f]> {
        (self.quadratic_count > 0).then(|| &self.storage[..self.point_count()])
    }

    pub fn curves(&self) -> impl ExactSizeIterator<Item = QuadraticBezier<f32>> + use<'_> {
        self.storage[..self.point_count()]
            .windows(3)
            .step_by(2)
            .map(|points| QuadraticBezier::new([points[0], points[1], points[2]]))
    }

    fn point_count(&self) -> usize {
        match self.quadratic_count {
            0 => 0,
            count => 2 * count + 1,
        }
    }
}

impl Default for ConicConverter {
    fn default() -> Self {
        Self::new()
    }
}
