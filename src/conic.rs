//! Conics are rational quadratic beziers, the weight pulls the curve towards
//! (w > 1) or away from (w < 1) the middle control point.
//!
//! Conversion to ordinary quadratics uses repeated midpoint subdivision. Every
//! halving moves the weight towards 1 (`w' = sqrt((1 + w) / 2)`), and a conic
//! with a weight close to 1 is well approximated by its own control polygon.
//! The error of that approximation is bounded by `|(w - 1) / (4 (1 + w))| *
//! |p0 - 2 p1 + p2|`, and shrinks by about a factor of 4 per halving, which is
//! what lets the quadratic count be chosen up front.
use util::math::{Point2f, QuadraticBezier};

mod subdivide;

/// Maximum number of quadratics a single conic is converted into.
pub const DEFAULT_QUADRATIC_COUNT: usize = 8;

const MAX_SUBDIVISION_DEPTH: u32 = DEFAULT_QUADRATIC_COUNT.ilog2();

/// A rational quadratic bezier curve.
///
/// Operations on conics assume a positive weight and finite coordinates, they
/// don't validate either.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conic {
    pub points: [Point2f; 3],
    pub weight: f32,
}

impl Conic {
    pub const fn new(p0: Point2f, p1: Point2f, p2: Point2f, weight: f32) -> Self {
        Self {
            points: [p0, p1, p2],
            weight,
        }
    }

    pub const fn from_points(points: &[Point2f; 3], weight: f32) -> Self {
        Self {
            points: *points,
            weight,
        }
    }

    pub fn evaluate(&self, t: f32) -> Point2f {
        let [p0, p1, p2] = self.points;
        let mt = 1.0 - t;

        let b0 = mt * mt;
        let b1 = 2.0 * self.weight * t * mt;
        let b2 = t * t;

        ((p0.to_vec() * b0 + p1.to_vec() * b1 + p2.to_vec() * b2) / (b0 + b1 + b2)).to_point()
    }

    /// Splits the conic at `t = 0.5` into two conics tracing exactly the same curve.
    pub fn split(&self) -> [Conic; 2] {
        let [p0, p1, p2] = self.points;
        let scale = 1.0 / (1.0 + self.weight);
        let wp1 = p1.to_vec() * self.weight;

        let mid = ((p0.to_vec() + wp1 + wp1 + p2.to_vec()) * (scale * 0.5)).to_point();
        let weight = (0.5 + 0.5 * self.weight).sqrt();

        [
            Conic::new(p0, ((p0.to_vec() + wp1) * scale).to_point(), mid, weight),
            Conic::new(mid, ((wp1 + p2.to_vec()) * scale).to_point(), p2, weight),
        ]
    }

    /// Estimated distance between this conic and its control polygon
    /// interpreted as an ordinary quadratic.
    pub fn error_bound(&self) -> f32 {
        let [p0, p1, p2] = self.points;
        let a = self.weight - 1.0;
        // Huge coordinates can overflow `d` below, and `inf * 0` is NaN.
        if a == 0.0 {
            return 0.0;
        }

        let k = a / (4.0 * (2.0 + a));
        let d = p0.to_vec() - p1.to_vec() * 2.0 + p2.to_vec();
        (d * k).length()
    }

    /// Estimated error left after splitting into `count` quadratics.
    pub fn approximation_error(&self, count: usize) -> f32 {
        let count = count as f32;
        self.error_bound() / (count * count)
    }

    /// Returns the smallest power of two number of quadratics whose estimated
    /// error is within `tolerance`, clamped to [`DEFAULT_QUADRATIC_COUNT`].
    pub fn compute_quadratic_count(&self, tolerance: f32) -> usize {
        let mut error = self.error_bound();
        let mut depth = 0;
        while depth < MAX_SUBDIVISION_DEPTH && !(error <= tolerance) {
            error *= 0.25;
            depth += 1;
        }
        1 << depth
    }

    /// Splits the conic into `count` quadratics written into `dst` as `2 * count + 1`
    /// points, adjacent quadratics share their end and start point.
    ///
    /// Returns the number of points written.
    ///
    /// # Panics
    ///
    /// Panics if `count` is not a power of two or `dst` is too small.
    pub fn split_into_quadratics(&self, dst: &mut [Point2f], count: usize) -> usize {
        assert!(
            count.is_power_of_two(),
            "quadratic count must be a power of two, got {count}"
        );
        let point_count = 2 * count + 1;
        assert!(
            dst.len() >= point_count,
            "{count} quadratics need {point_count} points but only {} fit",
            dst.len()
        );

        let dst = &mut dst[..point_count];
        dst[0] = self.points[0];
        let written = subdivide::subdivide(self, &mut dst[1..], count.ilog2());
        debug_assert_eq!(written + 1, point_count);

        if !dst.iter().all(|point| point.is_finite()) {
            dst[1..point_count - 1].fill(self.points[1]);
        }

        point_count
    }

    pub fn as_quadratic(&self) -> QuadraticBezier<f32> {
        QuadraticBezier::new(self.points)
    }
}
