use util::math::{Bezier as _, Point2f, QuadraticBezier};

#[doc(hidden)]
pub mod __private {
    pub use util::math::Point2f;
}

/// Asserts that two points are within `eps` of each other (default `1e-4`).
#[macro_export]
macro_rules! assert_point_eq {
    ($left: expr, $right: expr $(,)?) => {
        $crate::assert_point_eq!($left, $right, 1e-4)
    };
    ($left: expr, $right: expr, $eps: expr $(,)?) => {{
        let (left, right): ($crate::__private::Point2f, $crate::__private::Point2f) =
            ($left, $right);
        let distance = left.distance(right);
        assert!(
            distance <= $eps,
            "points differ by {distance}\n  left: {left:?}\n right: {right:?}"
        );
    }};
}

pub fn distance_to_segment(point: Point2f, start: Point2f, end: Point2f) -> f32 {
    let segment = end - start;
    let length_sq = segment.length_sq();
    if length_sq == 0.0 {
        return point.distance(start);
    }

    let t = ((point - start).dot(segment) / length_sq).clamp(0.0, 1.0);
    point.distance(start + segment * t)
}

/// Flattens each quadratic into `samples` line segments.
pub fn flatten_quadratics(quadratics: &[QuadraticBezier<f32>], samples: usize) -> Vec<Point2f> {
    let mut result = Vec::with_capacity(quadratics.len() * samples + 1);
    if let Some(first) = quadratics.first() {
        result.push(first[0]);
    }

    for quadratic in quadratics {
        for i in 1..=samples {
            result.push(quadratic.sample(i as f32 / samples as f32));
        }
    }

    result
}

/// Samples `curve` on `samples + 1` evenly spaced parameters and returns the
/// largest distance from any sample to the (finely flattened) quadratics.
pub fn max_deviation(
    curve: impl Fn(f32) -> Point2f,
    quadratics: &[QuadraticBezier<f32>],
    samples: usize,
) -> f32 {
    let polyline = flatten_quadratics(quadratics, 64);

    (0..=samples)
        .map(|i| curve(i as f32 / samples as f32))
        .map(|point| {
            polyline
                .windows(2)
                .map(|segment| distance_to_segment(point, segment[0], segment[1]))
                .fold(f32::INFINITY, f32::min)
        })
        .fold(0.0, f32::max)
}

/// Whether the y coordinates of `points` never change direction.
pub fn is_monotonic_y(points: &[Point2f]) -> bool {
    let non_decreasing = points.windows(2).all(|w| w[0].y <= w[1].y);
    let non_increasing = points.windows(2).all(|w| w[0].y >= w[1].y);
    non_decreasing || non_increasing
}
