use std::ops::Deref;

use crate::math::{Number, Point2, Vec2};

const MAX_BEZIER_CONTROL_POINTS: usize = 3;

/// Evaluates a polynomial bezier curve at `t` with de Casteljau's algorithm.
pub fn evaluate_bezier<N: Number>(points: &[Point2<N>], t: N) -> Point2<N> {
    assert!(!points.is_empty() && points.len() <= MAX_BEZIER_CONTROL_POINTS);

    let mut midpoints_buffer = [Vec2::<N>::ZERO; MAX_BEZIER_CONTROL_POINTS];
    for (midpoint, point) in midpoints_buffer.iter_mut().zip(points) {
        *midpoint = point.to_vec();
    }
    let mut midpoints = &mut midpoints_buffer[..points.len()];

    while midpoints.len() > 1 {
        let new_len = midpoints.len() - 1;
        for i in 0..new_len {
            midpoints[i] = midpoints[i] + (midpoints[i + 1] - midpoints[i]) * t;
        }
        midpoints = &mut midpoints[..new_len];
    }

    midpoints[0].to_point()
}

pub trait Bezier<N: Number> {
    fn points(&self) -> &[Point2<N>];
    fn sample(&self, t: N) -> Point2<N> {
        evaluate_bezier(self.points(), t)
    }
}

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier<N: Number>(pub [Point2<N>; 3]);

impl<N: Number> QuadraticBezier<N> {
    pub const fn new(points: [Point2<N>; 3]) -> Self {
        Self(points)
    }

    pub const fn into_points(self) -> [Point2<N>; 3] {
        self.0
    }
}

impl<N: Number> Deref for QuadraticBezier<N> {
    type Target = [Point2<N>; 3];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<N: Number> Bezier<N> for QuadraticBezier<N> {
    fn points(&self) -> &[Point2<N>] {
        &self.0
    }
}
