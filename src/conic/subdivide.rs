use util::math::Point2f;

use super::Conic;

/// Whether `b` lies in the closed range spanned by `a` and `c`.
fn is_between(a: f32, b: f32, c: f32) -> bool {
    (a - b) * (c - b) <= 0.0
}

/// Recursively halves `conic` `level` times, writing the control point and end
/// point of every resulting quadratic into `dst`.
///
/// Returns the number of points written, `2 << level`.
pub(super) fn subdivide(conic: &Conic, dst: &mut [Point2f], level: u32) -> usize {
    if level == 0 {
        dst[0] = conic.points[1];
        dst[1] = conic.points[2];
        return 2;
    }

    let mut halves = conic.split();
    if is_between(conic.points[0].y, conic.points[1].y, conic.points[2].y) {
        keep_monotonic_y(conic, &mut halves);
    }

    let [left, right] = &halves;
    let written = subdivide(left, dst, level - 1);
    written + subdivide(right, &mut dst[written..], level - 1)
}

/// Rounding in [`Conic::split`] can push the halves of a y-monotonic conic
/// slightly out of its y range, scan conversion needs them monotonic too.
fn keep_monotonic_y(conic: &Conic, halves: &mut [Conic; 2]) {
    let start_y = conic.points[0].y;
    let end_y = conic.points[2].y;
    let [left, right] = halves;

    let mid_y = left.points[2].y;
    if !is_between(start_y, mid_y, end_y) {
        let closer_y = if (mid_y - start_y).abs() < (mid_y - end_y).abs() {
            start_y
        } else {
            end_y
        };
        left.points[2].y = closer_y;
        right.points[0].y = closer_y;
    }

    if !is_between(start_y, left.points[1].y, left.points[2].y) {
        left.points[1].y = start_y;
    }
    if !is_between(right.points[0].y, right.points[1].y, end_y) {
        right.points[1].y = end_y;
    }
}
