use std::f32::consts::FRAC_1_SQRT_2;

use pathway::{Conic, ConicConverter, Point2f, DEFAULT_QUADRATIC_COUNT, DEFAULT_TOLERANCE};

fn point(x: f32, y: f32) -> Point2f {
    Point2f::new(x, y)
}

fn test_conics() -> Vec<([Point2f; 3], f32)> {
    let quarter_circle = [point(100.0, 0.0), point(100.0, 100.0), point(0.0, 100.0)];
    let arch = [point(0.0, 0.0), point(10.0, 10.0), point(20.0, 0.0)];
    let skewed = [point(-40.0, 15.0), point(120.0, -60.0), point(3.5, 80.0)];

    vec![
        (quarter_circle, FRAC_1_SQRT_2),
        (quarter_circle, 0.3),
        (arch, 1.0),
        (arch, 5.0),
        (arch, 0.05),
        (skewed, 2.5),
        (skewed, 40.0),
        ([point(1.0, 1.0); 3], 3.0),
        ([point(0.0, 0.0), point(1.0, 0.0), point(10.0, 0.0)], 4.0),
    ]
}

const TOLERANCES: [f32; 7] = [10.0, 1.0, DEFAULT_TOLERANCE, 0.1, 0.01, 0.001, 0.0];

#[test]
fn ordinary_quadratic_is_passed_through() {
    let points = [point(0.0, 0.0), point(1.0, 1.0), point(2.0, 0.0)];
    let mut converter = ConicConverter::new();

    converter.to_quadratics(&points, 1.0, 0.25);

    assert_eq!(converter.quadratic_count(), 1);
    assert_eq!(converter.quadratics(), Some(&points[..]));
}

#[test]
fn eccentric_conic_with_tight_tolerance_is_split() {
    let points = [point(0.0, 0.0), point(10.0, 10.0), point(20.0, 0.0)];
    let mut converter = ConicConverter::new();

    converter.to_quadratics(&points, 5.0, 0.01);

    assert!(converter.quadratic_count() > 1);
    let quadratics = converter.quadratics().unwrap();
    assert_eq!(quadratics.first(), Some(&point(0.0, 0.0)));
    assert_eq!(quadratics.last(), Some(&point(20.0, 0.0)));
}

#[test]
fn endpoints_are_preserved_exactly() {
    let mut converter = ConicConverter::new();

    for (points, weight) in test_conics() {
        for tolerance in TOLERANCES {
            let result = converter.to_quadratics(&points, weight, tolerance);
            assert_eq!(result[0], points[0]);
            assert_eq!(result[result.len() - 1], points[2]);
        }
    }
}

#[test]
fn output_is_bounded() {
    let mut converter = ConicConverter::new();

    for (points, weight) in test_conics() {
        for tolerance in TOLERANCES {
            let len = converter.to_quadratics(&points, weight, tolerance).len();
            let count = converter.quadratic_count();

            assert!(count.is_power_of_two());
            assert!(count <= DEFAULT_QUADRATIC_COUNT);
            assert_eq!(len, 2 * count + 1);
            assert_eq!(converter.curves().len(), count);
        }
    }
}

fn split_recursively(conic: Conic, depth: u32, leaves: &mut Vec<Conic>) {
    if depth == 0 {
        leaves.push(conic);
        return;
    }

    let [left, right] = conic.split();
    split_recursively(left, depth - 1, leaves);
    split_recursively(right, depth - 1, leaves);
}

// None of these hit the y-monotonic clamping, so plain recursive splitting
// has to reproduce the output bit for bit.
fn unclamped_conics() -> [Conic; 4] {
    [
        Conic::new(point(0.0, 0.0), point(50.0, 10.0), point(100.0, 100.0), 3.0),
        Conic::new(point(100.0, 100.0), point(60.0, 95.0), point(0.0, 0.0), 0.4),
        Conic::new(point(-40.0, 15.0), point(120.0, -60.0), point(3.5, 80.0), 2.5),
        Conic::new(point(0.0, 0.0), point(80.0, 30.0), point(100.0, -20.0), 0.4),
    ]
}

#[test]
fn quadratics_match_recursive_split() {
    let mut dst = [Point2f::ZERO; 2 * DEFAULT_QUADRATIC_COUNT + 1];

    for conic in unclamped_conics() {
        for depth in [2, 3] {
            let mut leaves = Vec::new();
            split_recursively(conic, depth, &mut leaves);

            let written = conic.split_into_quadratics(&mut dst, leaves.len());
            assert_eq!(written, 2 * leaves.len() + 1);
            for (i, leaf) in leaves.iter().enumerate() {
                assert_eq!(
                    &dst[2 * i..2 * i + 3],
                    &leaf.points,
                    "{conic:?}: quadratic {i} of {}",
                    leaves.len()
                );
            }
        }
    }
}

#[test]
fn converter_chains_split_points() {
    let mut converter = ConicConverter::new();

    for conic in unclamped_conics() {
        let mut leaves = Vec::new();
        split_recursively(conic, 3, &mut leaves);

        converter.to_quadratics(&conic.points, conic.weight, 0.0);
        assert_eq!(converter.quadratic_count(), leaves.len());

        let curves: Vec<_> = converter.curves().collect();
        for (curve, leaf) in curves.iter().zip(&leaves) {
            assert_eq!(curve.into_points(), leaf.points);
        }
    }
}

#[test]
fn count_never_decreases_with_tolerance() {
    for (points, weight) in test_conics() {
        let conic = Conic::from_points(&points, weight);
        let counts = TOLERANCES.map(|tolerance| conic.compute_quadratic_count(tolerance));
        assert!(
            counts.is_sorted(),
            "{conic:?}: counts {counts:?} for tolerances {TOLERANCES:?}"
        );
    }
}

#[test]
fn weight_one_needs_one_quadratic() {
    let mut converter = ConicConverter::new();

    for (points, _) in test_conics() {
        for tolerance in TOLERANCES {
            assert_eq!(converter.to_quadratics(&points, 1.0, tolerance), &points);
            assert_eq!(converter.quadratic_count(), 1);
        }
    }
}

#[test]
fn weight_one_with_huge_coordinates_is_passed_through() {
    let huge = f32::MAX * 0.6;
    let points = [point(0.0, 0.0), point(huge, 0.0), point(0.0, 0.0)];
    let mut converter = ConicConverter::new();

    for tolerance in TOLERANCES {
        assert_eq!(converter.to_quadratics(&points, 1.0, tolerance), &points);
        assert_eq!(converter.quadratic_count(), 1);
    }
}

#[test]
fn approximation_stays_within_tolerance() {
    let mut converter = ConicConverter::new();

    for (points, weight) in test_conics() {
        let conic = Conic::from_points(&points, weight);
        for tolerance in [10.0, 1.0, DEFAULT_TOLERANCE] {
            converter.to_quadratics(&points, weight, tolerance);
            if converter.quadratic_count() == DEFAULT_QUADRATIC_COUNT {
                continue;
            }

            let curves: Vec<_> = converter.curves().collect();
            let deviation = test_util::max_deviation(|t| conic.evaluate(t), &curves, 256);
            assert!(
                deviation <= tolerance,
                "{conic:?} deviates by {deviation} with {} quadratics, tolerance is {tolerance}",
                curves.len()
            );
        }
    }
}

#[test]
fn quarter_circle_at_default_tolerance() {
    let points = [point(100.0, 0.0), point(100.0, 100.0), point(0.0, 100.0)];
    let conic = Conic::from_points(&points, FRAC_1_SQRT_2);
    let mut converter = ConicConverter::new();

    converter.to_quadratics_default(&points, FRAC_1_SQRT_2);
    assert_eq!(converter.quadratic_count(), 8);

    let curves: Vec<_> = converter.curves().collect();
    assert!(test_util::max_deviation(|t| conic.evaluate(t), &curves, 256) < 0.01);

    test_util::assert_point_eq!(curves[3][2], conic.evaluate(0.5), 1e-3);
    for curve in &curves {
        for &p in curve.iter().step_by(2) {
            assert!((p.to_vec().length() - 100.0).abs() < 1e-3, "{p:?} is off the circle");
        }
    }
}
