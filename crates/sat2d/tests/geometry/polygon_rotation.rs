use approx::assert_relative_eq;
use nalgebra::Point2;
use sat2d::shape::Polygon;

fn triangle() -> Polygon {
    Polygon::triangle(
        Point2::new(400.0, 400.0),
        Point2::new(600.0, 400.0),
        Point2::new(400.0, 600.0),
    )
}

fn rectangle() -> Polygon {
    Polygon::rectangle(
        Point2::new(200.0, 200.0),
        Point2::new(400.0, 200.0),
        Point2::new(400.0, 400.0),
        Point2::new(200.0, 400.0),
    )
}

fn assert_angle_is_zero(angle: f32) {
    assert!((0.0..360.0).contains(&angle), "angle out of range: {angle}");
    assert!(angle.min(360.0 - angle) < 1.0e-3, "angle not zero: {angle}");
}

#[test]
fn full_turn_in_steps_restores_vertices() {
    for steps in [1, 4, 7, 120, 360] {
        for original in [triangle(), rectangle()] {
            let mut poly = original.clone();
            let step = 360.0 / steps as f32;

            for _ in 0..steps {
                poly.rotate_about_center(step);
            }

            for (pt, expected) in poly.vertices().iter().zip(original.vertices()) {
                assert_relative_eq!(*pt, *expected, epsilon = 5.0e-2);
            }
            assert_angle_is_zero(poly.angle());
        }
    }
}

#[test]
fn full_turn_about_external_pivot() {
    let original = triangle();
    let mut poly = original.clone();
    let pivot = Point2::new(-250.0, 80.0);

    for _ in 0..120 {
        poly.rotate(-3.0, &pivot);
    }

    for (pt, expected) in poly.vertices().iter().zip(original.vertices()) {
        assert_relative_eq!(*pt, *expected, epsilon = 5.0e-2);
    }
    assert_angle_is_zero(poly.angle());
}

#[test]
fn rotation_preserves_edge_lengths() {
    let original = rectangle();
    let mut poly = original.clone();
    poly.rotate_about_center(33.0);

    let edge_len = |p: &Polygon, i: usize| {
        let pts = p.vertices();
        (pts[(i + 1) % pts.len()] - pts[i]).norm()
    };

    for i in 0..4 {
        assert_relative_eq!(edge_len(&poly, i), edge_len(&original, i), epsilon = 1.0e-2);
    }
}

#[test]
fn positive_angle_turns_clockwise_on_screen() {
    // On a y-down screen, a clockwise quarter turn sends "right" to "down".
    let mut poly = rectangle();
    poly.rotate(90.0, &Point2::new(300.0, 300.0));

    assert_relative_eq!(poly.vertices()[0], Point2::new(400.0, 200.0), epsilon = 1.0e-3);
    assert_relative_eq!(poly.vertices()[1], Point2::new(400.0, 400.0), epsilon = 1.0e-3);
    assert_eq!(poly.angle(), 90.0);
}
