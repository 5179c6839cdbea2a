use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};
use sat2d::shape::{Polygon, ShapeKind};

#[test]
fn translate_then_inverse_is_exact_for_integers() {
    let original = Polygon::triangle(
        Point2::new(400.0, 400.0),
        Point2::new(600.0, 400.0),
        Point2::new(400.0, 600.0),
    );
    let mut poly = original.clone();
    let v = Vector2::new(-37.0, 112.0);

    poly.translate(&v);
    assert_ne!(poly, original);
    poly.translate(&-v);
    assert_eq!(poly, original);
}

#[test]
fn translate_then_inverse_within_tolerance() {
    let original = Polygon::rectangle(
        Point2::new(200.0, 200.0),
        Point2::new(400.0, 200.0),
        Point2::new(400.0, 400.0),
        Point2::new(200.0, 400.0),
    );
    let mut poly = original.clone();
    let v = Vector2::new(0.1, -13.37);

    for _ in 0..100 {
        poly.translate(&v);
    }
    for _ in 0..100 {
        poly.translate(&-v);
    }

    for (pt, expected) in poly.vertices().iter().zip(original.vertices()) {
        assert_relative_eq!(*pt, *expected, epsilon = 1.0e-2);
    }
    assert_eq!(poly.angle(), 0.0);
}

#[test]
fn arrow_key_moves() {
    // One pixel per frame, the way an input loop would drive a shape.
    let mut poly = Polygon::try_new(
        ShapeKind::Triangle,
        &[
            Point2::new(400.0, 400.0),
            Point2::new(600.0, 400.0),
            Point2::new(400.0, 600.0),
        ],
    )
    .unwrap();

    for dir in [
        Vector2::new(-1.0, 0.0),
        Vector2::new(-1.0, 0.0),
        Vector2::new(0.0, -1.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(0.0, 1.0),
        Vector2::new(0.0, 1.0),
    ] {
        poly.translate(&dir);
    }

    assert_eq!(poly.vertices()[0], Point2::new(399.0, 401.0));
    assert_relative_eq!(
        poly.center(),
        Point2::new(1397.0 / 3.0, 1403.0 / 3.0),
        epsilon = 1.0e-3
    );
}
