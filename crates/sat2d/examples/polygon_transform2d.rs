extern crate nalgebra as na;

use na::{Point2, Vector2};
use sat2d::shape::{Polygon, ShapeKind};

fn main() {
    let mut rect = Polygon::try_new(
        ShapeKind::Rectangle,
        &[
            Point2::new(200.0, 200.0),
            Point2::new(400.0, 200.0),
            Point2::new(400.0, 400.0),
            Point2::new(200.0, 400.0),
        ],
    )
    .unwrap();
    let tri = Polygon::triangle(
        Point2::new(400.0, 400.0),
        Point2::new(600.0, 400.0),
        Point2::new(400.0, 600.0),
    );

    // The shapes share a corner.
    assert!(rect.intersects(&tri));

    rect.translate(&Vector2::new(-10.0, -10.0));
    assert!(!rect.intersects(&tri));
    println!("Separated along {:?}", rect.separating_axis(&tri));

    // A quarter turn around the center doesn't change a square.
    rect.rotate_about_center(90.0);
    assert_eq!(rect.angle(), 90.0);
    assert!(!rect.intersects(&tri));

    // Half a quarter turn back, then pushed towards the triangle.
    rect.rotate_about_center(-45.0);
    assert!(!rect.intersects(&tri));
    rect.translate(&Vector2::new(60.0, 60.0));
    assert!(rect.intersects(&tri));
    println!("Rectangle vertices: {:?}", rect.vertices());
}
