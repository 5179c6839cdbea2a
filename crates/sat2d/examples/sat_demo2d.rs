extern crate nalgebra as na;

use macroquad::prelude::*;
use na::{Point2, Vector2};
use sat2d::math::Real;
use sat2d::shape::Polygon;

const MOVE_STEP: f32 = 1.0;
const ROTATION_STEP: f32 = 3.0;

#[macroquad::main("sat2d::query::intersection_test")]
async fn main() {
    /*
     * Initialize the shapes.
     */
    let mut triangle = Polygon::triangle(
        Point2::new(400.0, 400.0),
        Point2::new(600.0, 400.0),
        Point2::new(400.0, 600.0),
    );
    let mut rectangle = Polygon::rectangle(
        Point2::new(200.0, 200.0),
        Point2::new(400.0, 200.0),
        Point2::new(400.0, 400.0),
        Point2::new(200.0, 400.0),
    );

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        /*
         * Move the shapes.
         */
        let mut displacement = Vector2::zeros();
        if is_key_down(KeyCode::Left) {
            displacement.x -= MOVE_STEP;
        }
        if is_key_down(KeyCode::Right) {
            displacement.x += MOVE_STEP;
        }
        if is_key_down(KeyCode::Up) {
            displacement.y -= MOVE_STEP;
        }
        if is_key_down(KeyCode::Down) {
            displacement.y += MOVE_STEP;
        }
        triangle.translate(&displacement);

        if is_key_down(KeyCode::LeftShift) {
            triangle.rotate_about_center(ROTATION_STEP);
        }
        if is_key_down(KeyCode::RightShift) {
            rectangle.rotate_about_center(ROTATION_STEP);
        }

        /*
         * Render.
         */
        clear_background(BLACK);

        let rectangle_color = if rectangle.intersects(&triangle) {
            RED
        } else {
            GREEN
        };
        draw_polygon(&triangle, WHITE);
        draw_polygon(&rectangle, rectangle_color);

        draw_text(
            &format!(
                "triangle: {:.0}°, rectangle: {:.0}°",
                triangle.angle(),
                rectangle.angle()
            ),
            10.0,
            30.0,
            30.0,
            WHITE,
        );

        next_frame().await
    }
}

fn mquad_from_na(a: Point2<Real>) -> Vec2 {
    Vec2::new(a.x, a.y)
}

fn draw_polygon(polygon: &Polygon, color: Color) {
    let vertices = polygon.vertices();

    for i in 0..vertices.len() {
        let a = mquad_from_na(vertices[i]);
        let b = mquad_from_na(vertices[(i + 1) % vertices.len()]);
        draw_line(a.x, a.y, b.x, b.y, 2.0, color);
    }

    let center = mquad_from_na(polygon.center());
    draw_circle(center.x, center.y, 3.0, color);
}
