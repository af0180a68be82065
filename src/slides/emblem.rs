//! Small vector emblems drawn with raylib primitives. Decorative only.

use raylib::prelude::*;

use crate::deck::Emblem;

/// Draws `emblem` centered on `c`, fitting a box of `size` pixels.
pub fn draw(d: &mut RaylibDrawHandle, emblem: Emblem, c: Vector2, size: f32, color: Color) {
    let r = size / 2.0;
    match emblem {
        Emblem::Globe => {
            d.draw_circle_lines(c.x as i32, c.y as i32, r, color);
            // Equator and a meridian.
            d.draw_line_ex(
                Vector2::new(c.x - r, c.y),
                Vector2::new(c.x + r, c.y),
                2.0,
                color,
            );
            d.draw_ring(c, r * 0.45, r * 0.5, 0.0, 360.0, 24, color);
        }
        Emblem::Rocket => {
            d.draw_triangle(
                Vector2::new(c.x - r * 0.45, c.y + r * 0.3),
                Vector2::new(c.x + r * 0.45, c.y + r * 0.3),
                Vector2::new(c.x, c.y - r),
                color,
            );
            d.draw_triangle(
                Vector2::new(c.x - r * 0.45, c.y + r),
                Vector2::new(c.x + r * 0.45, c.y + r),
                Vector2::new(c.x, c.y + r * 0.3),
                color,
            );
        }
        Emblem::Scales => {
            d.draw_line_ex(
                Vector2::new(c.x, c.y - r),
                Vector2::new(c.x, c.y + r),
                2.0,
                color,
            );
            d.draw_line_ex(
                Vector2::new(c.x - r, c.y - r * 0.5),
                Vector2::new(c.x + r, c.y - r * 0.5),
                2.0,
                color,
            );
            d.draw_ring(
                Vector2::new(c.x - r, c.y - r * 0.2),
                r * 0.25,
                r * 0.35,
                180.0,
                360.0,
                12,
                color,
            );
            d.draw_ring(
                Vector2::new(c.x + r, c.y - r * 0.2),
                r * 0.25,
                r * 0.35,
                180.0,
                360.0,
                12,
                color,
            );
        }
        Emblem::Book => {
            d.draw_rectangle_lines_ex(
                Rectangle::new(c.x - r, c.y - r * 0.7, size, r * 1.4),
                2.0,
                color,
            );
            d.draw_line_ex(
                Vector2::new(c.x, c.y - r * 0.7),
                Vector2::new(c.x, c.y + r * 0.7),
                2.0,
                color,
            );
        }
        Emblem::Shield => {
            d.draw_triangle(
                Vector2::new(c.x - r * 0.8, c.y - r * 0.2),
                Vector2::new(c.x, c.y + r),
                Vector2::new(c.x + r * 0.8, c.y - r * 0.2),
                color,
            );
            d.draw_rectangle_rec(
                Rectangle::new(c.x - r * 0.8, c.y - r, r * 1.6, r * 0.8),
                color,
            );
        }
        Emblem::Target => {
            d.draw_circle_lines(c.x as i32, c.y as i32, r, color);
            d.draw_circle_lines(c.x as i32, c.y as i32, r * 0.6, color);
            d.draw_circle_v(c, r * 0.2, color);
        }
        Emblem::Warning => {
            d.draw_triangle_lines(
                Vector2::new(c.x, c.y - r),
                Vector2::new(c.x - r, c.y + r * 0.8),
                Vector2::new(c.x + r, c.y + r * 0.8),
                color,
            );
            d.draw_line_ex(
                Vector2::new(c.x, c.y - r * 0.4),
                Vector2::new(c.x, c.y + r * 0.25),
                2.5,
                color,
            );
            d.draw_circle_v(Vector2::new(c.x, c.y + r * 0.55), 2.0, color);
        }
        Emblem::Trend => {
            d.draw_line_ex(
                Vector2::new(c.x - r, c.y + r * 0.7),
                Vector2::new(c.x - r * 0.3, c.y),
                2.5,
                color,
            );
            d.draw_line_ex(
                Vector2::new(c.x - r * 0.3, c.y),
                Vector2::new(c.x + r * 0.2, c.y + r * 0.35),
                2.5,
                color,
            );
            d.draw_line_ex(
                Vector2::new(c.x + r * 0.2, c.y + r * 0.35),
                Vector2::new(c.x + r, c.y - r * 0.7),
                2.5,
                color,
            );
            d.draw_triangle(
                Vector2::new(c.x + r * 0.5, c.y - r * 0.7),
                Vector2::new(c.x + r, c.y - r * 0.2),
                Vector2::new(c.x + r, c.y - r * 0.7),
                color,
            );
        }
        Emblem::People => {
            d.draw_circle_v(Vector2::new(c.x - r * 0.45, c.y - r * 0.4), r * 0.3, color);
            d.draw_circle_v(Vector2::new(c.x + r * 0.45, c.y - r * 0.4), r * 0.3, color);
            d.draw_ring(Vector2::new(c.x - r * 0.45, c.y + r * 0.6), 0.0, r * 0.5, 180.0, 360.0, 12, color);
            d.draw_ring(Vector2::new(c.x + r * 0.45, c.y + r * 0.6), 0.0, r * 0.5, 180.0, 360.0, 12, color);
        }
        Emblem::Satellite => {
            d.draw_rectangle_rec(
                Rectangle::new(c.x - r * 0.3, c.y - r * 0.3, r * 0.6, r * 0.6),
                color,
            );
            // Solar panels.
            d.draw_rectangle_lines_ex(
                Rectangle::new(c.x - r, c.y - r * 0.2, r * 0.5, r * 0.4),
                2.0,
                color,
            );
            d.draw_rectangle_lines_ex(
                Rectangle::new(c.x + r * 0.5, c.y - r * 0.2, r * 0.5, r * 0.4),
                2.0,
                color,
            );
        }
        Emblem::Gavel => {
            d.draw_line_ex(
                Vector2::new(c.x - r * 0.6, c.y - r * 0.6),
                Vector2::new(c.x + r * 0.6, c.y + r * 0.6),
                4.0,
                color,
            );
            d.draw_line_ex(
                Vector2::new(c.x - r * 0.9, c.y - r * 0.1),
                Vector2::new(c.x - r * 0.1, c.y - r * 0.9),
                7.0,
                color,
            );
            d.draw_line_ex(
                Vector2::new(c.x - r * 0.2, c.y + r),
                Vector2::new(c.x + r, c.y + r),
                3.0,
                color,
            );
        }
    }
}
