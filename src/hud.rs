//! Control bar and progress indicator, overlaid on every slide.

use raylib::prelude::*;

use crate::constants::*;

/// The four discrete user intents the deck responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Previous,
    TogglePlay,
    Next,
    Reset,
}

const ORDER: [Intent; 4] = [
    Intent::Previous,
    Intent::TogglePlay,
    Intent::Next,
    Intent::Reset,
];

/// Four round buttons centered at the bottom edge. Rebuilt from the live
/// window size every frame so resizing keeps the bar centered.
pub struct ControlBar {
    centers: [Vector2; 4],
    radius: f32,
}

impl ControlBar {
    pub fn layout(screen_w: f32, screen_h: f32) -> Self {
        let radius = BUTTON_RADIUS;
        let pitch = radius * 2.0 + BUTTON_GAP;
        let total = pitch * 3.0; // distance between first and last center
        let first_x = screen_w / 2.0 - total / 2.0;
        let y = screen_h - 55.0;
        let centers = std::array::from_fn(|i| Vector2::new(first_x + pitch * i as f32, y));
        Self { centers, radius }
    }

    /// Which button a click landed on, if any.
    pub fn hit(&self, point: Vector2) -> Option<Intent> {
        ORDER
            .iter()
            .zip(self.centers.iter())
            .find(|(_, center)| point.distance_to(**center) <= self.radius)
            .map(|(intent, _)| *intent)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, playing: bool) {
        // Pill behind the buttons.
        let pad = 14.0;
        let pill = Rectangle::new(
            self.centers[0].x - self.radius - pad,
            self.centers[0].y - self.radius - pad,
            (self.centers[3].x - self.centers[0].x) + (self.radius + pad) * 2.0,
            (self.radius + pad) * 2.0,
        );
        d.draw_rectangle_rounded(pill, 1.0, 12, with_alpha(Color::BLACK, 0.5));

        for (intent, center) in ORDER.iter().zip(self.centers.iter()) {
            let fill = match intent {
                Intent::TogglePlay if playing => with_alpha(ACCENT_RED, 0.8),
                Intent::TogglePlay => with_alpha(PLAY_GREEN, 0.8),
                Intent::Reset => with_alpha(ACCENT_AMBER, 0.8),
                _ => with_alpha(ACCENT_BLUE, 0.8),
            };
            d.draw_circle_v(*center, self.radius, fill);
            self.draw_glyph(d, *intent, *center, playing);
        }
    }

    fn draw_glyph(&self, d: &mut RaylibDrawHandle, intent: Intent, c: Vector2, playing: bool) {
        let s = self.radius * 0.42;
        let white = Color::WHITE;
        match intent {
            Intent::Previous => {
                // Left-pointing chevron.
                d.draw_line_ex(
                    Vector2::new(c.x + s * 0.5, c.y - s),
                    Vector2::new(c.x - s * 0.5, c.y),
                    3.0,
                    white,
                );
                d.draw_line_ex(
                    Vector2::new(c.x - s * 0.5, c.y),
                    Vector2::new(c.x + s * 0.5, c.y + s),
                    3.0,
                    white,
                );
            }
            Intent::Next => {
                d.draw_line_ex(
                    Vector2::new(c.x - s * 0.5, c.y - s),
                    Vector2::new(c.x + s * 0.5, c.y),
                    3.0,
                    white,
                );
                d.draw_line_ex(
                    Vector2::new(c.x + s * 0.5, c.y),
                    Vector2::new(c.x - s * 0.5, c.y + s),
                    3.0,
                    white,
                );
            }
            Intent::TogglePlay => {
                if playing {
                    // Pause bars.
                    d.draw_rectangle_rec(
                        Rectangle::new(c.x - s, c.y - s, s * 0.6, s * 2.0),
                        white,
                    );
                    d.draw_rectangle_rec(
                        Rectangle::new(c.x + s * 0.4, c.y - s, s * 0.6, s * 2.0),
                        white,
                    );
                } else {
                    // Play triangle, counter-clockwise winding.
                    d.draw_triangle(
                        Vector2::new(c.x - s * 0.6, c.y - s),
                        Vector2::new(c.x - s * 0.6, c.y + s),
                        Vector2::new(c.x + s, c.y),
                        white,
                    );
                }
            }
            Intent::Reset => {
                // Open ring with a small arrow head at the gap.
                d.draw_ring(c, s * 0.8, s * 1.2, 60.0, 330.0, 24, white);
                d.draw_triangle(
                    Vector2::new(c.x + s * 0.2, c.y - s * 1.5),
                    Vector2::new(c.x + s * 0.2, c.y - s * 0.5),
                    Vector2::new(c.x + s * 1.3, c.y - s),
                    white,
                );
            }
        }
    }
}

/// Progress bar at the top center; `fraction` is recomputed by the caller
/// from the controller each frame.
pub fn draw_progress(d: &mut RaylibDrawHandle, fraction: f32, screen_w: f32) {
    let x = screen_w / 2.0 - PROGRESS_WIDTH / 2.0;
    let track = Rectangle::new(x, 20.0, PROGRESS_WIDTH, PROGRESS_HEIGHT);
    d.draw_rectangle_rounded(track, 1.0, 4, with_alpha(Color::WHITE, 0.2));

    let filled = Rectangle::new(x, 20.0, PROGRESS_WIDTH * fraction.clamp(0.0, 1.0), PROGRESS_HEIGHT);
    if filled.width > 0.0 {
        d.draw_rectangle_gradient_h(
            filled.x as i32,
            filled.y as i32,
            filled.width as i32,
            filled.height as i32,
            ACCENT_BLUE,
            ACCENT_VIOLET,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_sit_centered_and_in_order() {
        let bar = ControlBar::layout(1600.0, 900.0);
        let xs: Vec<f32> = bar.centers.iter().map(|c| c.x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        // Symmetric around the screen center.
        let mid = (xs[0] + xs[3]) / 2.0;
        assert!((mid - 800.0).abs() < 0.01);
        assert!(bar.centers.iter().all(|c| c.y == 900.0 - 55.0));
    }

    #[test]
    fn hits_resolve_to_the_right_intent() {
        let bar = ControlBar::layout(1600.0, 900.0);
        assert_eq!(bar.hit(bar.centers[0]), Some(Intent::Previous));
        assert_eq!(bar.hit(bar.centers[1]), Some(Intent::TogglePlay));
        assert_eq!(bar.hit(bar.centers[2]), Some(Intent::Next));
        assert_eq!(bar.hit(bar.centers[3]), Some(Intent::Reset));
    }

    #[test]
    fn a_click_on_the_rim_still_counts() {
        let bar = ControlBar::layout(1600.0, 900.0);
        let edge = Vector2::new(bar.centers[2].x + BUTTON_RADIUS, bar.centers[2].y);
        assert_eq!(bar.hit(edge), Some(Intent::Next));
    }

    #[test]
    fn a_click_between_buttons_misses() {
        let bar = ControlBar::layout(1600.0, 900.0);
        let between = Vector2::new(
            (bar.centers[0].x + bar.centers[1].x) / 2.0,
            bar.centers[0].y,
        );
        assert_eq!(bar.hit(between), None);
        assert_eq!(bar.hit(Vector2::new(10.0, 10.0)), None);
    }
}
