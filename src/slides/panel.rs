//! Sliding detail panel for the treaty board, with a dimmed backdrop.

use raylib::prelude::*;

use crate::constants::*;
use crate::deck::Treaty;
use crate::text::{measure_text, wrap};

const CLOSE_SIZE: f32 = 40.0;

/// An open (or closing) detail panel. Local to the slide pane; it resets
/// naturally when the slide remounts.
pub struct DetailPanel {
    pub treaty: usize,
    t: f32,
    closing: bool,
}

impl DetailPanel {
    pub fn open(treaty: usize) -> Self {
        Self {
            treaty,
            t: 0.0,
            closing: false,
        }
    }

    pub fn close(&mut self) {
        self.closing = true;
    }

    /// Advances the slide-in/out animation; returns false once fully closed
    /// so the pane can drop the panel.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.closing {
            self.t = (self.t - dt).max(0.0);
            self.t > 0.0
        } else {
            self.t = (self.t + dt).min(PANEL_TRANSITION);
            true
        }
    }

    fn progress(&self) -> f32 {
        ease::cubic_out(self.t, 0.0, 1.0, PANEL_TRANSITION)
    }

    pub fn panel_rect(screen_w: f32, screen_h: f32) -> Rectangle {
        Rectangle::new(screen_w - PANEL_WIDTH, 0.0, PANEL_WIDTH, screen_h)
    }

    pub fn close_rect(screen_w: f32) -> Rectangle {
        Rectangle::new(
            screen_w - PANEL_WIDTH + 16.0,
            16.0,
            CLOSE_SIZE,
            CLOSE_SIZE,
        )
    }

    /// Click routing while the panel is up: the close button and the dimmed
    /// backdrop both dismiss it; clicks inside the panel are swallowed.
    pub fn handle_click(&mut self, point: Vector2, screen_w: f32, screen_h: f32) {
        if Self::close_rect(screen_w).check_collision_point_rec(point)
            || !Self::panel_rect(screen_w, screen_h).check_collision_point_rec(point)
        {
            self.close();
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, treaty: &Treaty, screen_w: f32, screen_h: f32) {
        let p = self.progress();
        d.draw_rectangle(
            0,
            0,
            screen_w as i32,
            screen_h as i32,
            with_alpha(Color::BLACK, 0.7 * p),
        );

        // The panel rides in from the right edge.
        let x = screen_w - PANEL_WIDTH * p;
        d.draw_rectangle_rec(
            Rectangle::new(x, 0.0, PANEL_WIDTH, screen_h),
            with_alpha(Color::new(26, 26, 46, 255), 0.95),
        );
        d.draw_line_ex(
            Vector2::new(x, 0.0),
            Vector2::new(x, screen_h),
            2.0,
            with_alpha(ACCENT_BLUE, 0.3),
        );

        // Close button.
        let close = Rectangle::new(x + 16.0, 16.0, CLOSE_SIZE, CLOSE_SIZE);
        d.draw_circle_v(
            Vector2::new(close.x + CLOSE_SIZE / 2.0, close.y + CLOSE_SIZE / 2.0),
            CLOSE_SIZE / 2.0,
            with_alpha(Color::new(255, 99, 99, 255), 0.8),
        );
        d.draw_text(
            "x",
            (close.x + CLOSE_SIZE / 2.0 - 5.0) as i32,
            (close.y + CLOSE_SIZE / 2.0 - 10.0) as i32,
            20,
            Color::WHITE,
        );

        let left = (x + 28.0) as i32;
        let width = (PANEL_WIDTH - 56.0) as i32;
        let mut y = 84;

        let title = format!("{} - {}", treaty.year, treaty.title);
        for line in wrap(&title, width, |s| measure_text(s, 26)) {
            d.draw_text(&line, left, y, 26, ACCENT_BLUE);
            y += 34;
        }
        y += 10;
        for line in wrap(treaty.summary, width, |s| measure_text(s, 18)) {
            d.draw_text(&line, left, y, 18, TEXT_DIM);
            y += 24;
        }
        y += 16;

        // Detail body inside its own tinted box.
        let body: Vec<String> = wrap(treaty.detail, width - 24, |s| measure_text(s, 17));
        let box_h = body.len() as f32 * 23.0 + 28.0;
        d.draw_rectangle_rounded(
            Rectangle::new(x + 20.0, y as f32, PANEL_WIDTH - 40.0, box_h),
            0.1,
            6,
            with_alpha(ACCENT_BLUE, 0.1),
        );
        y += 14;
        for line in body {
            d.draw_text(&line, left + 6, y, 17, TEXT_BRIGHT);
            y += 23;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_runs_its_slide_in_then_reports_closed_after_dismissal() {
        let mut panel = DetailPanel::open(2);
        assert_eq!(panel.treaty, 2);
        assert!(panel.update(PANEL_TRANSITION));
        panel.close();
        assert!(panel.update(PANEL_TRANSITION / 2.0));
        assert!(!panel.update(PANEL_TRANSITION));
    }

    #[test]
    fn backdrop_click_dismisses() {
        let mut panel = DetailPanel::open(0);
        panel.update(PANEL_TRANSITION);
        panel.handle_click(Vector2::new(100.0, 100.0), 1600.0, 900.0);
        assert!(!panel.update(PANEL_TRANSITION * 2.0));
    }

    #[test]
    fn close_button_dismisses_but_panel_body_does_not() {
        let mut panel = DetailPanel::open(0);
        panel.update(PANEL_TRANSITION);
        // Somewhere in the panel body.
        panel.handle_click(Vector2::new(1600.0 - PANEL_WIDTH / 2.0, 500.0), 1600.0, 900.0);
        assert!(panel.update(PANEL_TRANSITION));
        // The close button.
        let close = DetailPanel::close_rect(1600.0);
        panel.handle_click(
            Vector2::new(close.x + 5.0, close.y + 5.0),
            1600.0,
            900.0,
        );
        assert!(!panel.update(PANEL_TRANSITION * 2.0));
    }
}
