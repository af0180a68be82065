//! Expandable card grid: layout math, expansion state and drawing.

use raylib::prelude::*;

use crate::constants::*;
use crate::deck::Card;
use crate::text::{measure_text, wrap};

pub const CARD_COLLAPSED: f32 = 64.0;
pub const CARD_EXPANDED: f32 = 192.0;
pub const CARD_GAP: f32 = 18.0;

/// Column count used by the authored slides: pairs for four cards (the
/// challenges slide), otherwise up to three across.
pub fn columns_for(count: usize) -> usize {
    match count {
        0 => 1,
        4 => 2,
        n => n.min(3),
    }
}

/// Lays `heights.len()` cells into `cols` columns inside `area`. Every row
/// is as tall as its tallest cell so expanding one card pushes the rows
/// below it down, like the original flow layout did.
pub fn grid_rects(area: Rectangle, heights: &[f32], cols: usize, gap: f32) -> Vec<Rectangle> {
    assert!(cols >= 1);
    let cell_w = (area.width - gap * (cols as f32 - 1.0)) / cols as f32;
    let mut rects = Vec::with_capacity(heights.len());
    let mut y = area.y;
    for row in heights.chunks(cols) {
        let row_h = row.iter().cloned().fold(0.0_f32, f32::max);
        for (i, h) in row.iter().enumerate() {
            rects.push(Rectangle::new(
                area.x + (cell_w + gap) * i as f32,
                y,
                cell_w,
                *h,
            ));
        }
        y += row_h + gap;
    }
    rects
}

/// Per-slide expansion state. Owned by the slide pane, reset on remount;
/// the controller never sees it.
pub struct CardGrid {
    progress: Vec<f32>, // 0 collapsed .. 1 expanded, animated
    expanded: Vec<bool>,
}

impl CardGrid {
    pub fn new(count: usize) -> Self {
        Self {
            progress: vec![0.0; count],
            expanded: vec![false; count],
        }
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.expanded.get_mut(index) {
            *flag = !*flag;
        }
    }

    pub fn update(&mut self, dt: f32) {
        let step = dt / CARD_TRANSITION;
        for (p, open) in self.progress.iter_mut().zip(&self.expanded) {
            *p = if *open {
                (*p + step).min(1.0)
            } else {
                (*p - step).max(0.0)
            };
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Current animated cell heights, ready for [`grid_rects`].
    pub fn heights(&self) -> Vec<f32> {
        self.progress
            .iter()
            .map(|p| {
                let eased = ease::cubic_out(*p, 0.0, 1.0, 1.0);
                CARD_COLLAPSED + (CARD_EXPANDED - CARD_COLLAPSED) * eased
            })
            .collect()
    }
}

pub fn draw_card(d: &mut RaylibDrawHandle, card: &Card, rect: Rectangle, open: f32, alpha: f32) {
    let accent = accent_color(card.accent);
    let bg = if open > 0.5 {
        with_alpha(accent, 0.15 * alpha)
    } else {
        with_alpha(ACCENT_BLUE, 0.1 * alpha)
    };
    d.draw_rectangle_rounded(rect, 0.18, 8, bg);
    d.draw_rectangle_rounded_lines(rect, 0.18, 8, with_alpha(accent, (0.3 + 0.7 * open) * alpha));

    let title_color = if open > 0.5 { TEXT_BRIGHT } else { accent };
    super::emblem::draw(
        d,
        card.emblem,
        Vector2::new(rect.x + 32.0, rect.y + CARD_COLLAPSED / 2.0),
        24.0,
        with_alpha(title_color, alpha),
    );
    d.draw_text(
        card.title,
        (rect.x + 58.0) as i32,
        (rect.y + CARD_COLLAPSED / 2.0 - 10.0) as i32,
        20,
        with_alpha(title_color, alpha),
    );

    // Body text fades in with the expansion.
    if open > 0.05 {
        let body_alpha = alpha * open;
        let inner_w = (rect.width - 32.0) as i32;
        let mut y = rect.y + CARD_COLLAPSED + 2.0;
        for line in wrap(card.summary, inner_w, |s| measure_text(s, 17)) {
            d.draw_text(
                &line,
                (rect.x + 16.0) as i32,
                y as i32,
                17,
                with_alpha(TEXT_BRIGHT, body_alpha),
            );
            y += 22.0;
        }
        y += 4.0;
        for line in wrap(card.detail, inner_w, |s| measure_text(s, 15)) {
            if y + 18.0 > rect.y + rect.height {
                break;
            }
            d.draw_text(
                &line,
                (rect.x + 16.0) as i32,
                y as i32,
                15,
                with_alpha(TEXT_BODY, body_alpha),
            );
            y += 20.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_rule_matches_the_authored_slides() {
        assert_eq!(columns_for(3), 3); // definition / reach / goal
        assert_eq!(columns_for(4), 2); // challenges pairs
        assert_eq!(columns_for(5), 3); // principles
        assert_eq!(columns_for(1), 1);
    }

    #[test]
    fn grid_fills_rows_left_to_right() {
        let area = Rectangle::new(100.0, 50.0, 640.0, 400.0);
        let rects = grid_rects(area, &[64.0; 5], 3, 20.0);
        assert_eq!(rects.len(), 5);
        assert_eq!(rects[0].x, 100.0);
        assert!(rects[1].x > rects[0].x);
        assert_eq!(rects[0].y, rects[2].y);
        // Second row starts below the first plus the gap.
        assert_eq!(rects[3].y, 50.0 + 64.0 + 20.0);
        assert_eq!(rects[3].x, 100.0);
        // Columns share one width: 640 = 3w + 2*20.
        assert!((rects[0].width - 200.0).abs() < 0.01);
    }

    #[test]
    fn an_expanded_card_pushes_the_next_row_down() {
        let area = Rectangle::new(0.0, 0.0, 660.0, 500.0);
        let heights = [64.0, 192.0, 64.0, 64.0];
        let rects = grid_rects(area, &heights, 3, 20.0);
        // Row height is the max of the row, so row two starts after 192.
        assert_eq!(rects[3].y, 192.0 + 20.0);
    }

    #[test]
    fn toggling_animates_toward_and_back() {
        let mut grid = CardGrid::new(2);
        assert!(!grid.is_expanded(0));
        grid.toggle(0);
        assert!(grid.is_expanded(0));
        grid.update(CARD_TRANSITION);
        assert_eq!(grid.heights()[0], CARD_EXPANDED);
        assert_eq!(grid.heights()[1], CARD_COLLAPSED);
        grid.toggle(0);
        grid.update(CARD_TRANSITION);
        assert_eq!(grid.heights()[0], CARD_COLLAPSED);
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let mut grid = CardGrid::new(1);
        grid.toggle(5);
        assert!(!grid.is_expanded(5));
    }
}
