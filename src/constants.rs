use raylib::prelude::*;

use crate::deck::Accent;

pub const WINDOW_WIDTH: i32 = 1600;            // Default window width
pub const WINDOW_HEIGHT: i32 = 900;            // Default window height
pub const FPS: u32 = 60;                       // Frames per second

pub const SLIDE_TRANSITION: f32 = 0.5;         // Slide enter/exit animation (seconds)
pub const PANEL_TRANSITION: f32 = 0.35;        // Detail panel slide-in (seconds)
pub const CARD_TRANSITION: f32 = 0.3;          // Card expand/collapse (seconds)
pub const GLOW_PERIOD: f32 = 3.0;              // Headline glow pulse period (seconds)

pub const SLIDE_SHIFT: f32 = 120.0;            // Horizontal travel of a slide in transition (px)
pub const PANEL_WIDTH: f32 = 400.0;            // Detail panel width (px)
pub const PROGRESS_WIDTH: f32 = 300.0;         // Progress bar width (px)
pub const PROGRESS_HEIGHT: f32 = 4.0;          // Progress bar height (px)
pub const BUTTON_RADIUS: f32 = 25.0;           // Control bar button radius (px)
pub const BUTTON_GAP: f32 = 16.0;              // Gap between control bar buttons (px)

pub const SKY_TOP: Color = Color::new(12, 12, 12, 255);
pub const SKY_BOTTOM: Color = Color::new(22, 33, 62, 255);
pub const ACCENT_BLUE: Color = Color::new(74, 144, 226, 255);
pub const ACCENT_RED: Color = Color::new(255, 107, 107, 255);
pub const ACCENT_AMBER: Color = Color::new(255, 193, 7, 255);
pub const ACCENT_VIOLET: Color = Color::new(123, 104, 238, 255);
pub const TEXT_BRIGHT: Color = Color::new(255, 255, 255, 255);
pub const TEXT_BODY: Color = Color::new(224, 224, 224, 255);
pub const TEXT_DIM: Color = Color::new(160, 160, 160, 255);
pub const PLAY_GREEN: Color = Color::new(99, 255, 99, 255);

pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => ACCENT_BLUE,
        Accent::Red => ACCENT_RED,
        Accent::Amber => ACCENT_AMBER,
    }
}

/// Reapplies an alpha fraction on top of a palette color.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(
        color.r,
        color.g,
        color.b,
        (alpha.clamp(0.0, 1.0) * 255.0) as u8,
    )
}
