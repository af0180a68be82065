use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::info;
use raylib::prelude::*;

mod constants;
mod content;
mod controller;
mod deck;
mod hud;
mod slides;
mod starfield;
mod text;

use crate::constants::*;
use crate::controller::Controller;
use crate::hud::{ControlBar, Intent, draw_progress};
use crate::slides::SlidePane;
use crate::starfield::Starfield;

/// Interactive space-law slide deck over an animated starfield.
#[derive(Parser)]
#[command(name = "stardeck", version)]
struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Slide to open on (zero-based, wraps)
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Start autoplay immediately
    #[arg(long)]
    autoplay: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let deck = content::space_law_deck()?;
    info!("deck loaded: {} slides", deck.len());

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Space Law - the law beyond Earth")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_WARNING);

    // --- Presentation State ---
    let mut controller = Controller::new(deck.len());
    controller.seek(args.start);
    if args.autoplay {
        controller.toggle_playback(deck.duration(controller.index()));
    }

    let mut starfield = Starfield::new(&mut rand::rng());
    let mut pane = SlidePane::new(controller.index(), &deck);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let screen_w = rl.get_screen_width() as f32;
        let screen_h = rl.get_screen_height() as f32;
        let bar = ControlBar::layout(screen_w, screen_h);

        // 1. User intents. Clicks outside the control bar fall through to
        //    the slide pane (cards, treaty tiles, panel dismissal).
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let point = rl.get_mouse_position();
            match bar.hit(point) {
                Some(Intent::Next) => controller.advance(),
                Some(Intent::Previous) => controller.retreat(),
                Some(Intent::TogglePlay) => {
                    controller.toggle_playback(deck.duration(controller.index()));
                }
                Some(Intent::Reset) => controller.reset(),
                None => pane.handle_click(point, &deck, screen_w, screen_h),
            }
        }

        // 2. Autoplay ticks, then the pane follows wherever the index went.
        controller.tick(Duration::from_secs_f32(dt));
        pane.sync(controller.index(), &deck);

        starfield.update(dt);
        pane.update(dt);

        // 3. Render: sky, stars, the mounted slide(s), then the HUD.
        let mut d = rl.begin_drawing(&thread);
        d.draw_rectangle_gradient_v(
            0,
            0,
            screen_w as i32,
            screen_h as i32,
            SKY_TOP,
            SKY_BOTTOM,
        );
        starfield.draw(&mut d, screen_w, screen_h);
        pane.draw(&mut d, &deck, screen_w, screen_h);
        draw_progress(&mut d, controller.progress(), screen_w);
        bar.draw(&mut d, controller.is_playing());
    }

    // Explicit teardown; the drop at end of scope would release the armed
    // timer on any exit path anyway.
    controller.stop();
    Ok(())
}
