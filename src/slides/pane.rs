//! The slide pane: mounts the slide addressed by the controller index,
//! animates enter/exit transitions and owns the transient card/panel state.

use raylib::prelude::*;

use crate::constants::*;
use crate::deck::{Callout, Deck, SlideBody, Treaty};
use crate::slides::card::{self, CardGrid};
use crate::slides::emblem;
use crate::slides::panel::DetailPanel;
use crate::slides::transition::Transition;
use crate::text::{measure_text, wrap};

const FRAME_MAX_WIDTH: f32 = 1400.0;
const TILE_HEIGHT: f32 = 130.0;

pub struct SlidePane {
    mounted: usize,
    transition: Transition,
    cards: CardGrid,
    panel: Option<DetailPanel>,
    t: f32, // local clock for glow and bobbing
}

fn card_count(body: &SlideBody) -> usize {
    match body {
        SlideBody::Cards { cards, .. } => cards.len(),
        _ => 0,
    }
}

fn frame_rect(screen_w: f32, screen_h: f32) -> Rectangle {
    let width = FRAME_MAX_WIDTH.min(screen_w - 120.0);
    Rectangle::new(
        (screen_w - width) / 2.0,
        60.0,
        width,
        screen_h - 180.0,
    )
}

fn cards_area(frame: Rectangle, has_intro: bool) -> Rectangle {
    let top = if has_intro { 248.0 } else { 180.0 };
    Rectangle::new(
        frame.x + 70.0,
        frame.y + top,
        frame.width - 140.0,
        frame.height - top - 30.0,
    )
}

fn tiles_area(frame: Rectangle) -> Rectangle {
    Rectangle::new(
        frame.x + 60.0,
        frame.y + 210.0,
        frame.width - 120.0,
        TILE_HEIGHT,
    )
}

fn draw_centered(d: &mut RaylibDrawHandle, text: &str, cx: f32, y: f32, size: i32, color: Color) {
    let w = measure_text(text, size);
    d.draw_text(text, (cx - w as f32 / 2.0) as i32, y as i32, size, color);
}

/// A translucent rounded box with wrapped, centered text. Returns the box
/// height it used.
fn draw_quote_box(
    d: &mut RaylibDrawHandle,
    text: &str,
    cx: f32,
    y: f32,
    width: f32,
    size: i32,
    tint: Color,
    text_color: Color,
    alpha: f32,
) -> f32 {
    let lines = wrap(text, (width - 80.0) as i32, |s| measure_text(s, size));
    let line_h = size as f32 + 8.0;
    let height = lines.len() as f32 * line_h + 44.0;
    let rect = Rectangle::new(cx - width / 2.0, y, width, height);
    d.draw_rectangle_rounded(rect, 0.25, 8, with_alpha(tint, 0.1 * alpha));
    d.draw_rectangle_rounded_lines(rect, 0.25, 8, with_alpha(tint, 0.3 * alpha));
    let mut ty = y + 22.0;
    for line in lines {
        draw_centered(d, &line, cx, ty, size, with_alpha(text_color, alpha));
        ty += line_h;
    }
    height
}

impl SlidePane {
    pub fn new(index: usize, deck: &Deck) -> Self {
        Self {
            mounted: index,
            transition: Transition::settled(),
            cards: CardGrid::new(card_count(&deck.get(index).body)),
            panel: None,
            t: 0.0,
        }
    }

    /// Follows the controller: when the index moved, the old slide starts
    /// its exit animation and the new one mounts with fresh local state.
    pub fn sync(&mut self, index: usize, deck: &Deck) {
        if index == self.mounted {
            return;
        }
        self.transition = Transition::start(self.mounted);
        self.mounted = index;
        self.cards = CardGrid::new(card_count(&deck.get(index).body));
        self.panel = None;
    }

    pub fn update(&mut self, dt: f32) {
        self.t += dt;
        self.transition.update(dt);
        self.cards.update(dt);
        if let Some(panel) = self.panel.as_mut()
            && !panel.update(dt)
        {
            self.panel = None;
        }
    }

    /// Clicks that did not land on the control bar come here: an open panel
    /// captures everything, otherwise cards and treaty tiles hit-test
    /// against the same layout the draw pass uses.
    pub fn handle_click(&mut self, point: Vector2, deck: &Deck, screen_w: f32, screen_h: f32) {
        if let Some(panel) = self.panel.as_mut() {
            panel.handle_click(point, screen_w, screen_h);
            return;
        }

        let frame = frame_rect(screen_w, screen_h);
        match &deck.get(self.mounted).body {
            SlideBody::Cards { cards, intro, .. } => {
                let area = cards_area(frame, intro.is_some());
                let rects = card::grid_rects(
                    area,
                    &self.cards.heights(),
                    card::columns_for(cards.len()),
                    card::CARD_GAP,
                );
                if let Some(i) = rects
                    .iter()
                    .position(|r| r.check_collision_point_rec(point))
                {
                    self.cards.toggle(i);
                }
            }
            SlideBody::Treaties { entries, .. } => {
                let area = tiles_area(frame);
                let rects = card::grid_rects(
                    area,
                    &vec![TILE_HEIGHT; entries.len()],
                    entries.len().max(1),
                    16.0,
                );
                if let Some(i) = rects
                    .iter()
                    .position(|r| r.check_collision_point_rec(point))
                {
                    self.panel = Some(DetailPanel::open(i));
                }
            }
            _ => {}
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, deck: &Deck, screen_w: f32, screen_h: f32) {
        let p = self.transition.progress();

        // Outgoing slide eases left while the incoming one rides in from
        // the right; outside a transition only the mounted slide draws.
        if let Some(from) = self.transition.from {
            self.draw_slide(d, deck, from, -SLIDE_SHIFT * p, 1.0 - p, screen_w, screen_h);
        }
        self.draw_slide(
            d,
            deck,
            self.mounted,
            SLIDE_SHIFT * (1.0 - p),
            p,
            screen_w,
            screen_h,
        );

        if let Some(panel) = &self.panel
            && let SlideBody::Treaties { entries, .. } = &deck.get(self.mounted).body
            && let Some(treaty) = entries.get(panel.treaty)
        {
            panel.draw(d, treaty, screen_w, screen_h);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_slide(
        &self,
        d: &mut RaylibDrawHandle,
        deck: &Deck,
        index: usize,
        offset_x: f32,
        alpha: f32,
        screen_w: f32,
        screen_h: f32,
    ) {
        let mut frame = frame_rect(screen_w, screen_h);
        frame.x += offset_x;

        d.draw_rectangle_rounded(frame, 0.04, 10, with_alpha(Color::BLACK, 0.3 * alpha));
        d.draw_rectangle_rounded_lines(frame, 0.04, 10, with_alpha(Color::WHITE, 0.1 * alpha));

        match &deck.get(index).body {
            SlideBody::Cover {
                emblem: e,
                headline,
                tagline,
                quote,
                question,
                footer,
            } => self.draw_cover(d, frame, *e, headline, *tagline, quote, *question, footer, alpha),
            SlideBody::Prose {
                emblem: e,
                heading,
                lead,
                question,
                sections,
            } => self.draw_prose(d, frame, *e, heading, lead, question, sections, alpha),
            SlideBody::Cards {
                emblem: e,
                heading,
                accent,
                intro,
                cards,
                callout,
                banner,
            } => {
                let acc = accent_color(*accent);
                self.draw_card_slide(
                    d, frame, *e, heading, acc, *intro, cards, callout, *banner, alpha,
                );
            }
            SlideBody::Treaties {
                emblem: e,
                heading,
                hint,
                entries,
                banner,
            } => self.draw_treaties(d, frame, *e, heading, hint, entries, banner, alpha),
        }

        // Slide number badge, bottom-right of the frame.
        let badge = format!("{} / {}", index + 1, deck.len());
        let bw = measure_text(&badge, 16) as f32;
        let rect = Rectangle::new(
            frame.x + frame.width - bw - 48.0,
            frame.y + frame.height - 44.0,
            bw + 28.0,
            28.0,
        );
        d.draw_rectangle_rounded(rect, 1.0, 8, with_alpha(Color::BLACK, 0.5 * alpha));
        d.draw_text(
            &badge,
            (rect.x + 14.0) as i32,
            (rect.y + 6.0) as i32,
            16,
            with_alpha(Color::WHITE, 0.7 * alpha),
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cover(
        &self,
        d: &mut RaylibDrawHandle,
        frame: Rectangle,
        e: crate::deck::Emblem,
        headline: &str,
        tagline: Option<&str>,
        quote: &str,
        question: Option<(&str, &str)>,
        footer: &str,
        alpha: f32,
    ) {
        let cx = frame.x + frame.width / 2.0;

        // Gently bobbing emblem.
        let bob = (self.t * std::f32::consts::TAU / 4.0).sin() * 10.0;
        emblem::draw(
            d,
            e,
            Vector2::new(cx, frame.y + 120.0 + bob),
            80.0,
            with_alpha(ACCENT_BLUE, alpha),
        );

        // Pulsing glow halo behind the headline.
        let glow = 0.5 + 0.5 * (self.t * std::f32::consts::TAU / GLOW_PERIOD).sin();
        let hy = frame.y + 200.0;
        for ring in 1..=3 {
            let halo = with_alpha(ACCENT_BLUE, alpha * glow * 0.18 / ring as f32);
            let o = ring as f32 * 2.0;
            draw_centered(d, headline, cx - o, hy, 64, halo);
            draw_centered(d, headline, cx + o, hy, 64, halo);
            draw_centered(d, headline, cx, hy - o, 64, halo);
            draw_centered(d, headline, cx, hy + o, 64, halo);
        }
        draw_centered(d, headline, cx, hy, 64, with_alpha(TEXT_BRIGHT, alpha));

        let mut y = hy + 90.0;
        if let Some(tagline) = tagline {
            draw_centered(d, tagline, cx, y, 26, with_alpha(TEXT_DIM, alpha));
            y += 60.0;
        }

        y += draw_quote_box(d, quote, cx, y, 700.0, 24, ACCENT_BLUE, TEXT_BODY, alpha) + 30.0;

        if let Some((label, text)) = question {
            let lines = wrap(text, 520, |s| measure_text(s, 20));
            let height = lines.len() as f32 * 28.0 + 70.0;
            let rect = Rectangle::new(cx - 300.0, y, 600.0, height);
            d.draw_rectangle_rounded(rect, 0.2, 8, with_alpha(ACCENT_AMBER, 0.1 * alpha));
            d.draw_rectangle_rounded_lines(rect, 0.2, 8, with_alpha(ACCENT_AMBER, 0.3 * alpha));
            draw_centered(d, label, cx, y + 18.0, 22, with_alpha(ACCENT_AMBER, alpha));
            let mut ty = y + 52.0;
            for line in lines {
                draw_centered(d, &line, cx, ty, 20, with_alpha(ACCENT_AMBER, alpha));
                ty += 28.0;
            }
            y += height + 26.0;
        }

        draw_centered(d, footer, cx, y.max(frame.y + frame.height - 70.0), 18, with_alpha(TEXT_DIM, alpha));
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_prose(
        &self,
        d: &mut RaylibDrawHandle,
        frame: Rectangle,
        e: crate::deck::Emblem,
        heading: &str,
        lead: &str,
        question: &str,
        sections: &[(&str, &str)],
        alpha: f32,
    ) {
        let left = frame.x + 90.0;
        let width = frame.width - 180.0;
        emblem::draw(
            d,
            e,
            Vector2::new(left + 30.0, frame.y + 70.0),
            60.0,
            with_alpha(ACCENT_BLUE, alpha),
        );
        d.draw_text(
            heading,
            (left + 80.0) as i32,
            (frame.y + 52.0) as i32,
            40,
            with_alpha(ACCENT_BLUE, alpha),
        );

        let mut y = frame.y + 130.0;
        let box_lines = wrap(lead, (width - 60.0) as i32, |s| measure_text(s, 22));
        let box_h = box_lines.len() as f32 * 30.0 + 80.0;
        let rect = Rectangle::new(left, y, width, box_h);
        d.draw_rectangle_rounded(rect, 0.12, 8, with_alpha(ACCENT_BLUE, 0.1 * alpha));
        d.draw_rectangle_rounded_lines(rect, 0.12, 8, with_alpha(ACCENT_BLUE, 0.3 * alpha));
        let mut ty = y + 20.0;
        for line in box_lines {
            d.draw_text(&line, (left + 24.0) as i32, ty as i32, 22, with_alpha(TEXT_BODY, alpha));
            ty += 30.0;
        }
        d.draw_text(
            question,
            (left + 24.0) as i32,
            ty as i32,
            32,
            with_alpha(ACCENT_BLUE, alpha),
        );
        y += box_h + 30.0;

        for (label, text) in sections {
            d.draw_text(label, left as i32, y as i32, 21, with_alpha(TEXT_BRIGHT, alpha));
            y += 30.0;
            for line in wrap(text, width as i32, |s| measure_text(s, 19)) {
                d.draw_text(&line, left as i32, y as i32, 19, with_alpha(TEXT_BODY, alpha));
                y += 26.0;
            }
            y += 16.0;
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_card_slide(
        &self,
        d: &mut RaylibDrawHandle,
        frame: Rectangle,
        e: crate::deck::Emblem,
        heading: &str,
        accent: Color,
        intro: Option<&str>,
        cards: &[crate::deck::Card],
        callout: &Option<Callout>,
        banner: Option<&str>,
        alpha: f32,
    ) {
        let cx = frame.x + frame.width / 2.0;
        emblem::draw(
            d,
            e,
            Vector2::new(cx, frame.y + 70.0),
            56.0,
            with_alpha(accent, alpha),
        );
        draw_centered(d, heading, cx, frame.y + 114.0, 40, with_alpha(accent, alpha));

        if let Some(intro) = intro {
            draw_quote_box(
                d,
                intro,
                cx,
                frame.y + 172.0,
                frame.width - 300.0,
                22,
                accent,
                accent,
                alpha,
            );
        }

        let area = cards_area(frame, intro.is_some());
        let heights = self.cards.heights();
        let rects = card::grid_rects(area, &heights, card::columns_for(cards.len()), card::CARD_GAP);
        let mut bottom = area.y;
        for (i, (c, rect)) in cards.iter().zip(&rects).enumerate() {
            // Expansion progress drives the body fade.
            let open = (heights[i] - card::CARD_COLLAPSED)
                / (card::CARD_EXPANDED - card::CARD_COLLAPSED);
            card::draw_card(d, c, *rect, open, alpha);
            bottom = bottom.max(rect.y + rect.height);
        }

        let mut y = bottom + 26.0;
        if let Some(callout) = callout {
            let acc = accent_color(callout.accent);
            let lines = wrap(callout.text, (frame.width - 360.0) as i32, |s| {
                measure_text(s, 19)
            });
            let height = lines.len() as f32 * 26.0 + 66.0;
            let rect = Rectangle::new(frame.x + 120.0, y, frame.width - 240.0, height);
            d.draw_rectangle_rounded(rect, 0.15, 8, with_alpha(acc, 0.1 * alpha));
            d.draw_rectangle_rounded_lines(rect, 0.15, 8, with_alpha(acc, 0.3 * alpha));
            d.draw_text(
                callout.title,
                (rect.x + 24.0) as i32,
                (y + 16.0) as i32,
                21,
                with_alpha(acc, alpha),
            );
            let mut ty = y + 48.0;
            for line in lines {
                d.draw_text(&line, (rect.x + 24.0) as i32, ty as i32, 19, with_alpha(TEXT_BODY, alpha));
                ty += 26.0;
            }
            y += height + 20.0;
        }

        if let Some(banner) = banner {
            draw_quote_box(
                d,
                banner,
                cx,
                y,
                frame.width - 300.0,
                22,
                ACCENT_AMBER,
                ACCENT_AMBER,
                alpha,
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_treaties(
        &self,
        d: &mut RaylibDrawHandle,
        frame: Rectangle,
        e: crate::deck::Emblem,
        heading: &str,
        hint: &str,
        entries: &[Treaty],
        banner: &str,
        alpha: f32,
    ) {
        let cx = frame.x + frame.width / 2.0;
        emblem::draw(
            d,
            e,
            Vector2::new(cx, frame.y + 70.0),
            56.0,
            with_alpha(ACCENT_BLUE, alpha),
        );
        draw_centered(d, heading, cx, frame.y + 114.0, 40, with_alpha(ACCENT_BLUE, alpha));
        draw_centered(d, hint, cx, frame.y + 168.0, 19, with_alpha(TEXT_DIM, alpha));

        let area = tiles_area(frame);
        let rects = card::grid_rects(
            area,
            &vec![TILE_HEIGHT; entries.len()],
            entries.len().max(1),
            16.0,
        );
        for (treaty, rect) in entries.iter().zip(&rects) {
            d.draw_rectangle_rounded(*rect, 0.12, 8, with_alpha(ACCENT_BLUE, 0.1 * alpha));
            d.draw_rectangle_rounded_lines(*rect, 0.12, 8, with_alpha(ACCENT_BLUE, 0.3 * alpha));
            let tcx = rect.x + rect.width / 2.0;
            let year = treaty.year.to_string();
            draw_centered(d, &year, tcx, rect.y + 14.0, 24, with_alpha(ACCENT_BLUE, alpha));
            let mut ty = rect.y + 48.0;
            for line in wrap(treaty.title, (rect.width - 20.0) as i32, |s| {
                measure_text(s, 16)
            }) {
                draw_centered(d, &line, tcx, ty, 16, with_alpha(TEXT_DIM, alpha));
                ty += 20.0;
            }
            draw_centered(
                d,
                treaty.summary,
                tcx,
                rect.y + TILE_HEIGHT - 38.0,
                14,
                with_alpha(ACCENT_BLUE, alpha),
            );
            draw_centered(
                d,
                "click for details",
                tcx,
                rect.y + TILE_HEIGHT - 20.0,
                13,
                with_alpha(ACCENT_AMBER, alpha),
            );
        }

        draw_quote_box(
            d,
            banner,
            cx,
            area.y + TILE_HEIGHT + 40.0,
            frame.width - 300.0,
            22,
            ACCENT_AMBER,
            ACCENT_AMBER,
            alpha,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::space_law_deck;

    fn deck() -> Deck {
        space_law_deck().unwrap()
    }

    #[test]
    fn remounting_resets_local_card_state() {
        let deck = deck();
        let mut pane = SlidePane::new(2, &deck); // "What is Space Law?", 3 cards
        let frame = frame_rect(1600.0, 900.0);
        let area = cards_area(frame, false);
        let rects = card::grid_rects(area, &pane.cards.heights(), 3, card::CARD_GAP);
        let inside = Vector2::new(rects[1].x + 5.0, rects[1].y + 5.0);

        pane.handle_click(inside, &deck, 1600.0, 900.0);
        assert!(pane.cards.is_expanded(1));

        // Navigate away and back; the expansion must not survive the remount.
        pane.sync(3, &deck);
        pane.sync(2, &deck);
        assert!(!pane.cards.is_expanded(1));
    }

    #[test]
    fn sync_to_the_same_index_keeps_state_and_transition() {
        let deck = deck();
        let mut pane = SlidePane::new(0, &deck);
        pane.sync(0, &deck);
        assert!(pane.transition.done());
        pane.sync(1, &deck);
        assert!(!pane.transition.done());
        assert_eq!(pane.transition.from, Some(0));
        assert_eq!(pane.mounted, 1);
    }

    #[test]
    fn clicking_a_treaty_tile_opens_its_panel() {
        let deck = deck();
        let mut pane = SlidePane::new(5, &deck); // treaty board
        let frame = frame_rect(1600.0, 900.0);
        let rects = card::grid_rects(tiles_area(frame), &vec![TILE_HEIGHT; 5], 5, 16.0);
        let on_third = Vector2::new(
            rects[2].x + rects[2].width / 2.0,
            rects[2].y + rects[2].height / 2.0,
        );
        pane.handle_click(on_third, &deck, 1600.0, 900.0);
        assert_eq!(pane.panel.as_ref().map(|p| p.treaty), Some(2));
    }

    #[test]
    fn panel_goes_away_after_a_backdrop_click_and_its_close_animation() {
        let deck = deck();
        let mut pane = SlidePane::new(5, &deck);
        let frame = frame_rect(1600.0, 900.0);
        let rects = card::grid_rects(tiles_area(frame), &vec![TILE_HEIGHT; 5], 5, 16.0);
        pane.handle_click(
            Vector2::new(rects[0].x + 2.0, rects[0].y + 2.0),
            &deck,
            1600.0,
            900.0,
        );
        assert!(pane.panel.is_some());
        pane.update(PANEL_TRANSITION);
        pane.handle_click(Vector2::new(10.0, 10.0), &deck, 1600.0, 900.0);
        pane.update(PANEL_TRANSITION * 2.0);
        assert!(pane.panel.is_none());
    }

    #[test]
    fn clicks_on_a_cover_slide_do_nothing() {
        let deck = deck();
        let mut pane = SlidePane::new(0, &deck);
        pane.handle_click(Vector2::new(800.0, 450.0), &deck, 1600.0, 900.0);
        assert!(pane.panel.is_none());
    }
}
