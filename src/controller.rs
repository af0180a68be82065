use std::time::Duration;

use log::debug;

/// The repeating autoplay timer, owned by the [`Controller`].
///
/// There is no OS timer behind this: the frame loop feeds elapsed wall time
/// into [`Controller::tick`] and the timer fires once per full period it has
/// accumulated. Cancelling playback is simply dropping this value, so a
/// cancelled timer can never fire a stale tick.
struct AutoplayTimer {
    period: Duration,
    elapsed: Duration,
}

impl AutoplayTimer {
    fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    /// Accumulates `dt` and returns how many full periods elapsed.
    fn advance_by(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}

/// Navigation and playback state of the presentation.
///
/// The slide index always stays in `[0, len)`: navigation wraps around on
/// both ends. Playback state is the presence of the owned timer, so
/// "playing" and "a timer exists" cannot disagree, and at most one timer is
/// ever live. The timer dies with the controller on every exit path.
pub struct Controller {
    len: usize,
    index: usize,
    timer: Option<AutoplayTimer>,
}

impl Controller {
    /// `len` is the number of slides, at least 1 (the deck enforces this).
    pub fn new(len: usize) -> Self {
        debug_assert!(len >= 1, "controller needs at least one slide");
        Self {
            len,
            index: 0,
            timer: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// Fraction of the deck covered so far, for the progress bar.
    /// Recomputed from the live index on every call, never cached.
    pub fn progress(&self) -> f32 {
        (self.index + 1) as f32 / self.len as f32
    }

    /// Moves to the next slide, wrapping past the last one.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Moves to the previous slide, wrapping before the first one.
    pub fn retreat(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jumps straight to a slide (used for the --start flag).
    /// Out-of-range input wraps like repeated advances would.
    pub fn seek(&mut self, index: usize) {
        self.index = index % self.len;
    }

    /// Starts autoplay when paused, stops it when playing.
    ///
    /// `period` is the display duration of the slide current at the moment
    /// playback starts. It is captured once here and reused for every
    /// subsequent tick, matching the behavior slide authors relied on: after
    /// the first tick the pacing does not adapt to each slide's own
    /// duration.
    pub fn toggle_playback(&mut self, period: Duration) {
        if self.timer.take().is_some() {
            debug!("autoplay paused at slide {}", self.index);
        } else {
            debug!("autoplay started at slide {} ({:?} per tick)", self.index, period);
            self.timer = Some(AutoplayTimer::new(period));
        }
    }

    /// Stops playback and returns to the first slide. Idempotent; cancelling
    /// a timer that does not exist is a no-op.
    pub fn reset(&mut self) {
        self.timer = None;
        self.index = 0;
    }

    /// Cancels playback without touching the index.
    pub fn stop(&mut self) {
        self.timer = None;
    }

    /// Frame-loop hook. Feeds elapsed time to the armed timer, advancing one
    /// slide per fired period. Returns the number of advances performed so
    /// the caller can tell timer motion from user motion.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.advance_by(dt),
            None => 0,
        };
        for _ in 0..fired {
            self.advance();
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(5000);

    fn controller() -> Controller {
        Controller::new(10)
    }

    #[test]
    fn advance_and_retreat_wrap_around() {
        let mut c = controller();
        c.seek(9);
        c.advance();
        assert_eq!(c.index(), 0);
        c.retreat();
        assert_eq!(c.index(), 9);
    }

    #[test]
    fn index_stays_in_range_under_any_navigation_sequence() {
        // Pseudo-random walk over several deck sizes; the index must never
        // leave [0, len).
        for len in [1, 2, 3, 7, 10] {
            let mut c = Controller::new(len);
            let mut state: u32 = 0x2545_f491;
            for _ in 0..1000 {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                if state & 1 == 0 {
                    c.advance();
                } else {
                    c.retreat();
                }
                assert!(c.index() < len);
            }
        }
    }

    #[test]
    fn advance_then_retreat_is_identity() {
        let mut c = controller();
        for start in 0..10 {
            c.seek(start);
            c.advance();
            c.retreat();
            assert_eq!(c.index(), start);
            c.retreat();
            c.advance();
            assert_eq!(c.index(), start);
        }
    }

    #[test]
    fn toggling_twice_without_a_tick_changes_nothing() {
        let mut c = controller();
        c.toggle_playback(TICK);
        assert!(c.is_playing());
        c.toggle_playback(TICK);
        assert!(!c.is_playing());
        assert_eq!(c.index(), 0);
        // Waiting past the original period must not advance anything.
        assert_eq!(c.tick(TICK * 3), 0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn tick_advances_once_per_period() {
        let mut c = controller();
        c.toggle_playback(TICK);
        assert_eq!(c.tick(Duration::from_millis(4999)), 0);
        assert_eq!(c.index(), 0);
        assert_eq!(c.tick(Duration::from_millis(1)), 1);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn period_is_captured_at_play_start_not_per_slide() {
        // Slide 0 shows for 5 s, slide 1 is authored at 45 s; the armed
        // period stays the one captured when playback started.
        let mut c = controller();
        c.toggle_playback(TICK);
        c.tick(TICK);
        assert_eq!(c.index(), 1);
        // Another 5 s fires again even though slide 1 asks for 45 s.
        assert_eq!(c.tick(TICK), 1);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn tick_fires_multiple_times_for_a_long_gap() {
        let mut c = controller();
        c.toggle_playback(TICK);
        assert_eq!(c.tick(TICK * 3), 3);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn reset_returns_to_start_and_kills_the_timer() {
        let mut c = controller();
        c.seek(7);
        c.toggle_playback(TICK);
        c.tick(Duration::from_millis(2500)); // mid-timer
        c.reset();
        assert_eq!(c.index(), 0);
        assert!(!c.is_playing());
        // No late tick from the cancelled timer.
        assert_eq!(c.tick(TICK * 2), 0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn reset_when_already_at_start_is_a_no_op() {
        let mut c = controller();
        c.reset();
        c.reset();
        assert_eq!(c.index(), 0);
        assert!(!c.is_playing());
    }

    #[test]
    fn stop_while_playing_leaves_no_timer() {
        let mut c = controller();
        c.seek(3);
        c.toggle_playback(TICK);
        c.stop();
        assert!(!c.is_playing());
        assert_eq!(c.index(), 3);
        assert_eq!(c.tick(TICK), 0);
    }

    #[test]
    fn single_slide_deck_wraps_onto_itself() {
        let mut c = Controller::new(1);
        c.advance();
        assert_eq!(c.index(), 0);
        c.retreat();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn progress_reflects_the_live_index() {
        let mut c = controller();
        assert_eq!(c.progress(), 0.1);
        c.advance();
        assert_eq!(c.progress(), 0.2);
        c.seek(9);
        assert_eq!(c.progress(), 1.0);
    }

    #[test]
    fn tick_while_paused_does_nothing() {
        let mut c = controller();
        assert_eq!(c.tick(Duration::from_secs(60)), 0);
        assert_eq!(c.index(), 0);
    }
}
