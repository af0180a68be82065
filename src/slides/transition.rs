use raylib::prelude::*;

use crate::constants::SLIDE_TRANSITION;

/// Enter/exit animation between two mounted slides. While it runs, the
/// outgoing slide (`from`) eases out to the left as the incoming one eases
/// in from the right; once done only the incoming slide is mounted.
pub struct Transition {
    t: f32,
    pub from: Option<usize>,
}

impl Transition {
    /// A transition that is already settled (initial mount).
    pub fn settled() -> Self {
        Self {
            t: SLIDE_TRANSITION,
            from: None,
        }
    }

    pub fn start(from: usize) -> Self {
        Self {
            t: 0.0,
            from: Some(from),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.t = (self.t + dt).min(SLIDE_TRANSITION);
        if self.done() {
            self.from = None;
        }
    }

    pub fn done(&self) -> bool {
        self.t >= SLIDE_TRANSITION
    }

    /// Eased progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.done() {
            return 1.0;
        }
        ease::cubic_out(self.t, 0.0, 1.0, SLIDE_TRANSITION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_settles_at_one() {
        let mut tr = Transition::start(3);
        assert_eq!(tr.progress(), 0.0);
        assert_eq!(tr.from, Some(3));
        tr.update(SLIDE_TRANSITION);
        assert!(tr.done());
        assert_eq!(tr.progress(), 1.0);
        assert_eq!(tr.from, None);
    }

    #[test]
    fn progress_is_monotonic() {
        let mut tr = Transition::start(0);
        let mut last = tr.progress();
        for _ in 0..60 {
            tr.update(SLIDE_TRANSITION / 50.0);
            let p = tr.progress();
            assert!(p >= last);
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn settled_transition_has_no_outgoing_slide() {
        let tr = Transition::settled();
        assert!(tr.done());
        assert_eq!(tr.progress(), 1.0);
        assert_eq!(tr.from, None);
    }
}
