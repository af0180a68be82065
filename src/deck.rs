use std::time::Duration;

use anyhow::{Result, ensure};

/// Palette slot a slide or card draws its chrome with. The actual colors
/// live in `constants`; content only names the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Red,
    Amber,
}

/// Small vector emblem drawn above a heading. Purely decorative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emblem {
    Globe,
    Rocket,
    Scales,
    Book,
    Shield,
    Target,
    Warning,
    Trend,
    People,
    Satellite,
    Gavel,
}

/// One expandable card: collapsed shows the title, a click reveals the
/// summary and detail text.
#[derive(Debug)]
pub struct Card {
    pub title: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
    pub emblem: Emblem,
    pub accent: Accent,
}

/// One treaty tile on the treaty board; clicking it opens the detail panel.
#[derive(Debug)]
pub struct Treaty {
    pub year: u16,
    pub title: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
}

/// Highlighted case box under a card grid (e.g. the Cosmos 954 incident).
#[derive(Debug)]
pub struct Callout {
    pub title: &'static str,
    pub text: &'static str,
    pub accent: Accent,
}

/// Authored content of a single slide. Rendering lives in `slides`; this is
/// pure data.
#[derive(Debug)]
pub enum SlideBody {
    /// Opening / closing slide: a glowing headline over a quote panel.
    Cover {
        emblem: Emblem,
        headline: &'static str,
        tagline: Option<&'static str>,
        quote: &'static str,
        question: Option<(&'static str, &'static str)>,
        footer: &'static str,
    },
    /// Heading, a lead quote, a big central question and labelled paragraphs.
    Prose {
        emblem: Emblem,
        heading: &'static str,
        lead: &'static str,
        question: &'static str,
        sections: Vec<(&'static str, &'static str)>,
    },
    /// A grid of expandable cards with optional banners around it.
    Cards {
        emblem: Emblem,
        heading: &'static str,
        accent: Accent,
        intro: Option<&'static str>,
        cards: Vec<Card>,
        callout: Option<Callout>,
        banner: Option<&'static str>,
    },
    /// Clickable treaty tiles; each opens the sliding detail panel.
    Treaties {
        emblem: Emblem,
        heading: &'static str,
        hint: &'static str,
        entries: Vec<Treaty>,
        banner: &'static str,
    },
}

/// A slide plus how long autoplay shows it.
#[derive(Debug)]
pub struct SlideDescriptor {
    pub body: SlideBody,
    pub duration: Duration,
}

/// The ordered, immutable slide registry. Built once at startup; order
/// defines navigation order for the lifetime of the process.
#[derive(Debug)]
pub struct Deck {
    slides: Vec<SlideDescriptor>,
}

impl Deck {
    pub fn new(slides: Vec<SlideDescriptor>) -> Result<Self> {
        ensure!(!slides.is_empty(), "a deck needs at least one slide");
        for (i, slide) in slides.iter().enumerate() {
            ensure!(
                !slide.duration.is_zero(),
                "slide {i} has a zero display duration"
            );
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Total over `[0, len)` — the controller guarantees the index invariant.
    /// An out-of-range index is a programming error: asserted in debug
    /// builds, clamped to the first slide in release.
    pub fn get(&self, index: usize) -> &SlideDescriptor {
        debug_assert!(
            index < self.slides.len(),
            "slide index {index} out of range (deck has {})",
            self.slides.len()
        );
        self.slides.get(index).unwrap_or(&self.slides[0])
    }

    pub fn duration(&self, index: usize) -> Duration {
        self.get(index).duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cover(secs: u64) -> SlideDescriptor {
        SlideDescriptor {
            body: SlideBody::Cover {
                emblem: Emblem::Globe,
                headline: "H",
                tagline: None,
                quote: "q",
                question: None,
                footer: "f",
            },
            duration: Duration::from_secs(secs),
        }
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert!(Deck::new(Vec::new()).is_err());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = Deck::new(vec![cover(5), cover(0)]).unwrap_err();
        assert!(err.to_string().contains("slide 1"));
    }

    #[test]
    fn get_is_total_over_the_valid_range() {
        let deck = Deck::new(vec![cover(5), cover(45)]).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.duration(0), Duration::from_secs(5));
        assert_eq!(deck.duration(1), Duration::from_secs(45));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn out_of_range_clamps_to_the_first_slide_in_release() {
        let deck = Deck::new(vec![cover(5), cover(45)]).unwrap();
        assert_eq!(deck.duration(99), Duration::from_secs(5));
    }
}
