//! The authored space-law deck. Content only; no rendering logic here.

use std::time::Duration;

use anyhow::Result;

use crate::deck::{Accent, Callout, Card, Deck, Emblem, SlideBody, SlideDescriptor, Treaty};

fn slide(body: SlideBody, millis: u64) -> SlideDescriptor {
    SlideDescriptor {
        body,
        duration: Duration::from_millis(millis),
    }
}

fn blue_card(title: &'static str, summary: &'static str, detail: &'static str, emblem: Emblem) -> Card {
    Card {
        title,
        summary,
        detail,
        emblem,
        accent: Accent::Blue,
    }
}

fn red_card(title: &'static str, summary: &'static str, detail: &'static str, emblem: Emblem) -> Card {
    Card {
        title,
        summary,
        detail,
        emblem,
        accent: Accent::Red,
    }
}

/// Builds the full ten-slide presentation in its authored order.
pub fn space_law_deck() -> Result<Deck> {
    Deck::new(vec![
        slide(title_slide(), 5_000),
        slide(origin_slide(), 45_000),
        slide(what_is_slide(), 45_000),
        slide(history_slide(), 45_000),
        slide(principles_slide(), 45_000),
        slide(treaties_slide(), 45_000),
        slide(applications_slide(), 45_000),
        slide(challenges_slide(), 45_000),
        slide(future_slide(), 45_000),
        slide(conclusion_slide(), 30_000),
    ])
}

fn title_slide() -> SlideBody {
    SlideBody::Cover {
        emblem: Emblem::Globe,
        headline: "SPACE LAW",
        tagline: Some("The law beyond Earth"),
        quote: "\"Even in the void of the cosmos there are rules that guide us.\"",
        question: None,
        footer: "Sary Fernanda Payan Bastidas - Universidad Icesi - 2025",
    }
}

fn origin_slide() -> SlideBody {
    SlideBody::Prose {
        emblem: Emblem::Rocket,
        heading: "The origin of the question",
        lead: "\"When Sputnik launched in 1957, a new question was born:\"",
        question: "Who does space belong to?",
        sections: vec![
            (
                "Historical context:",
                "The Cold War drove an unprecedented space race between the United \
                 States and the Soviet Union. Every launch raised new legal questions \
                 with no answer.",
            ),
            (
                "The problem:",
                "Who was liable if a satellite caused damage? Could a country claim \
                 sovereignty over the Moon? Was it legal to use space for military \
                 purposes?",
            ),
            (
                "The solution:",
                "The international community recognized the urgent need for a legal \
                 framework governing space activities before it was too late.",
            ),
        ],
    }
}

fn what_is_slide() -> SlideBody {
    SlideBody::Cards {
        emblem: Emblem::Scales,
        heading: "What is Space Law?",
        accent: Accent::Blue,
        intro: None,
        cards: vec![
            blue_card(
                "Definition",
                "A branch of public international law governing activity beyond \
                 Earth's atmosphere.",
                "It emerged in response to space exploration and the need to \
                 regulate activities off our planet.",
                Emblem::Scales,
            ),
            blue_card(
                "Reach",
                "It binds states, private companies and individuals engaged in \
                 space activities.",
                "Every space actor must comply with the international treaties and \
                 norms.",
                Emblem::Globe,
            ),
            blue_card(
                "Goal",
                "It seeks to keep space as the common heritage of humankind.",
                "It promotes the peaceful use of space and international \
                 cooperation for the benefit of all.",
                Emblem::Target,
            ),
        ],
        callout: None,
        banner: None,
    }
}

fn history_slide() -> SlideBody {
    SlideBody::Cards {
        emblem: Emblem::Book,
        heading: "A brief history and evolution",
        accent: Accent::Blue,
        intro: None,
        cards: vec![
            blue_card(
                "1957",
                "Sputnik: first artificial satellite, launched by the Soviet Union.",
                "The launch of Sputnik opened the space age and created the first \
                 need for international legal regulation of outer space.",
                Emblem::Rocket,
            ),
            blue_card(
                "1967",
                "Outer Space Treaty: the basic cosmic constitution.",
                "It set the founding principles: peaceful use of space, \
                 non-appropriation, state responsibility and international \
                 cooperation.",
                Emblem::Rocket,
            ),
            blue_card(
                "1979",
                "Moon Agreement: regulation of lunar resources.",
                "It declared the Moon and its resources the common heritage of \
                 humankind, setting guidelines for the future exploitation of \
                 space resources.",
                Emblem::Rocket,
            ),
            blue_card(
                "2000",
                "Private companies: SpaceX, Blue Origin and the New Space.",
                "Private entrants revolutionized the sector, forcing updates to \
                 the legal framework to govern these new commercial activities.",
                Emblem::Rocket,
            ),
        ],
        callout: None,
        banner: Some("\"From political control to cooperation and space commerce\""),
    }
}

fn principles_slide() -> SlideBody {
    SlideBody::Cards {
        emblem: Emblem::Shield,
        heading: "Fundamental principles",
        accent: Accent::Blue,
        intro: None,
        cards: vec![
            blue_card(
                "Peaceful use",
                "Militarizing space is forbidden.",
                "Space must be used exclusively for peaceful purposes; placing \
                 nuclear weapons or any weapon of mass destruction in orbit is \
                 prohibited.",
                Emblem::Scales,
            ),
            blue_card(
                "Non-appropriation",
                "Nobody can \"own\" a planet.",
                "No state may claim sovereignty over outer space, the Moon or any \
                 other celestial body by occupation or any other means.",
                Emblem::Globe,
            ),
            blue_card(
                "Responsibility",
                "States answer for what they launch.",
                "States are internationally responsible for national space \
                 activities, whether carried out by government bodies or by \
                 non-governmental entities.",
                Emblem::Gavel,
            ),
            blue_card(
                "Cooperation",
                "Space is for everyone.",
                "Cooperation and mutual assistance in space activities is \
                 promoted, above all in the rescue of astronauts in distress.",
                Emblem::People,
            ),
            blue_card(
                "Freedom",
                "Any nation may explore and do research.",
                "All states are free to explore and use outer space without \
                 discrimination, on equal terms and in accordance with \
                 international law.",
                Emblem::Rocket,
            ),
        ],
        callout: None,
        banner: Some("\"Space has no owner, but it does have rules.\""),
    }
}

fn treaties_slide() -> SlideBody {
    SlideBody::Treaties {
        emblem: Emblem::Book,
        heading: "Key international treaties",
        hint: "Click a treaty to see the details",
        entries: vec![
            Treaty {
                year: 1967,
                title: "Outer Space Treaty",
                summary: "The basic cosmic constitution",
                detail: "It establishes that outer space, including the Moon and \
                         other celestial bodies, is the common heritage of \
                         humankind. It forbids national appropriation and nuclear \
                         weapons in orbit, and restricts space to peaceful uses.",
            },
            Treaty {
                year: 1968,
                title: "Rescue Agreement",
                summary: "Rescue of astronauts",
                detail: "It obliges states to assist astronauts in the event of \
                         accident, distress or unscheduled landing, treating \
                         astronauts as envoys of humankind.",
            },
            Treaty {
                year: 1972,
                title: "Liability Convention",
                summary: "Damage by space objects",
                detail: "It establishes the absolute liability of a launching \
                         state for damage caused by its space objects on Earth or \
                         in flight. The launching state answers in full for any \
                         damage its objects cause.",
            },
            Treaty {
                year: 1975,
                title: "Registration Convention",
                summary: "Registry of space objects",
                detail: "It requires every object launched into outer space to be \
                         registered with the United Nations, with data on orbit, \
                         function and basic parameters, maintaining an \
                         international registry of space activity.",
            },
            Treaty {
                year: 1979,
                title: "Moon Agreement",
                summary: "Lunar resources",
                detail: "It declares the Moon and its natural resources the common \
                         heritage of humankind and plans an international regime \
                         for exploiting them, though the main space powers never \
                         ratified it.",
            },
        ],
        banner: "\"These treaties are the equivalent of a cosmic constitution.\"",
    }
}

fn applications_slide() -> SlideBody {
    SlideBody::Cards {
        emblem: Emblem::Target,
        heading: "Practical applications",
        accent: Accent::Blue,
        intro: None,
        cards: vec![
            blue_card(
                "Satellite registry",
                "Every launched object must be registered with the UN.",
                "Goal: guarantee traceability and transparency of space \
                 activities. Each state must report orbit, function and operating \
                 parameters.",
                Emblem::Satellite,
            ),
            red_card(
                "Space debris",
                "More than 500,000 objects in orbit.",
                "Debris from past missions collides constantly. Regulation for \
                 cleanup and collision prevention is urgently needed.",
                Emblem::Warning,
            ),
            blue_card(
                "Liability for damage",
                "States answer for the objects they launch.",
                "Absolute liability of the launching state. Precedent: the USSR \
                 paid Canada 3 million CAD over Cosmos 954 (1978).",
                Emblem::Gavel,
            ),
            blue_card(
                "Data commerce",
                "The satellite data market keeps growing.",
                "GPS, communications and satellite imagery generate billions. \
                 Regulation of intellectual property, privacy and sovereignty \
                 over space data.",
                Emblem::Trend,
            ),
        ],
        callout: Some(Callout {
            title: "Real case: Cosmos 954 (1978)",
            text: "A Soviet satellite with a nuclear reactor fell on Canada. The \
                   USSR had to pay 3 million CAD for radioactive contamination.",
            accent: Accent::Red,
        }),
        banner: None,
    }
}

fn challenges_slide() -> SlideBody {
    SlideBody::Cards {
        emblem: Emblem::Warning,
        heading: "Challenges of the present",
        accent: Accent::Red,
        intro: Some("\"Space is not as empty as it looks\""),
        cards: vec![
            red_card(
                "Space debris",
                "More than 500,000 objects.",
                "Debris from past missions collides constantly. Cleanup, \
                 prevention and orbital waste management are urgent before \
                 catastrophic collisions render valuable orbits unusable.",
                Emblem::Warning,
            ),
            red_card(
                "Space mining",
                "Whose resources are they?",
                "Asteroids rich in precious metals raise property questions. Who \
                 may extract resources? How are profits shared? Sovereignty or \
                 commons?",
                Emblem::Target,
            ),
            red_card(
                "Militarization",
                "Spy satellites and orbital weapons.",
                "Growing use of space assets for defense, surveillance and \
                 potential offense. The line between peaceful and military blurs, \
                 threatening an arms race in orbit.",
                Emblem::Shield,
            ),
            red_card(
                "Private companies",
                "New powers without a flag.",
                "SpaceX, Blue Origin and Virgin Galactic challenge the \
                 traditional state model. Who regulates them? How is liability \
                 assigned? How transparent must private operations be?",
                Emblem::Rocket,
            ),
        ],
        callout: None,
        banner: Some("\"Space law ages faster than rockets do.\""),
    }
}

fn future_slide() -> SlideBody {
    SlideBody::Cards {
        emblem: Emblem::Trend,
        heading: "The future of Space Law",
        accent: Accent::Blue,
        intro: None,
        cards: vec![
            blue_card(
                "Space colonies",
                "The Moon and Mars as new homes.",
                "Residence rights, territorial jurisdiction and rules of \
                 coexistence must be defined off Earth. Which law applies to \
                 someone born on Mars?",
                Emblem::Globe,
            ),
            blue_card(
                "Space tourism",
                "Private space travelers.",
                "Safety rules, insurance, civil liability and training standards \
                 for citizens who travel to space as tourists rather than \
                 astronauts.",
                Emblem::Rocket,
            ),
            blue_card(
                "National legislation",
                "Each country develops its own rules.",
                "The United States, Luxembourg and the United Arab Emirates \
                 already have space mining laws; Colombia and other Latin \
                 American countries are drafting their own frameworks.",
                Emblem::Target,
            ),
        ],
        callout: None,
        banner: Some(
            "\"We need laws that protect not only Earth, but the cosmos we will \
             inhabit.\"",
        ),
    }
}

fn conclusion_slide() -> SlideBody {
    SlideBody::Cover {
        emblem: Emblem::People,
        headline: "CONCLUSION",
        tagline: None,
        quote: "\"Outer space has no borders, but our responsibility must reach \
                them.\"",
        question: Some((
            "A question for the audience:",
            "\"And if someone is born off Earth... under which law will they \
             live?\"",
        )),
        footer: "Thank you for your attention",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_has_the_ten_authored_slides() {
        let deck = space_law_deck().unwrap();
        assert_eq!(deck.len(), 10);
    }

    #[test]
    fn authored_durations_survive() {
        let deck = space_law_deck().unwrap();
        assert_eq!(deck.duration(0), Duration::from_secs(5));
        assert_eq!(deck.duration(1), Duration::from_secs(45));
        assert_eq!(deck.duration(9), Duration::from_secs(30));
    }

    #[test]
    fn cover_opens_and_closes_the_deck() {
        let deck = space_law_deck().unwrap();
        assert!(matches!(deck.get(0).body, SlideBody::Cover { .. }));
        assert!(matches!(deck.get(9).body, SlideBody::Cover { .. }));
        assert!(matches!(deck.get(5).body, SlideBody::Treaties { .. }));
    }
}
