//! Site content
//!
//! Static copy for every section of the page.

use std::fmt;

/// Tagged page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    WhoWeAre,
    Founder,
    WhatWeDo,
    BrandExperience,
    Footer,
}

impl SectionId {
    /// Anchor tag, as used by the dark-section list in the config
    pub fn tag(&self) -> &'static str {
        match self {
            SectionId::Hero => "section-hero",
            SectionId::WhoWeAre => "section-who-we-are",
            SectionId::Founder => "section-founder",
            SectionId::WhatWeDo => "section-what-we-do",
            SectionId::BrandExperience => "section-brand-experience",
            SectionId::Footer => "section-footer",
        }
    }

    pub fn from_tag(tag: &str) -> Option<SectionId> {
        [
            SectionId::Hero,
            SectionId::WhoWeAre,
            SectionId::Founder,
            SectionId::WhatWeDo,
            SectionId::BrandExperience,
            SectionId::Footer,
        ]
        .into_iter()
        .find(|id| id.tag() == tag)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One hero carousel slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub id: u8,
    /// Caption lines, animated individually
    pub lines: &'static [&'static str],
    /// Dominant colour of the background footage
    pub tint: (u8, u8, u8),
}

pub const SLIDES: [Slide; 4] = [
    Slide {
        id: 1,
        lines: &["HOSPITALITY.", "STRUCTURED BY DATA"],
        tint: (47, 78, 84),
    },
    Slide {
        id: 2,
        lines: &["EXPERIENCE.", "DESIGNED WITH INTELLIGENCE"],
        tint: (88, 70, 52),
    },
    Slide {
        id: 3,
        lines: &["PERFORMANCE.", "ENGINEERED TO ENDURE"],
        tint: (36, 52, 74),
    },
    Slide {
        id: 4,
        lines: &["THIS IS", "SMARTOTELS"],
        tint: (60, 60, 64),
    },
];

/// Hero call-to-action buttons
pub const HERO_BUTTONS: [(&str, SectionId); 2] = [
    ("Performance + Intelligence", SectionId::WhatWeDo),
    ("Brand + Experience", SectionId::BrandExperience),
];

/// Navigation menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub target: SectionId,
    pub key: char,
}

pub const MENU: [MenuItem; 3] = [
    MenuItem {
        label: "Who We Are",
        target: SectionId::WhoWeAre,
        key: 'w',
    },
    MenuItem {
        label: "What We Do",
        target: SectionId::WhatWeDo,
        key: 'd',
    },
    MenuItem {
        label: "Contact",
        target: SectionId::Footer,
        key: 'c',
    },
];

/// Image + text story block in "who we are"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Story {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    /// Image on the left when true
    pub image_left: bool,
}

pub const STORIES: [Story; 2] = [
    Story {
        eyebrow: "WHY SMARTOTELS?",
        heading: "Intelligence is our foundation. Hospitality is our language.",
        body: "Smartotels operates at the intersection of hospitality, finance, and design. \
               We apply data-native intelligence and disciplined structuring to an industry \
               shaped by emotion and experience. The result is a platform built for investors \
               and operators who demand clarity, performance, and enduring value.",
        image_left: true,
    },
    Story {
        eyebrow: "OUR VISION",
        heading: "We believe hospitality isn't just experienced. It's engineered.",
        body: "We see hospitality as a living, intelligent ecosystem where design and \
               performance coexist. Our vision is built on precision, human experience, and an \
               intelligence designed to endure.",
        image_left: false,
    },
];

pub struct Founder {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const FOUNDER: Founder = Founder {
    eyebrow: "FOUNDER'S PERSPECTIVE",
    heading: "Hospitality is not a service. It is a system of intelligent human interactions.",
    name: "Tarek M. Daouk",
    role: "FOUNDER + MANAGING PARTNER",
    paragraphs: &[
        "Smartotels was created from a belief that hospitality can be both profoundly human \
         and deeply intelligent.",
        "The founder's perspective comes from decades across investment, operations, \
         technology, and design, where clarity and emotion work together to shape \
         destinations that endure.",
        "This perspective understands that meaningful experiences do not happen by chance; \
         they emerge from precision, intention, technological insight, and an understanding \
         of how people and places connect.",
        "It is this philosophy that guides Smartotels in building hospitality systems that \
         perform, resonate, and last.",
    ],
};

/// Service card in "what we do" and "brand + experience"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub tagline: &'static str,
    pub body: &'static [&'static str],
    pub highlight: &'static str,
}

pub const WHAT_WE_DO_TITLE: &str = "PERFORMANCE + INTELLIGENCE";

pub const WHAT_WE_DO: [Card; 3] = [
    Card {
        title: "Asset Management",
        tagline: "Performance. Discipline. Value.",
        body: &[
            "Smartotels strengthens profitability through rigorous operational oversight and \
             strategic decision making.",
            "We focus on revenue growth, cost efficiency, brand integrity, and guest experience \
             to elevate asset performance.",
        ],
        highlight: "The goal is clear: deliver stronger results and increase long term value.",
    },
    Card {
        title: "Intelligence + Foresight",
        tagline: "Insight that drives decisions.",
        body: &[
            "Smartotels uses artificial intelligence, analytics, and operational data to reveal \
             performance drivers and market dynamics.",
            "We surface the information that matters most: demand shifts, pricing \
             opportunities, competitive positioning, and operational risk.",
        ],
        highlight: "Intelligence supports better strategy, clearer decisions, and more resilient \
                    assets.",
    },
    Card {
        title: "Development + Advisory",
        tagline: "Strategy with discipline. Execution with clarity.",
        body: &[
            "Smartotels supports owners, investors, and governments in developing, \
             repositioning, and restructuring hospitality assets.",
            "Our work includes concept creation, feasibility, underwriting, operator selection, \
             business planning, and execution oversight.",
        ],
        highlight: "The aim is straightforward: build stronger assets and create durable \
                    hospitality platforms.",
    },
];

pub const BRAND_TITLE: &str = "BRAND + EXPERIENCE";

pub const BRAND_EXPERIENCE: [Card; 3] = [
    Card {
        title: "Hospitality Technology",
        tagline: "Technology that strengthens operations and elevates experience.",
        body: &["Smartotels implements tools and systems that improve efficiency, support \
                 staff, enhance service delivery, and create smoother guest interactions."],
        highlight: "The approach is simple: use technology to improve performance without \
                    compromising the human experience.",
    },
    Card {
        title: "Experience Design",
        tagline: "Design that shapes emotion and reinforces performance.",
        body: &["Smartotels develops guest journeys that are intentional, clear, and aligned \
                 with the identity of the asset."],
        highlight: "Our focus is on moments, flow, service touchpoints, and operational harmony \
                    that create meaningful connection and stronger outcomes.",
    },
    Card {
        title: "Brand Architecture",
        tagline: "Identity with purpose. Positioning with clarity. Value with longevity.",
        body: &["Smartotels builds hospitality brands with distinct voice, visual identity, and \
                 strategic positioning."],
        highlight: "We define the principles, narrative, and market presence that allow a brand \
                    to attract the right guests and support higher performance.",
    },
];

pub struct Contact {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub email: &'static str,
}

pub const CONTACT: Contact = Contact {
    eyebrow: "CONTACT US",
    heading: "Let us build something enduring.",
    paragraphs: &[
        "Smartotels is based in Dubai and operates across global markets. We work with \
         investors, owners, operators, and institutions that see hospitality as a system of \
         intelligence and performance.",
        "For partnerships, advisory, or asset discussions, reach out directly.",
    ],
    email: "info@smartotels.com",
};

pub const COMPANY: &str = "Smartotels LLC";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for id in [SectionId::Hero, SectionId::WhatWeDo, SectionId::Footer] {
            assert_eq!(SectionId::from_tag(id.tag()), Some(id));
        }
        assert_eq!(SectionId::from_tag("section-founder"), Some(SectionId::Founder));
        assert_eq!(SectionId::from_tag("section-vault"), None);
    }

    #[test]
    fn test_menu_keys_are_unique() {
        let mut keys: Vec<char> = MENU.iter().map(|m| m.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), MENU.len());
    }

    #[test]
    fn test_every_slide_has_caption() {
        assert!(SLIDES.iter().all(|s| !s.lines.is_empty()));
    }
}
