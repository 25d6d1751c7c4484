//! Copy for the landing page. Kept apart from the markup so the section
//! components only decide layout.

use crate::components::icon::Glyph;
use crate::config::images;
use crate::controller::section::Section;

pub struct NavLink {
    pub label: &'static str,
    pub target: Section,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Our Story", target: Section::Origin },
    NavLink { label: "Mission", target: Section::Mission },
    NavLink { label: "Gatherings", target: Section::Gatherings },
    NavLink { label: "Join Us", target: Section::Join },
];

pub struct Feature {
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MISSION_VALUES: [Feature; 3] = [
    Feature {
        glyph: Glyph::Heart,
        title: "Character",
        description: "A beautiful voice is not only about tone. It is about character.",
    },
    Feature {
        glyph: Glyph::Sparkles,
        title: "Growth",
        description: "We believe in continuous growth and transformation.",
    },
    Feature {
        glyph: Glyph::Music,
        title: "Stewardship",
        description: "Your voice is a gift to be nurtured and shared wisely.",
    },
];

pub const OFFERINGS: [Feature; 6] = [
    Feature {
        glyph: Glyph::Mic,
        title: "Vocal Training & Technique",
        description: "Because passion without skill leads to frustration.",
    },
    Feature {
        glyph: Glyph::Heart,
        title: "Vocal Health & Warm-ups",
        description: "Because discipline protects longevity.",
    },
    Feature {
        glyph: Glyph::BookOpen,
        title: "Songwriting",
        description: "Because your story deserves language.",
    },
    Feature {
        glyph: Glyph::Users,
        title: "Handling Criticism",
        description: "Because every serious vocalist must grow beyond applause.",
    },
    Feature {
        glyph: Glyph::Sparkles,
        title: "Spiritual Depth in Worship",
        description: "Because sound without substance fades.",
    },
    Feature {
        glyph: Glyph::Music,
        title: "Personal Growth & Discipline",
        description: "Because the singer and the person cannot be separated.",
    },
];

pub const SAFE_SPACE: [&str; 4] = [
    "Grow without pretending",
    "Learn without shame",
    "Be corrected without being diminished",
    "Worship without performance pressure",
];

pub struct Pillar {
    pub title: &'static str,
    pub description: &'static str,
    pub indented: bool,
}

pub const PILLARS: [Pillar; 3] = [
    Pillar {
        title: "Depth Over Hype",
        description: "We prioritize substance and meaningful growth over fleeting attention.",
        indented: false,
    },
    Pillar {
        title: "Community Over Competition",
        description: "We build each other up in an environment of mutual support.",
        indented: true,
    },
    Pillar {
        title: "Purpose Over Performance",
        description: "We sing from a place of calling, not just capability.",
        indented: false,
    },
];

pub struct Gathering {
    pub schedule: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const GATHERINGS: [Gathering; 2] = [
    Gathering {
        schedule: "Every Saturday at 9PM",
        title: "Worship with Vox Pulchra",
        description: "Our Saturday worship sessions are moments of alignment. Here, we quiet distractions and remember why we sing in the first place.",
        image: images::WORSHIP,
    },
    Gathering {
        schedule: "Every Friday at 9PM",
        title: "The Vocalist's Journey",
        description: "Our Friday learning sessions are dedicated to training, teaching, and sharpening. This is where we break down technique and develop discipline.",
        image: images::JOURNEY,
    },
];

pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: [Benefit; 6] = [
    Benefit {
        title: "Technical Confidence",
        description: "Rooted in deep understanding of your instrument.",
    },
    Benefit {
        title: "Emotional Resilience",
        description: "The ability to face criticism and grow from it.",
    },
    Benefit {
        title: "Vocal Identity",
        description: "Clarity about who you are as a vocalist.",
    },
    Benefit {
        title: "Disciplined Growth",
        description: "A structured approach to continuous improvement.",
    },
    Benefit {
        title: "Supportive Community",
        description: "A network that stretches and challenges you.",
    },
    Benefit {
        title: "Purpose Awareness",
        description: "A deeper understanding of why you sing.",
    },
];

pub const INVITATIONS: [&str; 3] = [
    "If you feel that your voice carries more than melody…",
    "If you sense that your growth requires structure…",
    "If you desire depth over attention…",
];

/// Two-digit label for numbered cards: 0 -> "01".
pub fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_skip_the_hero() {
        assert!(NAV_LINKS.iter().all(|link| link.target != Section::Hero));
        assert_eq!(NAV_LINKS.last().map(|link| link.target), Some(Section::Join));
    }

    #[test]
    fn ordinals_are_zero_padded() {
        assert_eq!(ordinal(0), "01");
        assert_eq!(ordinal(5), "06");
        assert_eq!(ordinal(11), "12");
    }

    #[test]
    fn gatherings_use_distinct_images() {
        assert_ne!(GATHERINGS[0].image, GATHERINGS[1].image);
        assert!(GATHERINGS.iter().all(|g| g.image.starts_with("/images/")));
    }
}
