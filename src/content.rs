/// Glyphs used across the page, each tied to one brand accent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Team,
    Book,
    Home,
    Bolt,
    Heart,
    Shield,
    Trophy,
    UserAdd,
    CheckCircle,
    Rise,
    Twitter,
    Facebook,
    Instagram,
    LinkedIn,
    Mail,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Team => "👥",
            Icon::Book => "📚",
            Icon::Home => "🏛️",
            Icon::Bolt => "⚡",
            Icon::Heart => "❤️",
            Icon::Shield => "🛡️",
            Icon::Trophy => "🏆",
            Icon::UserAdd => "🤝",
            Icon::CheckCircle => "✅",
            Icon::Rise => "📈",
            Icon::Twitter => "𝕏",
            Icon::Facebook => "f",
            Icon::Instagram => "📷",
            Icon::LinkedIn => "in",
            Icon::Mail => "✉",
        }
    }

    /// CSS class carrying the icon's accent color.
    pub fn tone(self) -> &'static str {
        match self {
            Icon::Team => "tone-scots-rose",
            Icon::Book => "tone-blue-thread",
            Icon::Home | Icon::UserAdd => "tone-weaver-blue",
            Icon::Bolt | Icon::Trophy => "tone-gold-thread",
            Icon::Heart => "tone-carnegie-red",
            Icon::Shield | Icon::CheckCircle => "tone-green-thread",
            Icon::Rise => "tone-highlands-blue",
            Icon::Twitter | Icon::Facebook | Icon::Instagram | Icon::LinkedIn | Icon::Mail => {
                "tone-muted"
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MANIFESTO: [Highlight; 6] = [
    Highlight {
        icon: Icon::Team,
        title: "Student Welfare & Community",
        description: "Enhance student support services, mental health resources, and create a more inclusive campus environment where every voice is heard.",
    },
    Highlight {
        icon: Icon::Book,
        title: "Academic Excellence",
        description: "Advocate for better learning resources, expanded library hours, and improved communication between students and faculty.",
    },
    Highlight {
        icon: Icon::Home,
        title: "Campus Infrastructure",
        description: "Push for better facilities, improved Wi-Fi connectivity, and comfortable study spaces that meet modern learning needs.",
    },
    Highlight {
        icon: Icon::Bolt,
        title: "Innovation & Technology",
        description: "Promote tech initiatives, hackathons, and partnerships with industry leaders to prepare students for the digital economy.",
    },
    Highlight {
        icon: Icon::Heart,
        title: "Social Events & Culture",
        description: "Organize diverse cultural events, sports activities, and networking opportunities that celebrate our vibrant community.",
    },
    Highlight {
        icon: Icon::Shield,
        title: "Transparency & Accountability",
        description: "Ensure transparent communication of guild activities, budgets, and decisions with regular updates to all students.",
    },
];

pub const QUALIFICATIONS: [Highlight; 4] = [
    Highlight {
        icon: Icon::Trophy,
        title: "Proven Leadership",
        description: "Successfully led multiple student initiatives and organizations, demonstrating strong organizational and people management skills.",
    },
    Highlight {
        icon: Icon::UserAdd,
        title: "Community Builder",
        description: "Active in fostering connections across different student groups, creating an inclusive and collaborative campus environment.",
    },
    Highlight {
        icon: Icon::CheckCircle,
        title: "Track Record of Results",
        description: "Delivered tangible outcomes in previous roles, from organizing successful events to implementing student feedback systems.",
    },
    Highlight {
        icon: Icon::Rise,
        title: "Visionary Thinker",
        description: "Forward-thinking approach to student governance, with innovative ideas to modernize guild operations and services.",
    },
];

pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { icon: Icon::Twitter, label: "Twitter", href: "#" },
    SocialLink { icon: Icon::Facebook, label: "Facebook", href: "#" },
    SocialLink { icon: Icon::Instagram, label: "Instagram", href: "#" },
    SocialLink { icon: Icon::LinkedIn, label: "LinkedIn", href: "#" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_card_has_copy() {
        for item in MANIFESTO.iter().chain(QUALIFICATIONS.iter()) {
            assert!(!item.title.is_empty());
            assert!(item.description.len() > item.title.len());
        }
    }

    #[test]
    fn titles_are_unique_within_a_section() {
        // titles double as list keys
        let manifesto: HashSet<_> = MANIFESTO.iter().map(|item| item.title).collect();
        let qualifications: HashSet<_> = QUALIFICATIONS.iter().map(|item| item.title).collect();
        assert_eq!(manifesto.len(), MANIFESTO.len());
        assert_eq!(qualifications.len(), QUALIFICATIONS.len());
    }

    #[test]
    fn card_icons_carry_a_brand_tone() {
        for item in MANIFESTO.iter().chain(QUALIFICATIONS.iter()) {
            assert!(item.icon.tone().starts_with("tone-"));
            assert_ne!(item.icon.tone(), "tone-muted");
        }
    }
}
