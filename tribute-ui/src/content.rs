// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed display records for every section of the page.
//!
//! Nothing here is built from input. The arrays are rendered in the order
//! they are declared.

/// Every glyph the page draws. See [`crate::components::icons::LucideIcon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Users,
    Award,
    Globe,
    BookOpen,
    Zap,
    Heart,
    Lightbulb,
    Target,
    Rocket,
    Star,
    MessageCircle,
    Handshake,
    Trophy,
    Coffee,
    GraduationCap,
    Code,
}

impl Icon {
    pub const ALL: [Icon; 16] = [
        Icon::Users,
        Icon::Award,
        Icon::Globe,
        Icon::BookOpen,
        Icon::Zap,
        Icon::Heart,
        Icon::Lightbulb,
        Icon::Target,
        Icon::Rocket,
        Icon::Star,
        Icon::MessageCircle,
        Icon::Handshake,
        Icon::Trophy,
        Icon::Coffee,
        Icon::GraduationCap,
        Icon::Code,
    ];
}

/// One card of the impact grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub icon: Icon,
    pub number: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Tailwind text colour applied to the icon.
    pub color: &'static str,
}

/// One card of the feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    /// Tailwind `from-* to-*` pair used for the icon tile and hover overlay.
    pub gradient: &'static str,
}

/// One row of the community benefits list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    /// Letter shown in the avatar bubble.
    pub initial: &'static str,
}

/// Pill label under the hero copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub text: &'static str,
    pub color: &'static str,
}

/// Decorative icon floating around the hero headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingIcon {
    pub icon: Icon,
    pub position: &'static str,
    pub class: &'static str,
}

pub const HERO_TITLE: &str = "RS School with love";
pub const HERO_SUBTITLE: &str = "Empowering Developers, Building Community";
pub const HERO_INTRO: &str = "A beacon of hope in the tech education landscape, RS School has transformed thousands of lives through free, high-quality programming education and mentorship.";
pub const HERO_THANKS: &str = "Thank you for making the impossible, possible. 🚀";

pub const HERO_BADGES: [Badge; 3] = [
    Badge {
        text: "Free Education",
        color: "text-blue-600",
    },
    Badge {
        text: "Expert Mentorship",
        color: "text-purple-600",
    },
    Badge {
        text: "Global Community",
        color: "text-pink-600",
    },
];

pub const HERO_FLOATING_ICONS: [FloatingIcon; 4] = [
    FloatingIcon {
        icon: Icon::GraduationCap,
        position: "-top-16 -left-16 delay-500",
        class: "w-12 h-12 text-blue-500/60",
    },
    FloatingIcon {
        icon: Icon::Code,
        position: "-top-8 -right-20 delay-1000",
        class: "w-10 h-10 text-purple-500/60",
    },
    FloatingIcon {
        icon: Icon::Users,
        position: "-bottom-12 -left-8 delay-700",
        class: "w-14 h-14 text-pink-500/60",
    },
    FloatingIcon {
        icon: Icon::Heart,
        position: "-bottom-8 -right-12 delay-300",
        class: "w-8 h-8 text-red-500/60",
    },
];

pub const IMPACT_HEADING: &str = "The Numbers Tell the Story";
pub const IMPACT_INTRO: &str = "RS School's impact reaches far beyond code - it's about changing lives, building careers, and creating opportunities for everyone.";

pub const STATS: [Stat; 4] = [
    Stat {
        icon: Icon::Users,
        number: "50,000+",
        label: "Students Educated",
        description: "Lives transformed through quality education",
        color: "text-blue-600",
    },
    Stat {
        icon: Icon::Award,
        number: "95%+",
        label: "Success Rate",
        description: "Students finding jobs after graduation",
        color: "text-purple-600",
    },
    Stat {
        icon: Icon::Globe,
        number: "100+",
        label: "Countries",
        description: "Global reach and impact",
        color: "text-pink-600",
    },
    Stat {
        icon: Icon::BookOpen,
        number: "1000+",
        label: "Hours of Content",
        description: "Comprehensive curriculum coverage",
        color: "text-green-600",
    },
];

pub const FEATURES_HEADING: &str = "What Makes RS School Special";
pub const FEATURES_INTRO: &str = "Every aspect of RS School is designed with one goal in mind: your success as a developer and your growth as a person.";

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::Zap,
        title: "Cutting-Edge Curriculum",
        description: "Always up-to-date with the latest technologies and industry best practices",
        gradient: "from-yellow-400 to-orange-500",
    },
    Feature {
        icon: Icon::Heart,
        title: "Community First",
        description: "Built on the foundation of mutual support and collaborative learning",
        gradient: "from-pink-400 to-red-500",
    },
    Feature {
        icon: Icon::Lightbulb,
        title: "Real-World Projects",
        description: "Hands-on experience with projects that matter and build portfolios",
        gradient: "from-blue-400 to-cyan-500",
    },
    Feature {
        icon: Icon::Target,
        title: "Career Focused",
        description: "Direct path from learning to landing your dream developer job",
        gradient: "from-green-400 to-emerald-500",
    },
    Feature {
        icon: Icon::Rocket,
        title: "Mentor Guidance",
        description: "Expert mentors providing personalized feedback and career advice",
        gradient: "from-purple-400 to-indigo-500",
    },
    Feature {
        icon: Icon::Star,
        title: "Open Source Spirit",
        description: "Fostering the open source community and giving back to developers",
        gradient: "from-amber-400 to-yellow-500",
    },
];

pub const COMMUNITY_HEADING: &str = "More Than Education - It's Family";
pub const COMMUNITY_INTRO: &str = "RS School has created something beautiful: a global family of developers who support, inspire, and celebrate each other's success.";

pub const BENEFITS: [Benefit; 4] = [
    Benefit {
        icon: Icon::MessageCircle,
        title: "Active Discord Community",
        description: "24/7 support from fellow students and mentors in one of the most welcoming developer communities online.",
        gradient: "from-blue-500 to-purple-600",
    },
    Benefit {
        icon: Icon::Handshake,
        title: "Peer-to-Peer Learning",
        description: "Students helping students, creating bonds that last well beyond the course completion.",
        gradient: "from-green-500 to-emerald-600",
    },
    Benefit {
        icon: Icon::Trophy,
        title: "Celebrating Success",
        description: "Every milestone, every job offer, every breakthrough is celebrated by the entire community.",
        gradient: "from-yellow-500 to-orange-600",
    },
    Benefit {
        icon: Icon::Coffee,
        title: "Lifelong Connections",
        description: "Alumni network spanning the globe, creating opportunities and friendships that transcend borders.",
        gradient: "from-pink-500 to-red-600",
    },
];

pub const TESTIMONIAL_HEADING: &str = "Community Testimonial";

pub const TESTIMONIAL: Testimonial = Testimonial {
    quote: "RS School didn't just teach me to code - it gave me a community, confidence, and a career I never thought possible. The mentors and fellow students became my extended family, and I'm forever grateful.",
    author: "Anonymous Graduate",
    role: "Now Senior Developer",
    initial: "A",
};

pub const FOOTER_HEADING: &str = "Thank You, RS School";
pub const FOOTER_MESSAGE: &str = "For believing in free education. For building bridges across continents. For transforming dreams into careers. For proving that when we lift each other up, we all rise together.";
pub const FOOTER_CALLOUT: &str = "🌟 The impact you've made is immeasurable 🌟";
pub const FOOTER_CALLOUT_DETAIL: &str = "Every student you've educated, every career you've launched, every dream you've made possible - it all matters.";
pub const FOOTER_COPYRIGHT: &str = "© 2024 EdyMol | Built with ❤️ by the Community";
pub const FOOTER_DISCLAIMER: &str = "This tribute website celebrates the incredible work of RS School and their impact on the global developer community.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_are_declared_in_page_order() {
        let labels: Vec<_> = STATS.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            [
                "Students Educated",
                "Success Rate",
                "Countries",
                "Hours of Content"
            ]
        );
    }

    #[test]
    fn features_start_and_end_with_expected_cards() {
        assert_eq!(FEATURES.first().map(|f| f.title), Some("Cutting-Edge Curriculum"));
        assert_eq!(FEATURES.last().map(|f| f.title), Some("Open Source Spirit"));
    }

    #[test]
    fn every_gradient_is_a_from_to_pair() {
        let gradients = FEATURES
            .iter()
            .map(|f| f.gradient)
            .chain(BENEFITS.iter().map(|b| b.gradient));
        for gradient in gradients {
            let mut parts = gradient.split(' ');
            assert!(parts.next().is_some_and(|p| p.starts_with("from-")), "{gradient}");
            assert!(parts.next().is_some_and(|p| p.starts_with("to-")), "{gradient}");
            assert!(parts.next().is_none(), "{gradient}");
        }
    }

    #[test]
    fn testimonial_initial_matches_author() {
        assert!(TESTIMONIAL.author.starts_with(TESTIMONIAL.initial));
    }
}
