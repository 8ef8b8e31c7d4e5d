// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::components::icons::LucideIcon;
use crate::content::{
    Badge, FloatingIcon, HERO_BADGES, HERO_FLOATING_ICONS, HERO_INTRO, HERO_SUBTITLE,
    HERO_THANKS, HERO_TITLE,
};

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            id: "hero",
            class: "relative min-h-screen flex items-center justify-center px-4 overflow-hidden",

            // Background decoration
            div { class: "absolute inset-0 bg-gradient-to-br from-blue-600/10 via-purple-600/10 to-pink-600/10" }
            div { class: "absolute top-20 left-10 w-72 h-72 bg-blue-400/20 rounded-full blur-3xl animate-pulse" }
            div { class: "absolute bottom-20 right-10 w-96 h-96 bg-purple-400/20 rounded-full blur-3xl animate-pulse delay-1000" }

            div { class: "relative z-10 text-center max-w-6xl mx-auto",
                for floating in HERO_FLOATING_ICONS {
                    FloatingGlyph { key: "{floating.position}", floating }
                }

                div { class: "animate-fade-in",
                    h1 { class: "text-6xl md:text-8xl font-bold bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 bg-clip-text text-transparent mb-6 leading-tight",
                        {HERO_TITLE}
                    }
                    p { class: "text-2xl md:text-3xl text-gray-700 mb-8 font-light", {HERO_SUBTITLE} }
                    div { class: "text-lg md:text-xl text-gray-600 max-w-4xl mx-auto leading-relaxed mb-12",
                        p { class: "mb-4", {HERO_INTRO} }
                        p { class: "text-2xl font-semibold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent",
                            {HERO_THANKS}
                        }
                    }

                    div { class: "flex flex-wrap justify-center gap-4",
                        for badge in HERO_BADGES {
                            HeroBadge { key: "{badge.text}", badge }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FloatingGlyph(floating: FloatingIcon) -> Element {
    rsx! {
        div { class: "absolute animate-bounce {floating.position}",
            LucideIcon { icon: floating.icon, class: floating.class }
        }
    }
}

#[component]
pub fn HeroBadge(badge: Badge) -> Element {
    rsx! {
        div { class: "hero-badge bg-white/80 backdrop-blur-sm rounded-full px-8 py-4 shadow-lg hover:shadow-xl transition-all duration-300 hover:scale-105",
            span { class: "{badge.color} font-semibold text-lg", {badge.text} }
        }
    }
}
