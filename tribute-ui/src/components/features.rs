// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::components::icons::LucideIcon;
use crate::content::{Feature, FEATURES, FEATURES_HEADING, FEATURES_INTRO};

#[component]
pub fn Features() -> Element {
    rsx! {
        section { id: "features", class: "py-24 px-4 bg-gradient-to-br from-gray-50 to-white",
            div { class: "max-w-7xl mx-auto",
                div { class: "text-center mb-16",
                    h2 { class: "text-4xl md:text-5xl font-bold text-gray-900 mb-6", {FEATURES_HEADING} }
                    p { class: "text-xl text-gray-600 max-w-3xl mx-auto", {FEATURES_INTRO} }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                    for feature in FEATURES {
                        FeatureCard { key: "{feature.title}", feature }
                    }
                }
            }
        }
    }
}

/// The overlay is invisible until the card is hovered.
#[component]
pub fn FeatureCard(feature: Feature) -> Element {
    rsx! {
        div { class: "feature-card group relative bg-white rounded-3xl p-8 shadow-lg hover:shadow-2xl transition-all duration-500 hover:-translate-y-2 border border-gray-100 overflow-hidden",
            div { class: "absolute inset-0 bg-gradient-to-br {feature.gradient} opacity-0 group-hover:opacity-5 transition-opacity duration-500" }

            div { class: "relative z-10",
                div { class: "inline-flex p-4 rounded-2xl bg-gradient-to-br {feature.gradient} mb-6 group-hover:scale-110 transition-transform duration-300",
                    LucideIcon { icon: feature.icon, class: "w-8 h-8 text-white" }
                }
                h3 { class: "text-xl font-bold text-gray-900 mb-4", {feature.title} }
                p { class: "text-gray-600 leading-relaxed", {feature.description} }
            }
        }
    }
}
