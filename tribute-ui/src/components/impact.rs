// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::components::icons::LucideIcon;
use crate::content::{Stat, IMPACT_HEADING, IMPACT_INTRO, STATS};

#[component]
pub fn Impact() -> Element {
    rsx! {
        section { id: "impact", class: "py-24 px-4",
            div { class: "max-w-7xl mx-auto",
                div { class: "text-center mb-16",
                    h2 { class: "text-4xl md:text-5xl font-bold text-gray-900 mb-6", {IMPACT_HEADING} }
                    p { class: "text-xl text-gray-600 max-w-3xl mx-auto", {IMPACT_INTRO} }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8",
                    for stat in STATS {
                        StatCard { key: "{stat.label}", stat }
                    }
                }
            }
        }
    }
}

#[component]
pub fn StatCard(stat: Stat) -> Element {
    rsx! {
        div { class: "stat-card group bg-white rounded-3xl p-8 shadow-lg hover:shadow-2xl transition-all duration-500 hover:-translate-y-2 border border-gray-100",
            div { class: "inline-flex p-4 rounded-2xl bg-gradient-to-br from-gray-50 to-gray-100 mb-6 group-hover:scale-110 transition-transform duration-300",
                LucideIcon { icon: stat.icon, class: format!("w-8 h-8 {}", stat.color) }
            }
            div { class: "text-4xl font-bold text-gray-900 mb-2", {stat.number} }
            div { class: "text-lg font-semibold text-gray-800 mb-2", {stat.label} }
            div { class: "text-gray-600 text-sm leading-relaxed", {stat.description} }
        }
    }
}
