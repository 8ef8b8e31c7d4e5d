// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::components::icons::LucideIcon;
use crate::content::{
    Benefit, Testimonial, BENEFITS, COMMUNITY_HEADING, COMMUNITY_INTRO, TESTIMONIAL,
    TESTIMONIAL_HEADING,
};

#[component]
pub fn Community() -> Element {
    rsx! {
        section { id: "community", class: "py-24 px-4",
            div { class: "max-w-7xl mx-auto",
                div { class: "text-center mb-16",
                    h2 { class: "text-4xl md:text-5xl font-bold text-gray-900 mb-6", {COMMUNITY_HEADING} }
                    p { class: "text-xl text-gray-600 max-w-3xl mx-auto", {COMMUNITY_INTRO} }
                }

                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-12 items-center",
                    div { class: "space-y-8",
                        for benefit in BENEFITS {
                            BenefitRow { key: "{benefit.title}", benefit }
                        }
                    }

                    div { class: "relative",
                        TestimonialCard { testimonial: TESTIMONIAL }

                        // Decorative blobs
                        div { class: "absolute -top-4 -right-4 w-24 h-24 bg-yellow-400/20 rounded-full blur-xl" }
                        div { class: "absolute -bottom-4 -left-4 w-32 h-32 bg-blue-400/20 rounded-full blur-xl" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BenefitRow(benefit: Benefit) -> Element {
    rsx! {
        div { class: "benefit-row flex items-start space-x-4",
            div { class: "flex-shrink-0 p-3 bg-gradient-to-br {benefit.gradient} rounded-2xl",
                LucideIcon { icon: benefit.icon, class: "w-6 h-6 text-white" }
            }
            div {
                h3 { class: "text-xl font-bold text-gray-900 mb-2", {benefit.title} }
                p { class: "text-gray-600", {benefit.description} }
            }
        }
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> Element {
    rsx! {
        div { class: "testimonial-card bg-gradient-to-br from-blue-600 via-purple-600 to-pink-600 rounded-3xl p-8 text-white shadow-2xl",
            h3 { class: "text-2xl font-bold mb-6", {TESTIMONIAL_HEADING} }
            blockquote { class: "text-lg italic mb-6 leading-relaxed", "\"{testimonial.quote}\"" }
            div { class: "flex items-center space-x-4",
                div { class: "w-12 h-12 bg-white/20 rounded-full flex items-center justify-center",
                    span { class: "text-xl font-bold", {testimonial.initial} }
                }
                div {
                    div { class: "font-semibold", {testimonial.author} }
                    div { class: "text-white/80", {testimonial.role} }
                }
            }
        }
    }
}
