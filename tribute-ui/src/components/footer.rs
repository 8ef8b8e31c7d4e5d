// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::content::{
    FOOTER_CALLOUT, FOOTER_CALLOUT_DETAIL, FOOTER_COPYRIGHT, FOOTER_DISCLAIMER, FOOTER_HEADING,
    FOOTER_MESSAGE,
};

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            id: "footer",
            class: "bg-gradient-to-br from-gray-900 via-blue-900 to-purple-900 text-white py-16 px-4",
            div { class: "max-w-7xl mx-auto",
                div { class: "text-center",
                    h2 { class: "text-3xl md:text-4xl font-bold mb-6", {FOOTER_HEADING} }
                    p { class: "text-xl text-gray-300 max-w-4xl mx-auto mb-8 leading-relaxed", {FOOTER_MESSAGE} }

                    div { class: "footer-callout bg-white/10 backdrop-blur-sm rounded-2xl p-8 mb-8 border border-white/20",
                        p { class: "text-2xl font-semibold mb-4", {FOOTER_CALLOUT} }
                        p { class: "text-lg text-gray-300", {FOOTER_CALLOUT_DETAIL} }
                    }

                    div { class: "text-gray-400",
                        p { {FOOTER_COPYRIGHT} }
                        p { class: "mt-2 text-sm", {FOOTER_DISCLAIMER} }
                    }
                }
            }
        }
    }
}
