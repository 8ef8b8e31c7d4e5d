// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::components::{Community, Features, Footer, Hero, Impact};

/// Keyframes and animation delays the Tailwind defaults do not provide.
pub const PAGE_CSS: &str = include_str!("../../style/tribute.css");

/// The whole tribute page. Sections are stacked in a fixed order.
#[component]
pub fn IndexPage() -> Element {
    rsx! {
        style { {PAGE_CSS} }
        div { class: "min-h-screen bg-gradient-to-br from-blue-50 via-white to-purple-50",
            Hero {}
            Impact {}
            Features {}
            Community {}
            Footer {}
        }
    }
}
