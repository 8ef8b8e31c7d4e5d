// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

use crate::content::Icon;

/// Inline 24x24 stroke glyph in the Lucide style.
#[component]
pub fn LucideIcon(icon: Icon, #[props(into)] class: String) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {glyph(icon)}
        }
    }
}

fn glyph(icon: Icon) -> Element {
    match icon {
        Icon::Users => rsx! {
            path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
            path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
        },
        Icon::Award => rsx! {
            circle { cx: "12", cy: "8", r: "6" }
            path { d: "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" }
        },
        Icon::Globe => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" }
            path { d: "M2 12h20" }
        },
        Icon::BookOpen => rsx! {
            path { d: "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" }
            path { d: "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" }
        },
        Icon::Zap => rsx! {
            polygon { points: "13 2 3 14 12 14 11 22 21 10 12 10 13 2" }
        },
        Icon::Heart => rsx! {
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        },
        Icon::Lightbulb => rsx! {
            path { d: "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5" }
            path { d: "M9 18h6" }
            path { d: "M10 22h4" }
        },
        Icon::Target => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            circle { cx: "12", cy: "12", r: "6" }
            circle { cx: "12", cy: "12", r: "2" }
        },
        Icon::Rocket => rsx! {
            path { d: "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z" }
            path { d: "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z" }
            path { d: "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0" }
            path { d: "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5" }
        },
        Icon::Star => rsx! {
            polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
        },
        Icon::MessageCircle => rsx! {
            path { d: "M7.9 20A9 9 0 1 0 4 16.1L2 22Z" }
        },
        Icon::Handshake => rsx! {
            path { d: "m11 17 2 2a1 1 0 1 0 3-3" }
            path { d: "m14 14 2.5 2.5a1 1 0 1 0 3-3l-3.88-3.88a3 3 0 0 0-4.24 0l-.88.88a1 1 0 1 1-3-3l2.81-2.81a5.79 5.79 0 0 1 7.06-.87l.47.28a2 2 0 0 0 1.42.25L21 4" }
            path { d: "m21 3 1 11h-2" }
            path { d: "M3 3 2 14l6.5 6.5a1 1 0 1 0 3-3" }
            path { d: "M3 4h8" }
        },
        Icon::Trophy => rsx! {
            path { d: "M6 9H4.5a2.5 2.5 0 0 1 0-5H6" }
            path { d: "M18 9h1.5a2.5 2.5 0 0 0 0-5H18" }
            path { d: "M4 22h16" }
            path { d: "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22" }
            path { d: "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22" }
            path { d: "M18 2H6v7a6 6 0 0 0 12 0V2Z" }
        },
        Icon::Coffee => rsx! {
            path { d: "M17 8h1a4 4 0 1 1 0 8h-1" }
            path { d: "M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z" }
            line { x1: "6", y1: "2", x2: "6", y2: "4" }
            line { x1: "10", y1: "2", x2: "10", y2: "4" }
            line { x1: "14", y1: "2", x2: "14", y2: "4" }
        },
        Icon::GraduationCap => rsx! {
            path { d: "M22 10v6M2 10l10-5 10 5-10 5z" }
            path { d: "M6 12v5c3 3 9 3 12 0v-5" }
        },
        Icon::Code => rsx! {
            polyline { points: "16 18 22 12 16 6" }
            polyline { points: "8 6 2 12 8 18" }
        },
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn render_icon(icon: Icon) -> String {
        dioxus_ssr::render_element(rsx! {
            LucideIcon { icon, class: "w-6 h-6" }
        })
    }

    #[test]
    fn every_icon_draws_a_glyph() {
        for icon in Icon::ALL {
            let html = render_icon(icon);
            let open_end = html.find('>').expect("svg open tag");
            let close = html.rfind("</svg>").expect("svg close tag");
            let body = &html[open_end + 1..close];
            assert!(
                ["<path", "<circle", "<polygon", "<polyline", "<line"]
                    .iter()
                    .any(|shape| body.contains(shape)),
                "{icon:?} rendered an empty glyph: {html}"
            );
        }
    }

    #[test]
    fn class_is_passed_through_untouched() {
        let html = render_icon(Icon::Star);
        assert!(html.contains(r#"class="w-6 h-6""#), "{html}");
        assert!(html.contains(r#"aria-hidden="true""#), "{html}");
    }
}
