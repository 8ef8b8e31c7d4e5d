// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Shared test harness for tribute-ui component tests.
//
// Native tests render components to an html string with dioxus-ssr.
// Browser tests mount them into a real DOM node and wait for the first
// flush before querying.
#![allow(dead_code)]

use dioxus::prelude::*;

// ---------------------------------------------------------------------------
// String rendering (native)
// ---------------------------------------------------------------------------

/// Render a root component to html.
#[cfg(not(target_arch = "wasm32"))]
pub fn render(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Number of elements whose class list starts with `marker`.
pub fn count_marked(html: &str, marker: &str) -> usize {
    html.matches(&format!("class=\"{marker} ")).count()
}

/// Byte offsets of each needle in `html`, panicking on a missing one.
pub fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            html.find(needle)
                .unwrap_or_else(|| panic!("{needle:?} missing from rendered html"))
        })
        .collect()
}

pub fn assert_ascending(offsets: &[usize]) {
    assert!(
        offsets.windows(2).all(|w| w[0] < w[1]),
        "expected declared order, got offsets {offsets:?}"
    );
}

// ---------------------------------------------------------------------------
// DOM helpers (browser)
// ---------------------------------------------------------------------------

/// Attach an empty `<div>` to `<body>` for the page to mount into.
#[cfg(target_arch = "wasm32")]
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let mount = document.create_element("div").unwrap();
    mount.set_id("tribute-test-root");
    document.body().unwrap().append_child(&mount).unwrap();
    mount
}

/// Detach the mount point again.
#[cfg(target_arch = "wasm32")]
pub fn cleanup(mount: &web_sys::Element) {
    if let Some(body) = gloo_utils::document().body() {
        let _ = body.remove_child(mount);
    }
}

/// Launch `root` into `mount` instead of the document body.
#[cfg(target_arch = "wasm32")]
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    dioxus::web::launch::launch_virtual_dom(
        VirtualDom::new(root),
        dioxus::web::Config::new().rootelement(mount.clone()),
    );
}

/// Wait two animation frames so Dioxus has applied its initial mutations.
#[cfg(target_arch = "wasm32")]
pub async fn yield_now() {
    use wasm_bindgen_futures::JsFuture;

    for _ in 0..2 {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            gloo_utils::window()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }
}
