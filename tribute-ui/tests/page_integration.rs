// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Browser test for the full page.
//
// Mounts the real App and checks a handful of landmarks that identify
// each section rather than every DOM node.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, create_mount_point, render_into, yield_now};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use tribute_ui::App;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn count(mount: &web_sys::Element, selector: &str) -> u32 {
    mount.query_selector_all(selector).unwrap().length()
}

#[wasm_bindgen_test]
async fn page_mounts_all_sections_in_order() {
    let mount = create_mount_point();
    render_into(&mount, App);
    yield_now().await;

    let sections = mount
        .query_selector_all("#hero, #impact, #features, #community, #footer")
        .unwrap();
    let ids: Vec<String> = (0..sections.length())
        .filter_map(|i| sections.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.id())
        .collect();
    assert_eq!(ids, ["hero", "impact", "features", "community", "footer"]);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn page_renders_expected_card_counts() {
    let mount = create_mount_point();
    render_into(&mount, App);
    yield_now().await;

    assert_eq!(count(&mount, ".hero-badge"), 3);
    assert_eq!(count(&mount, ".stat-card"), 4);
    assert_eq!(count(&mount, ".feature-card"), 6);
    assert_eq!(count(&mount, ".benefit-row"), 4);
    assert_eq!(count(&mount, ".testimonial-card"), 1);

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("RS School with love"), "title missing");
    assert!(text.contains("50,000+"), "headline stat missing");
    assert!(text.contains("Students Educated"), "stat label missing");
    assert!(text.contains("Open Source Spirit"), "last feature missing");
    assert!(text.contains("Anonymous Graduate"), "testimonial missing");

    cleanup(&mount);
}
