// SPDX-License-Identifier: MIT OR Apache-2.0

//! tribute-ui library root.
//!
//! A single static page celebrating RS School. The browser entry point and
//! the native static exporter both live in `main.rs`; integration tests
//! under `tests/` import the components from here.

use dioxus::prelude::*;

pub mod components;
pub mod content;
pub mod pages;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli_args;
#[cfg(not(target_arch = "wasm32"))]
pub mod export;

use pages::index::IndexPage;

/// App root component
#[component]
pub fn App() -> Element {
    rsx! {
        IndexPage {}
    }
}
