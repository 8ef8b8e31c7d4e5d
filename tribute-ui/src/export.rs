// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static export of the page to a servable `index.html`.

use std::fs;
use std::path::PathBuf;

use dioxus::prelude::*;
use thiserror::Error;

use crate::content::HERO_TITLE;
use crate::App;

pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub out_dir: PathBuf,
    pub title: String,
    pub tailwind_src: String,
    pub stylesheet: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            title: HERO_TITLE.to_string(),
            tailwind_src: TAILWIND_CDN.to_string(),
            stylesheet: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render the body markup of the page.
///
/// There is no state to diverge between calls, so repeated renders are
/// byte-identical.
pub fn render_page() -> String {
    let mut dom = VirtualDom::new(App);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Wrap [`render_page`] in a complete HTML document.
pub fn render_document(config: &ExportConfig) -> String {
    let stylesheet = config
        .stylesheet
        .as_deref()
        .map(|href| format!("\n    <link rel=\"stylesheet\" href=\"{}\">", escape_attr(href)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <script src="{tailwind}"></script>{stylesheet}
  </head>
  <body>
    <div id="main">{body}</div>
  </body>
</html>
"#,
        title = escape_text(&config.title),
        tailwind = escape_attr(&config.tailwind_src),
        stylesheet = stylesheet,
        body = render_page(),
    )
}

/// Write `index.html` into `config.out_dir`, creating the directory if needed.
pub fn write_site(config: &ExportConfig) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(&config.out_dir).map_err(|source| ExportError::CreateDir {
        path: config.out_dir.clone(),
        source,
    })?;

    let path = config.out_dir.join("index.html");
    let html = render_document(config);
    log::debug!("rendered {} bytes of html", html.len());

    fs::write(&path, html).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {}", path.display());
    Ok(path)
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
