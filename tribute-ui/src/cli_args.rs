// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use clap::Parser;

use crate::content::HERO_TITLE;
use crate::export::{ExportConfig, TAILWIND_CDN};

/// RS School tribute page exporter
///
/// Renders the page to a static `index.html` that any file server can host.
#[derive(Parser, Debug, Clone)]
#[clap(name = "tribute-ui")]
pub struct Opt {
    /// Directory that receives `index.html`.
    #[clap(long = "out-dir", short = 'o', default_value = "dist")]
    pub out_dir: PathBuf,

    /// Document title.
    #[clap(long = "title", default_value = HERO_TITLE)]
    pub title: String,

    /// Script URL of the Tailwind runtime.
    #[clap(long = "tailwind-src", default_value = TAILWIND_CDN)]
    pub tailwind_src: String,

    /// Optional prebuilt stylesheet to link in addition to Tailwind.
    #[clap(long = "stylesheet")]
    pub stylesheet: Option<String>,
}

impl From<Opt> for ExportConfig {
    fn from(opt: Opt) -> Self {
        ExportConfig {
            out_dir: opt.out_dir,
            title: opt.title,
            tailwind_src: opt.tailwind_src,
            stylesheet: opt.stylesheet,
        }
    }
}
