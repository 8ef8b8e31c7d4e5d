// SPDX-License-Identifier: MIT OR Apache-2.0

use cfg_if::cfg_if;

// The browser build mounts the page; native builds export it as static html.
cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        use tribute_ui::App;

        fn main() {
            let level = if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            };
            console_log::init_with_level(level).expect("couldn't initialize logging");
            console_error_panic_hook::set_once();
            dioxus::launch(App);
        }
    } else {
        use anyhow::Context;
        use clap::Parser;
        use tribute_ui::cli_args::Opt;
        use tribute_ui::export::{write_site, ExportConfig};

        fn main() -> anyhow::Result<()> {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

            let config = ExportConfig::from(Opt::parse());
            let path = write_site(&config)
                .with_context(|| format!("exporting to {}", config.out_dir.display()))?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
