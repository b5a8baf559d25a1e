//! Preview binary - renders the landing page to stdout without starting the server
//!
//! Usage:
//!   cargo run --bin preview                              # English, dark theme
//!   cargo run --bin preview -- --lang ru --theme light   # Russian, light theme
//!   cargo run --bin preview -- --lang=ru > page.html     # Save for a browser
//!
//! Assets referenced by the page (/assets/site.css, /assets/site.js) are only
//! served by the main binary.

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use portfolio_site::cli::arg_value;
use portfolio_site::i18n::Language;
use portfolio_site::page::{render_page, PageContext};
use portfolio_site::preferences::Preferences;
use portfolio_site::profile::SiteProfile;
use portfolio_site::theme::Theme;
use tracing::info;

fn main() -> Result<()> {
    // Logs go to stderr so the page can be redirected to a file
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_site=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    let language = match arg_value(&args, "--lang") {
        Some(code) => Language::from_code(&code).context("Invalid --lang")?,
        None => Language::canonical(),
    };
    let theme = Theme::from_preference(arg_value(&args, "--theme").as_deref());

    info!(
        "Rendering page (lang={}, theme={})",
        language.code(),
        theme.as_str()
    );

    let html = render_page(&PageContext {
        site: SiteProfile::get(),
        prefs: Preferences { theme, language },
        year: Utc::now().year(),
    });
    println!("{}", html);

    Ok(())
}
