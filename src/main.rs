#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use connecting_minds_core::SiteContent;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Content resolved at startup
static SITE_CONTENT: OnceLock<SiteContent> = OnceLock::new();

/// Whether the testimonial carousel advances on its own
static AUTOPLAY: OnceLock<bool> = OnceLock::new();

/// Get the site content (loaded file or built-in copy)
pub fn get_site_content() -> SiteContent {
    SITE_CONTENT.get().cloned().unwrap_or_default()
}

/// Get the autoplay setting (defaults to off)
pub fn get_autoplay() -> bool {
    AUTOPLAY.get().copied().unwrap_or(false)
}

/// Connecting Minds - Business Center
#[derive(Parser, Debug)]
#[command(name = "connecting-minds-desktop")]
#[command(about = "Connecting Minds business center - testimonials and spaces")]
struct Args {
    /// JSON content file (testimonials and/or cards)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Advance the testimonial carousel on its own every few seconds
    #[arg(long)]
    autoplay: bool,
}

/// Default content file location: `<config dir>/connecting-minds/content.json`
fn default_content_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("connecting-minds").join("content.json"))
}

fn load_content(path: &Path) -> anyhow::Result<SiteContent> {
    SiteContent::load(path).with_context(|| format!("loading content from {}", path.display()))
}

/// Pick the content source: explicit file, then the default file if it
/// exists, then the built-in copy. A broken file is logged and skipped.
fn resolve_content(explicit: Option<PathBuf>) -> SiteContent {
    let candidate = explicit.or_else(|| default_content_path().filter(|p| p.exists()));

    let Some(path) = candidate else {
        tracing::info!("Using built-in site content");
        return SiteContent::builtin();
    };

    match load_content(&path) {
        Ok(content) => {
            tracing::info!(
                "Loaded content from {:?} ({} testimonials, {} cards)",
                path,
                content.testimonials.len(),
                content.cards.len()
            );
            content
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            tracing::warn!("Falling back to built-in site content");
            SiteContent::builtin()
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let content = resolve_content(args.content);
    let _ = SITE_CONTENT.set(content);
    let _ = AUTOPLAY.set(args.autoplay);

    tracing::info!(
        "Starting Connecting Minds ({}x{}, autoplay: {})",
        args.width,
        args.height,
        args.autoplay
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Connecting Minds Business Center")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["connecting-minds-desktop"]);
        assert!(args.content.is_none());
        assert_eq!(args.width, 1100.0);
        assert_eq!(args.height, 900.0);
        assert!(!args.autoplay);
    }

    #[test]
    fn test_autoplay_off_unless_requested() {
        assert!(!get_autoplay());
    }

    #[test]
    fn test_args_flags() {
        let args = Args::parse_from([
            "connecting-minds-desktop",
            "--content",
            "site.json",
            "--autoplay",
            "--width",
            "640",
        ]);
        assert_eq!(args.content, Some(PathBuf::from("site.json")));
        assert!(args.autoplay);
        assert_eq!(args.width, 640.0);
    }

    #[test]
    fn test_resolve_content_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"cards":[{"title":"Lounge","description":"Quiet","image_ref":"l.jpg","cta_target":"https://x"}]}"#,
        )
        .unwrap();

        let content = resolve_content(Some(file.path().to_path_buf()));
        assert_eq!(content.cards.len(), 1);
        assert_eq!(content.cards[0].title, "Lounge");
    }

    #[test]
    fn test_resolve_content_falls_back_on_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let content = resolve_content(Some(file.path().to_path_buf()));
        assert_eq!(content.cards.len(), 4);
        assert_eq!(content.testimonials.len(), 4);
    }
}
