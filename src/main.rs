//! Command-line entry point for reporting a single link click.
//!
//! # Usage
//!
//! ```bash
//! # Token given directly
//! cargo run -- --link https://example.com --token abc123
//!
//! # Token read from a rendered page
//! cargo run -- --link /issues/1987/3 --page search.html --page-url https://mags.example.com/search
//! ```
//!
//! # Environment Variables
//!
//! See [`click_logger::config`] for the full list.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use click_logger::config::{self, Config};
use click_logger::domain::{CSRF_META_NAME, ClickEvent, PageMetadata};
use click_logger::infrastructure::transport::{ClickTransport, HttpClickTransport, NullTransport};
use click_logger::{ClickLogger, Delivery};
use colored::*;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Report a magazine link click to the logging endpoint.
#[derive(Parser)]
#[command(name = "click-logger")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Destination of the clicked link (absolute, or relative to --page-url)
    #[arg(short, long)]
    link: String,

    /// CSRF token to send
    #[arg(short, long, conflicts_with = "page")]
    token: Option<String>,

    /// HTML page to read the csrf-token meta element from
    #[arg(short, long)]
    page: Option<PathBuf>,

    /// URL of the page the link was clicked on
    #[arg(long)]
    page_url: Option<Url>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    let page = match (&cli.token, &cli.page) {
        (Some(token), _) => PageMetadata::new().with_meta(CSRF_META_NAME, token.as_str()),
        (None, Some(path)) => {
            let html = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read page {}", path.display()))?;
            PageMetadata::from_html(&html)
        }
        (None, None) => PageMetadata::new(),
    };

    let event = match &cli.page_url {
        Some(page_url) => ClickEvent::from_anchor(page_url, &cli.link),
        None => ClickEvent::new(cli.link.as_str()),
    };

    let transport: Arc<dyn ClickTransport> = if config.enabled {
        Arc::new(HttpClickTransport::from_config(&config).context("Failed to build HTTP transport")?)
    } else {
        Arc::new(NullTransport::new())
    };

    let logger = ClickLogger::new(transport);
    let handle = logger.log_click(&event, &page)?;

    // The request is detached; wait for it only so the process does not exit first.
    match handle.await.context("Click delivery task panicked")? {
        Delivery::Sent => println!("{} {}", "✓ Click logged:".green(), event.target_href),
        Delivery::Failed => println!("{} {}", "✗ Click not logged:".yellow(), event.target_href),
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
