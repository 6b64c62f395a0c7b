//! Main application entry point (CLI binary).
//!
//! Thin wrapper around the `site_scraper` library:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the scrape result as JSON on stdout
//!
//! Exits with status 1 when the scrape fails.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use site_scraper::initialization::{init_client, init_logger_with};
use site_scraper::{Config, Scraper, WebDriverRenderer};

#[tokio::main]
async fn main() -> Result<()> {
    // .env may set WEBDRIVER_URL
    let _ = dotenvy::dotenv();

    let config = Config::parse();
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = init_client().context("Failed to initialize HTTP client")?;
    let mut scraper = Scraper::with_client(client);
    if !config.no_render {
        info!("Headless fallback via WebDriver at {}", config.webdriver_url);
        scraper = scraper.with_renderer(Arc::new(WebDriverRenderer::new(
            config.webdriver_url.clone(),
        )));
    }

    let result = scraper.scrape(&config.url, &config.scrape_options()).await;
    let json = if config.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .context("Failed to serialize scrape result")?;
    println!("{}", json);

    if !result.success {
        process::exit(1);
    }
    Ok(())
}
