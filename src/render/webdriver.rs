//! WebDriver-backed renderer.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder, Locator};
use log::{debug, warn};
use serde_json::json;
use url::Url;

use super::Renderer;
use crate::config::{RENDER_BODY_WAIT_MS, SESSION_CLOSE_TIMEOUT_SECS};
use crate::error_handling::RenderError;
use crate::utils::duration_to_ms;

/// Renders pages through a WebDriver endpoint (chromedriver, geckodriver,
/// Selenium) in a headless browser.
///
/// A new session is opened per render and closed before returning, whether
/// the render succeeded, failed or ran out of time.
#[derive(Debug, Clone)]
pub struct WebDriverRenderer {
    webdriver_url: String,
}

impl WebDriverRenderer {
    pub fn new(webdriver_url: impl Into<String>) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
        }
    }

    pub fn webdriver_url(&self) -> &str {
        &self.webdriver_url
    }

    async fn connect(&self) -> Result<Client, RenderError> {
        let capabilities = json!({
            "goog:chromeOptions": {
                "args": ["--headless=new", "--disable-gpu", "--no-sandbox", "--window-size=1366,900"]
            },
            "moz:firefoxOptions": { "args": ["-headless"] }
        });
        let mut builder = ClientBuilder::native();
        if let serde_json::Value::Object(map) = capabilities {
            builder.capabilities(map);
        }
        builder
            .connect(&self.webdriver_url)
            .await
            .map_err(|e| RenderError::Session(e.to_string()))
    }
}

/// Navigates, waits for `body` and captures the page source.
async fn capture(client: &Client, url: &Url) -> Result<String, RenderError> {
    client
        .goto(url.as_str())
        .await
        .map_err(|e| RenderError::Navigation(e.to_string()))?;
    client
        .wait()
        .at_most(Duration::from_millis(RENDER_BODY_WAIT_MS))
        .for_element(Locator::Css("body"))
        .await
        .map_err(|e| RenderError::Navigation(format!("waiting for body: {}", e)))?;
    let source = client
        .source()
        .await
        .map_err(|e| RenderError::Navigation(e.to_string()))?;

    if source.trim().is_empty() {
        return Err(RenderError::EmptyDocument);
    }
    Ok(source)
}

#[async_trait]
impl Renderer for WebDriverRenderer {
    async fn render(&self, url: &Url, timeout: Duration) -> Result<String, RenderError> {
        let started = Instant::now();
        let budget_ms = duration_to_ms(timeout);
        debug!("Rendering {} via {}", url, self.webdriver_url);

        let client = match tokio::time::timeout(timeout, self.connect()).await {
            Ok(result) => result?,
            Err(_) => return Err(RenderError::Timeout(budget_ms)),
        };

        let remaining = timeout.saturating_sub(started.elapsed());
        let outcome = tokio::time::timeout(remaining, capture(&client, url)).await;

        // The session is closed on every path; a hung driver gets a short grace period
        match tokio::time::timeout(
            Duration::from_secs(SESSION_CLOSE_TIMEOUT_SECS),
            client.close(),
        )
        .await
        {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Failed to close WebDriver session for {}: {}", url, e),
            Err(_) => warn!("Timed out closing WebDriver session for {}", url),
        }

        match outcome {
            Ok(result) => {
                if result.is_ok() {
                    debug!("Rendered {} in {} ms", url, started.elapsed().as_millis());
                }
                result
            }
            Err(_) => Err(RenderError::Timeout(budget_ms)),
        }
    }
}
