//! Browser session management
//!
//! Each crawled URL gets its own headless Chromium session: launched at the
//! start of the item, closed on both the success and failure exit paths.
//! The trade is startup cost for crash and state isolation between pages.

use crate::config::BrowserConfig;
use crate::{Result, SnapError};
use chromiumoxide::browser::{Browser, BrowserConfig as ChromeConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// An isolated headless browser session scoped to one page capture
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    settings: BrowserConfig,
}

impl BrowserSession {
    /// Launches a fresh headless Chromium instance
    ///
    /// Sandboxing is disabled so the browser can run inside containers.
    pub async fn launch(settings: &BrowserConfig) -> Result<Self> {
        let mut builder = ChromeConfig::builder()
            .window_size(settings.viewport_width, settings.viewport_height)
            .no_sandbox()
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--disable-background-networking")
            .arg("--disable-extensions")
            .arg("--disable-sync")
            .arg("--mute-audio")
            .arg("--hide-scrollbars");

        if let Some(chrome_path) = &settings.chrome_path {
            builder = builder.chrome_executable(chrome_path);
        }

        let chrome_config = builder.build().map_err(SnapError::BrowserLaunch)?;

        let (browser, mut handler) = Browser::launch(chrome_config).await?;

        // Drive CDP events until the connection drops
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler error: {e}");
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
            settings: settings.clone(),
        })
    }

    /// Opens a blank page in this session
    pub async fn new_page(&self) -> Result<Page> {
        let page = self.browser.new_page("about:blank").await?;
        Ok(page)
    }

    /// Navigates the page and waits for the load to finish
    ///
    /// The whole navigation runs under the configured ceiling; after the
    /// load event a short settle delay approximates network idle. A timeout
    /// or protocol failure here maps to an item-fatal error; callers in the
    /// login flow downgrade it to a warning themselves.
    pub async fn navigate(&self, page: &Page, url: &str) -> Result<()> {
        let navigation = async {
            page.goto(url).await?;
            page.wait_for_navigation().await?;
            Ok::<(), chromiumoxide::error::CdpError>(())
        };

        match tokio::time::timeout(self.settings.navigation_timeout, navigation).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                return Err(SnapError::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })
            }
            Err(_) => {
                return Err(SnapError::NavigationTimeout {
                    url: url.to_string(),
                    seconds: self.settings.navigation_timeout.as_secs(),
                })
            }
        }

        tokio::time::sleep(self.settings.settle_delay).await;
        Ok(())
    }

    /// Browser tuning this session was launched with
    pub fn settings(&self) -> &BrowserConfig {
        &self.settings
    }

    /// Shuts the session down
    ///
    /// Close failures are logged, not propagated: by the time this runs the
    /// item's outcome is already decided.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            debug!("Browser did not exit cleanly: {e}");
        }
        self.handler_task.abort();
    }
}
