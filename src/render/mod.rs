//! Page rendering and capture
//!
//! This module owns everything that touches the browser:
//! - [`browser`]: per-URL Chromium session lifecycle and navigation
//! - [`login`]: best-effort form login before the main navigation
//! - [`capture`]: the three-artifact capture writer
//!
//! The crawl coordinator depends only on the [`PageArchiver`] trait, so
//! tests can drive it without a browser.

pub mod browser;
pub mod capture;
pub mod login;

pub use browser::BrowserSession;
pub use capture::CaptureArtifacts;

use crate::config::Config;
use crate::Result;
use async_trait::async_trait;
use std::path::Path;
use url::Url;

/// Renders one URL and persists its capture artifacts
#[async_trait]
pub trait PageArchiver: Send + Sync {
    /// Archives `url` into `output_dir`, returning the written paths
    ///
    /// A returned error means the item failed; recoverable problems
    /// (login, MHTML snapshot) are absorbed internally.
    async fn archive(&self, url: &Url, output_dir: &Path) -> Result<CaptureArtifacts>;
}

/// The production archiver: headless Chromium per URL
pub struct ChromeArchiver {
    config: Config,
}

impl ChromeArchiver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render + capture sequence against an already-launched session
    ///
    /// Split out so the session can be closed on every exit path of
    /// [`PageArchiver::archive`].
    async fn render_and_capture(
        &self,
        session: &BrowserSession,
        url: &Url,
        output_dir: &Path,
    ) -> Result<CaptureArtifacts> {
        let page = session.new_page().await?;

        if let Some(user_agent) = &self.config.user_agent {
            page.set_user_agent(user_agent.clone()).await?;
        }

        if self.config.login.enabled {
            login::attempt_login(session, &page, &self.config.login, url).await;
        }

        session.navigate(&page, url.as_str()).await?;

        capture::capture(&page, url, output_dir).await
    }
}

#[async_trait]
impl PageArchiver for ChromeArchiver {
    async fn archive(&self, url: &Url, output_dir: &Path) -> Result<CaptureArtifacts> {
        let session = BrowserSession::launch(&self.config.browser).await?;
        let result = self.render_and_capture(&session, url, output_dir).await;
        session.close().await;
        result
    }
}
