//! Capture writer: persists a rendered page as three artifacts
//!
//! Per URL: `<stem>.mhtml` (self-contained archival snapshot), `<stem>.html`
//! (post-render markup, UTF-8), `<stem>.png` (full-page screenshot). The
//! stem comes from [`sanitize_file_stem`], the same derivation the
//! coordinator uses to read the markup back for link discovery.

use crate::url::sanitize_file_stem;
use crate::{Result, SnapError};
use chromiumoxide::cdp::browser_protocol::page::CaptureSnapshotParams;
use chromiumoxide::error::CdpError;
use chromiumoxide::page::{Page, ScreenshotParams};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use url::Url;

/// Paths of the artifacts written for one URL
///
/// `mhtml_path` is `None` when the archival snapshot failed; that failure
/// is recoverable and never blocks the other two artifacts.
#[derive(Debug, Clone)]
pub struct CaptureArtifacts {
    pub mhtml_path: Option<PathBuf>,
    pub html_path: PathBuf,
    pub png_path: PathBuf,
}

/// Captures all three artifacts for the page into `output_dir`
///
/// Failure tiers follow the archival priority: the MHTML snapshot is
/// best-effort (warn and continue), while markup and screenshot failures
/// abort the item. A recurring sanitized stem overwrites the previous
/// files.
pub async fn capture(page: &Page, url: &Url, output_dir: &Path) -> Result<CaptureArtifacts> {
    let stem = sanitize_file_stem(url.as_str());

    let mhtml_path = write_snapshot(page, url, &output_dir.join(format!("{stem}.mhtml"))).await;

    let html_path = output_dir.join(format!("{stem}.html"));
    let markup = page.content().await?;
    tokio::fs::write(&html_path, markup)
        .await
        .map_err(|source| SnapError::MarkupWrite {
            path: html_path.clone(),
            source,
        })?;
    info!("Wrote markup to {}", html_path.display());

    let png_path = output_dir.join(format!("{stem}.png"));
    let screenshot = page
        .screenshot(ScreenshotParams::builder().full_page(true).build())
        .await
        .map_err(|e| SnapError::Screenshot {
            url: url.to_string(),
            message: e.to_string(),
        })?;
    tokio::fs::write(&png_path, &screenshot).await?;
    info!("Wrote screenshot to {}", png_path.display());

    Ok(CaptureArtifacts {
        mhtml_path,
        html_path,
        png_path,
    })
}

/// Captures and writes the MHTML snapshot, returning its path on success
///
/// Any failure is logged as a warning; the caller still captures the
/// markup and screenshot.
async fn write_snapshot(page: &Page, url: &Url, path: &Path) -> Option<PathBuf> {
    let data = match capture_mhtml(page).await {
        Ok(data) => data,
        Err(e) => {
            warn!("MHTML snapshot capture failed for {url}: {e}");
            return None;
        }
    };

    match tokio::fs::write(path, data.as_bytes()).await {
        Ok(()) => {
            info!("Wrote MHTML snapshot to {}", path.display());
            Some(path.to_path_buf())
        }
        Err(e) => {
            warn!("Failed to write MHTML snapshot to {}: {e}", path.display());
            None
        }
    }
}

/// Runs the `Page.captureSnapshot` DevTools command (MHTML format)
async fn capture_mhtml(page: &Page) -> std::result::Result<String, CdpError> {
    let response = page.execute(CaptureSnapshotParams::default()).await?;
    Ok(response.result.data)
}
