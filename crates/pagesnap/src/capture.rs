// Screenshot capture operation
//
// A strictly linear pipeline: launch, navigate until network idle, capture,
// write. Every failure is terminal; nothing retries.

use std::path::Path;
use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use tracing::{debug, info};

use crate::DEFAULT_NAVIGATION_TIMEOUT_MS;
use crate::error::{Error, Result};
use crate::idle::NetworkIdleWatcher;
use crate::session::BrowserSession;

/// Captures a full-page screenshot of `url` and writes it to `output_path`
/// as a PNG, overwriting any existing file.
///
/// Navigation suspends until the page has been network-quiet for a short
/// window, bounded by [`DEFAULT_NAVIGATION_TIMEOUT_MS`]. The URL is not
/// validated up front; anything the browser cannot navigate to surfaces as
/// [`Error::Navigation`]. The parent directory of `output_path` must already
/// exist.
///
/// The browser acquired for the capture is released before this function
/// returns, on the error paths as well as on success.
///
/// # Example
///
/// ```ignore
/// pagesnap::capture("https://example.com", "/tmp/out.png").await?;
/// ```
pub async fn capture(url: &str, output_path: impl AsRef<Path>) -> Result<()> {
    let session = BrowserSession::launch().await?;
    let result = capture_page(&session, url, output_path.as_ref()).await;
    session.close().await;
    result
}

async fn capture_page(session: &BrowserSession, url: &str, output_path: &Path) -> Result<()> {
    let page = session.new_page().await?;

    // Subscribe before navigating so the document request itself is counted.
    let watcher = NetworkIdleWatcher::attach(&page)
        .await
        .map_err(|e| Error::Page(e.to_string()))?;

    page.goto(url).await.map_err(|e| Error::Navigation {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    page.wait_for_navigation()
        .await
        .map_err(|e| Error::Navigation {
            url: url.to_string(),
            message: e.to_string(),
        })?;
    watcher
        .wait_until_idle(Duration::from_millis(DEFAULT_NAVIGATION_TIMEOUT_MS))
        .await
        .map_err(|_| Error::NavigationTimeout {
            url: url.to_string(),
            duration_ms: DEFAULT_NAVIGATION_TIMEOUT_MS,
        })?;
    debug!(%url, "page reached network idle");

    let image = page
        .screenshot(
            ScreenshotParams::builder()
                .format(CaptureScreenshotFormat::Png)
                .full_page(true)
                .build(),
        )
        .await
        .map_err(|e| Error::Capture(e.to_string()))?;

    tokio::fs::write(output_path, &image)
        .await
        .map_err(|source| Error::Write {
            path: output_path.to_path_buf(),
            source,
        })?;
    info!(path = %output_path.display(), bytes = image.len(), "screenshot written");

    Ok(())
}
