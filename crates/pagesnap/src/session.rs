// Browser session lifecycle
//
// Owns the headless Chromium process and the CDP event loop that must be
// polled for the connection to make progress.

use chromiumoxide::Page;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// A running headless Chromium instance.
///
/// The session is exclusively owned by one capture invocation. Once acquired
/// it must be released on every exit path, success or failure; call
/// [`BrowserSession::close`] when done. Should that never happen (a panic),
/// the underlying automation layer still kills the child process on drop.
///
/// # Example
///
/// ```ignore
/// use pagesnap::BrowserSession;
///
/// let session = BrowserSession::launch().await?;
/// let page = session.new_page().await?;
/// // ... use the page ...
/// session.close().await;
/// ```
pub struct BrowserSession {
    browser: Browser,
    event_loop: JoinHandle<()>,
}

impl BrowserSession {
    /// Launches a headless browser with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Launch`] when no Chromium/Chrome binary can be found
    /// or the process fails to start.
    pub async fn launch() -> Result<Self> {
        let config = BrowserConfig::builder().build().map_err(Error::Launch)?;
        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| Error::Launch(e.to_string()))?;
        debug!("browser launched");

        // The handler stream is the CDP event loop; it ends when the browser
        // process goes away.
        let event_loop = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("CDP event loop error: {e}");
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            event_loop,
        })
    }

    /// Opens a new blank page in this browser.
    pub async fn new_page(&self) -> Result<Page> {
        self.browser
            .new_page("about:blank")
            .await
            .map_err(|e| Error::Page(e.to_string()))
    }

    /// Releases the browser: graceful close, wait for the process to exit,
    /// stop the event loop.
    ///
    /// Never fails; teardown problems are logged, and the capture outcome is
    /// whatever the inner steps returned.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("browser close failed: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            warn!("browser process did not exit cleanly: {e}");
        }
        self.event_loop.abort();
        debug!("browser released");
    }
}
