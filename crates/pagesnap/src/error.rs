// Error types for pagesnap

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pagesnap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while capturing a screenshot
///
/// Every variant is terminal for the invocation that produced it: there are
/// no retries and no recovery. The CLI maps all of them to exit status 1, so
/// callers that need to distinguish failure kinds must match on the variant.
#[derive(Debug, Error)]
pub enum Error {
    /// The browser process failed to start
    ///
    /// Common causes: no Chromium/Chrome binary on the host, insufficient
    /// permissions, or a sandbox restriction in the environment.
    #[error("Failed to launch browser: {0}. Check that a Chromium or Chrome binary is installed.")]
    Launch(String),

    /// Opening a new page in the launched browser failed
    #[error("Failed to open page: {0}")]
    Page(String),

    /// Navigation to the target URL failed
    ///
    /// Raised for syntactically invalid URLs, DNS failures, refused
    /// connections, and any other navigation error the browser reports.
    /// No URL validation happens before navigation; invalid input surfaces
    /// here.
    #[error("Navigation to '{url}' failed: {message}")]
    Navigation { url: String, message: String },

    /// Navigation timeout
    ///
    /// The page never reached the network-idle condition within the default
    /// navigation timeout.
    #[error("Navigation timeout after {duration_ms}ms navigating to '{url}'")]
    NavigationTimeout { url: String, duration_ms: u64 },

    /// Capturing the rendered page failed after navigation completed
    #[error("Screenshot capture failed: {0}")]
    Capture(String),

    /// Writing the captured image to disk failed
    ///
    /// The containing directory is never created; a missing parent or a
    /// non-writable location ends up here.
    #[error("Failed to write screenshot to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
