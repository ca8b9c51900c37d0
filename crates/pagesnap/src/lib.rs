//! pagesnap: full-page screenshots of web pages via headless Chromium
//!
//! This crate does one thing: given a URL and an output path, it launches a
//! headless Chromium, navigates until the network is effectively idle,
//! captures a full-page PNG, and writes it to disk.
//!
//! # Examples
//!
//! ```ignore
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     pagesnap::capture("https://example.com", "/tmp/out.png").await?;
//!     Ok(())
//! }
//! ```
//!
//! The lower-level [`BrowserSession`] is exposed for callers that want to
//! manage the browser lifecycle themselves:
//!
//! ```ignore
//! use pagesnap::BrowserSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = BrowserSession::launch().await?;
//!     let page = session.new_page().await?;
//!     page.goto("https://example.com").await?;
//!     session.close().await;
//!     Ok(())
//! }
//! ```

mod capture;
mod error;
mod idle;
mod session;

/// Default navigation timeout in milliseconds.
///
/// Bounds the wait for the network-idle condition. Not exposed as a CLI
/// option; pages that keep the network busy for longer than this fail with
/// [`Error::NavigationTimeout`].
pub const DEFAULT_NAVIGATION_TIMEOUT_MS: u64 = 30_000;

// Re-export error types
pub use error::{Error, Result};

// Re-export the capture operation and the browser session handle
pub use capture::capture;
pub use session::BrowserSession;
