//! Error types for browser sessions and the walkthrough

use thiserror::Error;

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a browser session
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to launch or attach to a browser
    #[error("Session initialization failed: {0}")]
    InitializationError(String),

    /// Failed to navigate to a URL
    #[error("Navigation failed: {0}")]
    NavigationError(String),

    /// A single-element lookup found nothing
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Failed to deliver keystrokes or text input
    #[error("Input failed: {0}")]
    InputError(String),

    /// An explicit wait elapsed without its condition becoming true
    #[error("Timed out after {timeout_ms}ms waiting for {target}")]
    WaitTimeout { target: String, timeout_ms: u64 },

    /// Failed to capture or persist a screenshot
    #[error("Screenshot capture failed: {0}")]
    CaptureError(String),

    /// I/O error (output sink, filesystem)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "cdp")]
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}
