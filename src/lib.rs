//! Snapsearch
//!
//! A scripted headless-browser walkthrough: open a browser, run a web
//! search, wait for the results to render, count them, capture a
//! screenshot, and release the browser.
//!
//! The crate is built around a small [`Session`] trait so the fixed
//! walkthrough in [`walkthrough`] can be driven against the real Chrome
//! DevTools Protocol backend or against a fake session in tests.
//!
//! # Example
//!
//! ```no_run
//! use snapsearch::SessionConfig;
//!
//! # fn main() -> snapsearch::Result<()> {
//! let session = snapsearch::new_session(SessionConfig::default())?;
//! let report = snapsearch::walkthrough::run(session, &mut std::io::stdout())?;
//! println!("{} results on '{}'", report.result_count, report.title);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::time::Duration;

pub mod error;
pub use error::{Error, Result};

#[cfg(feature = "cdp")]
pub mod cdp;

pub mod walkthrough;

/// Configuration for a browser session
///
/// The walkthrough only ever uses [`SessionConfig::default`]; the struct
/// exists so backends have one place to read launch parameters from.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Run the browser without a visible window
    pub headless: bool,
    /// Viewport dimensions
    pub viewport: Viewport,
    /// Timeout for page navigation in milliseconds
    pub timeout_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport: Viewport::default(),
            timeout_ms: 30000,
        }
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// How to address an element in the rendered page
///
/// Backends that only speak CSS selectors (the CDP backend does) can use
/// [`Locator::to_css`] to turn any variant into a selector string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Match on the `name` attribute
    Name(String),
    /// Match on the `id` attribute
    Id(String),
    /// An arbitrary CSS selector
    Css(String),
}

impl Locator {
    pub fn name(value: &str) -> Self {
        Locator::Name(value.to_string())
    }

    pub fn id(value: &str) -> Self {
        Locator::Id(value.to_string())
    }

    pub fn css(selector: &str) -> Self {
        Locator::Css(selector.to_string())
    }

    /// Render the locator as a CSS selector string
    pub fn to_css(&self) -> String {
        match self {
            Locator::Name(name) => format!("[name='{}']", name),
            Locator::Id(id) => format!("#{}", id),
            Locator::Css(selector) => selector.clone(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Name(name) => write!(f, "name={}", name),
            Locator::Id(id) => write!(f, "id={}", id),
            Locator::Css(selector) => write!(f, "css={}", selector),
        }
    }
}

/// Core trait for browser session implementations
///
/// All operations block. A session is used by exactly one thread of
/// control and must be released with [`Session::close`], which consumes
/// `self` so a released session cannot be reused.
pub trait Session {
    /// Acquire a new browser session with the given configuration
    fn new(config: SessionConfig) -> Result<Self>
    where
        Self: Sized;

    /// Navigate to a URL and wait until the page has loaded
    fn navigate(&mut self, url: &str) -> Result<()>;

    /// Locate a single element and type text into it
    ///
    /// Fails with [`Error::ElementNotFound`] if the element is absent;
    /// there is no retry.
    fn type_into(&mut self, target: &Locator, text: &str) -> Result<()>;

    /// Send a line-submit (Enter) key signal to the focused element
    fn press_enter(&mut self) -> Result<()>;

    /// Block until an element is present or the timeout elapses
    ///
    /// Fails with [`Error::WaitTimeout`] if the element never appears.
    fn wait_for_element(&mut self, target: &Locator, timeout: Duration) -> Result<()>;

    /// Count the elements matching a locator (zero matches is not an error)
    fn count_elements(&mut self, target: &Locator) -> Result<usize>;

    /// Read the page's title string
    fn title(&mut self) -> Result<String>;

    /// Capture the current frame as PNG and write it to `path`,
    /// overwriting any existing file
    fn save_screenshot(&mut self, path: &Path) -> Result<()>;

    /// Pause for a fixed duration
    ///
    /// The default implementation sleeps the current thread. Fake
    /// sessions used in tests can override this to return immediately.
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }

    /// Release the session and clean up resources
    fn close(self) -> Result<()>;
}

/// Create a new session with the default backend
#[cfg(feature = "cdp")]
pub fn new_session(config: SessionConfig) -> Result<impl Session> {
    cdp::CdpSession::new(config)
}
