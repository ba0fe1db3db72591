//! Chrome DevTools Protocol session implementation

use crate::{Error, Locator, Result, Session, SessionConfig};
use headless_chrome::browser::tab::Tab;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use log::warn;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// CDP-based browser session (uses the `headless_chrome` crate)
///
/// Launches a headless Chrome instance, owns a single tab, and provides
/// the `Session` trait implementation over it. Element locators are
/// resolved to CSS selectors before being handed to Chrome.
pub struct CdpSession {
    browser: Browser,
    tab: Arc<Tab>,
}

impl Session for CdpSession {
    fn new(config: SessionConfig) -> Result<Self>
    where
        Self: Sized,
    {
        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.viewport.width, config.viewport.height)))
            .build()
            .map_err(|e| Error::InitializationError(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| Error::InitializationError(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| Error::InitializationError(format!("Failed to create tab: {}", e)))?;

        tab.set_default_timeout(Duration::from_millis(config.timeout_ms));

        Ok(Self { browser, tab })
    }

    fn navigate(&mut self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| Error::NavigationError(format!("Navigation to '{}' failed: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| Error::NavigationError(format!("Wait for navigation failed: {}", e)))?;

        // Let the page settle before the first element lookup
        std::thread::sleep(Duration::from_millis(500));

        Ok(())
    }

    fn type_into(&mut self, target: &Locator, text: &str) -> Result<()> {
        let element = self
            .tab
            .find_element(&target.to_css())
            .map_err(|_| Error::ElementNotFound(target.to_string()))?;

        element
            .type_into(text)
            .map_err(|e| Error::InputError(format!("Typing into {} failed: {}", target, e)))?;

        Ok(())
    }

    fn press_enter(&mut self) -> Result<()> {
        self.tab
            .press_key("Enter")
            .map_err(|e| Error::InputError(format!("Enter key failed: {}", e)))?;
        Ok(())
    }

    fn wait_for_element(&mut self, target: &Locator, timeout: Duration) -> Result<()> {
        self.tab
            .wait_for_element_with_custom_timeout(&target.to_css(), timeout)
            .map_err(|_| Error::WaitTimeout {
                target: target.to_string(),
                timeout_ms: timeout.as_millis() as u64,
            })?;
        Ok(())
    }

    fn count_elements(&mut self, target: &Locator) -> Result<usize> {
        let selector = target.to_css();
        match self.tab.find_elements(&selector) {
            Ok(elements) => Ok(elements.len()),
            // Some Chrome versions surface an empty match set as an error
            Err(e) if e.to_string().contains("No element found") => {
                warn!("treating query error for '{}' as an empty match set: {}", selector, e);
                Ok(0)
            }
            Err(e) => Err(Error::Other(format!("Element query '{}' failed: {}", selector, e))),
        }
    }

    fn title(&mut self) -> Result<String> {
        self.tab
            .get_title()
            .map_err(|e| Error::Other(format!("Failed to get title: {}", e)))
    }

    fn save_screenshot(&mut self, path: &Path) -> Result<()> {
        let png_data = self
            .tab
            .capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| Error::CaptureError(format!("Screenshot failed: {}", e)))?;

        std::fs::write(path, png_data)
            .map_err(|e| Error::CaptureError(format!("Writing '{}' failed: {}", path.display(), e)))?;

        Ok(())
    }

    fn close(self) -> Result<()> {
        // Drop the browser and tab explicitly so the child process is
        // terminated promptly.
        drop(self.tab);
        drop(self.browser);
        Ok(())
    }
}
