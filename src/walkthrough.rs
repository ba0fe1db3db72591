//! The fixed search walkthrough
//!
//! A linear sequence of browser actions: navigate to the search engine,
//! submit a query, wait for the result container, count the result
//! entries, read the title, capture a screenshot, pause for observation.
//! Every value is hard-coded; there are no flags and no configuration.
//!
//! [`run`] guarantees that the session is released exactly once on every
//! exit path, whether the sequence completes or fails partway through.

use crate::{Locator, Result, Session};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Page the search is run against
pub const SEARCH_URL: &str = "https://www.google.com";

/// Query submitted into the search box
pub const QUERY: &str = "LPU";

/// Where the captured frame is written (relative path, overwritten)
pub const SCREENSHOT_PATH: &str = "lpu.png";

/// Upper bound on the explicit wait for the result container
pub const RESULTS_WAIT: Duration = Duration::from_secs(10);

/// Trailing pause so a human can look at the page; no functional purpose
pub const OBSERVE_PAUSE: Duration = Duration::from_secs(3);

/// What a completed walkthrough observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Number of result entries matching `div.g`
    pub result_count: usize,
    /// Title of the results page
    pub title: String,
}

/// Run the walkthrough, releasing the session on every exit path.
///
/// The session is closed exactly once whether the sequence succeeds or an
/// action fails partway through. A mid-sequence error aborts the remaining
/// steps and is returned after the release has happened; if the sequence
/// succeeds but the release itself fails, the release error is returned.
pub fn run<S: Session, W: Write>(mut session: S, out: &mut W) -> Result<RunReport> {
    let outcome = drive(&mut session, out);
    let released = session.close();
    let report = outcome?;
    released?;
    Ok(report)
}

fn drive<S: Session>(session: &mut S, out: &mut impl Write) -> Result<RunReport> {
    session.navigate(SEARCH_URL)?;

    // Find the search box by its name attribute and submit the query
    session.type_into(&Locator::name("q"), QUERY)?;
    session.press_enter()?;

    // Explicit wait for the result container
    session.wait_for_element(&Locator::id("search"), RESULTS_WAIT)?;

    let result_count = session.count_elements(&Locator::css("div.g"))?;
    writeln!(out, "Found {} search results", result_count)?;

    let title = session.title()?;
    writeln!(out, "Page title: {}", title)?;

    session.save_screenshot(Path::new(SCREENSHOT_PATH))?;

    session.pause(OBSERVE_PAUSE);

    Ok(RunReport {
        result_count,
        title,
    })
}
