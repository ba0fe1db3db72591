//! Smoke tests for the CDP session against a local fixture server
//!
//! These need a Chrome installation and are ignored by default. The
//! fixture mimics the shape of a search engine: a form page with an
//! input named `q`, and a results page with a `#search` container
//! holding `div.g` entries.

#![cfg(feature = "cdp")]

use snapsearch::{Locator, Session, SessionConfig};
use std::sync::Once;
use std::time::Duration;
use tiny_http::{Response, Server};

static INIT: Once = Once::new();

/// Start a simple test HTTP server
fn start_test_server() -> String {
    INIT.call_once(|| {
        std::thread::spawn(|| {
            let server = Server::http("127.0.0.1:18090").unwrap();
            for request in server.incoming_requests() {
                let path = request.url().to_string();
                let response = if path == "/" {
                    html_response(
                        r#"<!DOCTYPE html>
<html>
<head><title>Fixture Search</title></head>
<body>
<form action="/results" method="get">
<input type="text" name="q">
</form>
</body>
</html>"#,
                    )
                } else if path.starts_with("/results") {
                    html_response(
                        r#"<!DOCTYPE html>
<html>
<head><title>LPU - Fixture Search</title></head>
<body>
<div id="search">
<div class="g">first</div>
<div class="g">second</div>
<div class="g">third</div>
</div>
</body>
</html>"#,
                    )
                } else {
                    Response::from_string("Not Found").with_status_code(404)
                };
                let _ = request.respond(response);
            }
        });
        // Give the server time to start
        std::thread::sleep(Duration::from_millis(100));
    });

    "http://127.0.0.1:18090".to_string()
}

fn html_response(body: &str) -> Response<std::io::Cursor<Vec<u8>>> {
    Response::from_string(body).with_header(
        "Content-Type: text/html; charset=utf-8"
            .parse::<tiny_http::Header>()
            .unwrap(),
    )
}

fn new_session() -> impl Session {
    snapsearch::new_session(SessionConfig::default()).expect("Failed to create session")
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_navigate_and_title() {
    let base_url = start_test_server();

    let mut session = new_session();
    session.navigate(&base_url).expect("Failed to navigate");

    let title = session.title().expect("Failed to get title");
    assert_eq!(title, "Fixture Search");

    session.close().unwrap();
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_submit_and_wait_for_results() {
    let base_url = start_test_server();

    let mut session = new_session();
    session.navigate(&base_url).expect("Failed to navigate");

    session
        .type_into(&Locator::name("q"), "LPU")
        .expect("Failed to type into search box");
    session.press_enter().expect("Failed to press Enter");

    session
        .wait_for_element(&Locator::id("search"), Duration::from_secs(10))
        .expect("Results container never appeared");

    let count = session
        .count_elements(&Locator::css("div.g"))
        .expect("Failed to count results");
    assert_eq!(count, 3);

    let title = session.title().expect("Failed to get title");
    assert_eq!(title, "LPU - Fixture Search");

    session.close().unwrap();
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_missing_element_fails_without_retry() {
    let base_url = start_test_server();

    let mut session = new_session();
    session.navigate(&base_url).expect("Failed to navigate");

    let err = session
        .type_into(&Locator::name("no-such-input"), "x")
        .expect_err("Lookup of an absent element should fail");
    assert!(matches!(err, snapsearch::Error::ElementNotFound(_)));

    session.close().unwrap();
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_wait_times_out_on_absent_element() {
    let base_url = start_test_server();

    let mut session = new_session();
    session.navigate(&base_url).expect("Failed to navigate");

    let err = session
        .wait_for_element(&Locator::id("never"), Duration::from_secs(1))
        .expect_err("Wait should time out");
    assert!(matches!(err, snapsearch::Error::WaitTimeout { .. }));

    session.close().unwrap();
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_count_is_zero_for_no_matches() {
    let base_url = start_test_server();

    let mut session = new_session();
    session.navigate(&base_url).expect("Failed to navigate");

    let count = session
        .count_elements(&Locator::css("div.nothing-matches"))
        .expect("Failed to count");
    assert_eq!(count, 0);

    session.close().unwrap();
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_screenshot_writes_png() {
    let base_url = start_test_server();
    let path = std::env::temp_dir().join("snapsearch_smoke.png");

    let mut session = new_session();
    session.navigate(&base_url).expect("Failed to navigate");

    session
        .save_screenshot(&path)
        .expect("Failed to save screenshot");

    let png_data = std::fs::read(&path).expect("Screenshot file missing");
    assert!(png_data.len() > 100, "PNG data seems too small");
    // PNG files start with these magic bytes
    assert_eq!(&png_data[0..8], b"\x89PNG\r\n\x1a\n");

    session.close().unwrap();
    let _ = std::fs::remove_file(&path);
}
