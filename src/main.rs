#[cfg(feature = "cdp")]
fn main() -> anyhow::Result<()> {
    use snapsearch::SessionConfig;

    let session = snapsearch::new_session(SessionConfig::default())?;
    snapsearch::walkthrough::run(session, &mut std::io::stdout())?;
    Ok(())
}

#[cfg(not(feature = "cdp"))]
fn main() {
    eprintln!("snapsearch: built without the cdp backend, nothing to run");
    std::process::exit(1);
}
