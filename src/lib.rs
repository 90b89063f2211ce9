mod commands;
mod constants;
mod logging;

use anyhow::Context;

pub use commands::hobbies::{default_client, fetch_hobbies, render_outcome};

pub use constants::{BROWSER_USER_AGENT, CHALLENGE_ENDPOINT, DEFAULT_LOG_FILTER};

pub use logging::init_logging;

/// Fetches the challenge once and prints one line to stdout.
///
/// Every failure ends up as printed text; the process always exits normally.
pub fn run() {
    init_logging();

    let line = match run_once() {
        Ok(line) => line,
        Err(err) => format!("{err:#}"),
    };

    println!("{line}");
}

fn run_once() -> anyhow::Result<String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    let client = default_client();
    Ok(runtime.block_on(async { render_outcome(fetch_hobbies(&client).await) }))
}
