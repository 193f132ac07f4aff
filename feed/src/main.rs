//! drillbox feed driver
//!
//! Reads feed commands line by line from a script (FEED_SCRIPT) or stdin and
//! prints results to stdout. Logs go to stderr.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use drillbox_feed::app::Session;
use drillbox_feed::config::Config;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging to stderr (stdout carries command output)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut session = Session::new(stdout.lock(), config.echo);

    let summary = match &config.script_path {
        Some(path) => {
            tracing::info!("Running script {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            session.run(BufReader::new(file))?
        }
        None => {
            tracing::info!("Reading commands from stdin");
            session.run(io::stdin().lock())?
        }
    };

    // Rejected lines go to stderr regardless of the log filter
    for diagnostic in &summary.diagnostics {
        eprintln!("{}", diagnostic);
    }

    tracing::info!(
        executed = summary.executed,
        rejected = summary.rejected,
        "Session finished"
    );

    Ok(())
}
