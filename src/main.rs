// EventLens - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Event-log loading (the single startup read)
// 4. The interactive filter loop on stdin/stdout

use clap::Parser;
use eventlens::app::{loader, repl};
use eventlens::core::filter::FilterSession;
use eventlens::util::error::LoadError;
use eventlens::util::{constants, logging};
use std::io;
use std::path::PathBuf;

/// EventLens - interactive viewer for entity-change event logs.
///
/// Point EventLens at an event-log file to load, filter and inspect
/// entity-change events from the terminal.
#[derive(Parser, Debug)]
#[command(name = "EventLens", version, about)]
struct Cli {
    /// Path to the event-log file (.csv).
    path: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    logging::init(cli.debug);

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "EventLens starting"
    );

    // A missing path is handled here rather than by clap so that every
    // startup failure exits with the same code and message shape.
    let Some(path) = cli.path else {
        eprintln!("{}", LoadError::MissingPath);
        std::process::exit(1);
    };

    let events = match loader::load_events(&path) {
        Ok(events) => events,
        Err(e) => {
            tracing::error!(error = %e, "Startup load failed");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let session = FilterSession::new(events);
    let stdin = io::stdin();
    let repl = repl::Repl::new(session, stdin.lock(), io::stdout(), io::stderr());

    match repl.run() {
        Ok(end) => {
            tracing::info!(end = ?end, "Session ended");
        }
        Err(e) => {
            tracing::error!(error = %e, "Terminal I/O failed");
            eprintln!("Terminal I/O failed: {e}");
            std::process::exit(1);
        }
    }
}
