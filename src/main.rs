// src/main.rs
use clap::Parser;
use loglayer::utils::logging::install_tracing_bridge;
use loglayer::{get_logger, setup_logging, Level, LoggingError};

/// Configure logging for an environment and emit one record
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Runtime environment: "dev" logs to the console, anything else to system_log.json
    #[arg(short, long, env = "LOGLAYER_ENV", default_value = "dev")]
    env: String,

    /// Logger name to emit under
    #[arg(short, long, default_value = "loglayer.cli")]
    name: String,

    /// Level of the emitted record (debug, info, warning, error, critical)
    #[arg(short, long, default_value = "info")]
    level: Level,

    /// Message to log
    message: Vec<String>,
}

fn main() -> Result<(), LoggingError> {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (fails fast if the log file cannot be opened)
    let kind = setup_logging(&args.env)?;

    // 3. Route this binary's own tracing output through the same sink
    if !install_tracing_bridge() {
        eprintln!("warning: a tracing subscriber is already installed; tracing events bypass loglayer");
    }
    tracing::debug!("Starting with args: {:?}", args);
    tracing::info!("Logging to {}", kind);

    // 4. Emit the requested record
    let message = if args.message.is_empty() {
        "hello from loglayer".to_string()
    } else {
        args.message.join(" ")
    };
    get_logger(&args.name).log(args.level, message);

    Ok(())
}
