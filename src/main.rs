use anyhow::Result;
use chat_keys::cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // Parse CLI first so --help/--version stay clean of log setup
    let cli = Cli::parse();

    // Routes all log::info!() etc. to the debug log file; RUST_LOG mirrors to stderr.
    // --log-level wins over RUST_LOG, which wins over settings (applied once loaded).
    chat_keys::debug::init_log_bridge(cli.log_level.map(Into::into));

    log::info!("Starting chat-keys");

    match chat_keys::app::run(cli) {
        Ok(0) => Ok(()),
        // Non-zero exit without an error (e.g. no action matched)
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("chat-keys: error: {e:#}");
            Err(e)
        }
    }
}
