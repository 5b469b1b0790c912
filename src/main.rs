mod budget;
mod input;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    init_logging();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        mode = if args.len() > 1 { "cli" } else { "tui" },
        "nairobi-budget starting"
    );

    match args.len() {
        1 => run::as_tui(),
        2.. => run::as_cli(&args),
        _ => {
            eprintln!("Usage: nairobi-budget [command]");
            Ok(())
        }
    }
}

/// Logging is best effort: a read-only home directory should not stop the app.
fn init_logging() {
    let result = logging::data_dir().and_then(|dir| logging::init_tracing(&dir));
    if let Err(e) = result {
        eprintln!("Warning: logging disabled: {e:#}");
    }
}
