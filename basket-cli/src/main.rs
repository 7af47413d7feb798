//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    if let Err(err) = basket_cli::run() {
        eprintln!("basket: {err}");
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` and quiet below `warn` by default.
fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("basket: logging disabled: {err}");
    }
}
