use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use edpoints::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    if let Err(err) = run(&cli, stdout.lock()) {
        error!("{err}");
        std::process::exit(1);
    }
}
