use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "example")]
#[command(
    version,
    about = "Replay pointer scenarios against the rapid-slider showcase",
    long_about = None
)]
struct Cli {
    /// Scenario file (JSON). Runs the built-in showcase scenario when omitted.
    #[arg(short, long)]
    scenario: Option<PathBuf>,
    /// Print the final slider scenes as JSON
    #[arg(long)]
    json: bool,
    /// Log slider internals at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "error,rapid_slider=debug,example=debug"
    } else {
        "error,rapid_slider=info,example=info"
    };
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(fallback) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    example::run(&example::RunOptions {
        scenario: cli.scenario,
        json: cli.json,
    })
}
