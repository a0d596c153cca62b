//! sonar-mitigate binary entry point.
//! Resolves settings, runs the pipeline and maps failures to exit codes.

use clap::Parser;
use sonar_mitigate::cli::Cli;
use sonar_mitigate::error::Result;
use sonar_mitigate::{config, output, pipeline};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match run(&cli) {
        Ok(summary) => output::print_summary(&summary, &cli.output),
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            output::print_error(&e, &cli.output);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli) -> Result<sonar_mitigate::models::RunSummary> {
    let file = match cli.config.as_deref() {
        Some(p) => Some(config::load_config_file(p)?),
        None => config::load_config(std::path::Path::new("."))?,
    };
    let settings = config::resolve_settings(&cli.overrides(), &config::process_env, file.as_ref())?;
    tracing::debug!(?settings, "resolved settings");
    pipeline::run(&settings, &cli.output)
}

// Diagnostics go to stderr; stdout carries progress and the summary.
fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(l) => EnvFilter::try_new(l).unwrap_or_else(|_| EnvFilter::new("warn")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
