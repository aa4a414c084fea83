use clap::Parser;
use thiserror::Error;
use tracing::info;

use swiss_renewables::cli::{Cli, Command};
use swiss_renewables::config::{ConfigError, DataPaths, FileConfig, RunConfig};
use swiss_renewables::input::{Dataset, InputError};
use swiss_renewables::logging;
use swiss_renewables::report::{ReportError, write_reports};
use swiss_renewables::views::build_dashboard;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Run(args) => {
            let file = FileConfig::load_optional(args.data.config.as_deref())?;
            let config = RunConfig::resolve(&args, &file)?;
            let dataset = Dataset::load(&config.data.installations, &config.data.boundaries)?;
            let report = build_dashboard(&dataset, &config.request);
            write_reports(&report, &config.out_dir)?;
            info!(out_dir = %config.out_dir.display(), "done");
        }
        Command::Options(args) => {
            let file = FileConfig::load_optional(args.config.as_deref())?;
            let paths = DataPaths::resolve(&args, &file);
            let dataset = Dataset::load(&paths.installations, &paths.boundaries)?;
            println!("cantons: {}", dataset.canton_options().join(", "));
            println!("categories: {}", dataset.category_options().join(", "));
        }
    }
    Ok(())
}
