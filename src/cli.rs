use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "swiss-renewables")]
#[command(about = "Aggregated views over Swiss renewable-energy installations", version)]
pub struct Cli {
    /// Default log filter when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute every dashboard view for one selection and write reports
    Run(RunArgs),
    /// List the canton and category selector options
    Options(DataArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct DataArgs {
    /// JSON config file with defaults for any of the options below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Installation table (CSV, optionally .gz)
    #[arg(long)]
    pub installations: Option<PathBuf>,

    /// Canton boundaries (GeoJSON, optionally .gz)
    #[arg(long)]
    pub boundaries: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Output directory for summary.json and report.txt
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Canton name, or All
    #[arg(long)]
    pub canton: Option<String>,

    /// Energy category (Bioenergy, Hydro, Solar, Wind), or All
    #[arg(long)]
    pub category: Option<String>,

    /// Remove IQR outliers from distributions and the scatter view
    #[arg(long, overrides_with = "no_trim_outliers")]
    pub trim_outliers: bool,

    /// Keep outliers even when the config file enables trimming
    #[arg(long, overrides_with = "trim_outliers")]
    pub no_trim_outliers: bool,
}

impl RunArgs {
    /// Trim choice given on the command line; the last of the two flags wins.
    pub fn trim_choice(&self) -> Option<bool> {
        if self.no_trim_outliers {
            Some(false)
        } else if self.trim_outliers {
            Some(true)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/cli.rs"]
mod tests;
