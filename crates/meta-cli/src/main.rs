//! meta-forest: fixed-effects meta-analysis from the command line

mod commands;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use meta_report::{EffectMeasure, ReportConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "meta-forest")]
#[command(about = "Fixed-effects meta-analysis of two-arm trials, with forest plots")]
#[command(version)]
struct Cli {
    /// JSON dataset to analyze (defaults to the built-in inositol studies)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Effect measure computed for every study
    #[arg(long, global = true, value_enum, default_value_t = Measure::HedgesG)]
    measure: Measure,

    /// Order categories by absolute pooled effect, largest first
    #[arg(long, global = true)]
    sort_by_magnitude: bool,

    /// Decimal places for effects and intervals
    #[arg(long, global = true, default_value_t = 2)]
    decimals: usize,

    /// Show I² for single-study categories instead of "n/a"
    #[arg(long, global = true)]
    show_single_study_heterogeneity: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Per-category summary table and headline findings (default)
    Summary,

    /// Every study's effect, interval and weight
    Studies,

    /// Render the forest plot as SVG
    Plot {
        /// Output SVG file
        #[arg(long, short)]
        output: PathBuf,

        /// Image width in pixels
        #[arg(long, default_value_t = 1500)]
        width: u32,
    },

    /// Export per-study results as CSV and/or the whole analysis as JSON
    #[command(group(ArgGroup::new("target").required(true).multiple(true)))]
    Export {
        /// Per-study CSV file
        #[arg(long, group = "target")]
        csv: Option<PathBuf>,

        /// Whole-analysis JSON file
        #[arg(long, group = "target")]
        json: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Measure {
    /// Bias-corrected standardized mean difference
    HedgesG,
    /// Raw difference in the outcome's units
    MeanDifference,
}

impl From<Measure> for EffectMeasure {
    fn from(measure: Measure) -> Self {
        match measure {
            Measure::HedgesG => EffectMeasure::HedgesG,
            Measure::MeanDifference => EffectMeasure::MeanDifference,
        }
    }
}

impl Cli {
    fn report_config(&self) -> ReportConfig {
        ReportConfig::new()
            .with_measure(self.measure.into())
            .with_sort_by_magnitude(self.sort_by_magnitude)
            .with_suppress_single_study_heterogeneity(!self.show_single_study_heterogeneity)
            .with_decimals(self.decimals)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "meta_forest=debug,meta_report=debug,meta_pooling=debug,meta_effect=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.report_config();
    let command = cli.command.unwrap_or(Commands::Summary);

    match cli.data {
        Some(path) => commands::run_file(&path, &command, &config),
        None => commands::run_builtin(&command, &config),
    }
}
