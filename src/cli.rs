use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Georelate geospatial design-matrix builder.
#[derive(Parser)]
#[command(
    name = "georelate",
    version,
    about = "Relates two geolocated datasets by k-nearest great-circle distance"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build the k-nearest design matrix from two CSV files.
    Relate(RelateArgs),
    /// Write the full cross-product distance table for two CSV files.
    Distances(DistancesArgs),
    /// Run the built-in example dataset and print the design matrix.
    Demo(DemoArgs),
}

/// Input and column-selection flags shared by the CSV subcommands.
#[derive(clap::Args)]
pub struct JoinFlags {
    /// Path to the left CSV file (drives output cardinality).
    #[arg(long)]
    pub left: PathBuf,

    /// Path to the right CSV file (supplies nearest-match attributes).
    #[arg(long)]
    pub right: PathBuf,

    /// Path to TOML settings file; flags override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Left key column (default: the row identifier).
    #[arg(long)]
    pub left_id: Option<String>,

    /// Right key column (default: the row identifier).
    #[arg(long)]
    pub right_id: Option<String>,

    /// Column to lift into the left row identifier before joining.
    #[arg(long)]
    pub left_index: Option<String>,

    /// Column to lift into the right row identifier before joining.
    #[arg(long)]
    pub right_index: Option<String>,

    /// Left latitude column.
    #[arg(long)]
    pub left_lat: Option<String>,

    /// Left longitude column.
    #[arg(long)]
    pub left_lon: Option<String>,

    /// Right latitude column.
    #[arg(long)]
    pub right_lat: Option<String>,

    /// Right longitude column.
    #[arg(long)]
    pub right_lon: Option<String>,

    /// Earth radius in kilometres.
    #[arg(long)]
    pub radius: Option<f64>,
}

/// Arguments for the `relate` subcommand.
#[derive(clap::Args)]
pub struct RelateArgs {
    #[command(flatten)]
    pub join: JoinFlags,

    /// Number of nearest matches to attach per left record.
    #[arg(short, long)]
    pub k_closest: Option<usize>,

    /// Path for the output CSV file.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `distances` subcommand.
#[derive(clap::Args)]
pub struct DistancesArgs {
    #[command(flatten)]
    pub join: JoinFlags,

    /// Path for the output CSV file.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `demo` subcommand.
#[derive(clap::Args)]
pub struct DemoArgs {
    /// Number of nearest aid projects to attach per polling station.
    #[arg(short, long, default_value_t = 3)]
    pub k_closest: usize,
}
