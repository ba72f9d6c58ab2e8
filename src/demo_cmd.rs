use std::io;

use anyhow::{Context, Result};
use tracing::info;

use georelate_frame::write_csv_to;
use georelate_relate::{RelateConfig, design_matrix};

use crate::cli::DemoArgs;
use crate::sample;

/// Run the `demo` subcommand: relate the built-in polling-station and
/// aid-project collections and print the design matrix as CSV.
pub fn run(args: DemoArgs) -> Result<()> {
    let stations = sample::polling_stations()?;
    let projects = sample::aid_projects()?;
    info!(
        n_stations = stations.n_rows(),
        n_projects = projects.n_rows(),
        "demo collections loaded"
    );

    let config = RelateConfig::new()
        .with_left_key("local_id")
        .with_right_key("project_id_aid")
        .with_right_coords("lat_aid", "long_aid")
        .with_k_closest(args.k_closest);

    let matrix = design_matrix(&stations, &projects, &config)
        .context("failed to build demo design matrix")?;

    write_csv_to(&matrix, io::stdout().lock()).context("failed to print design matrix")?;
    Ok(())
}
