use anyhow::{Context, Result};
use tracing::info;

use georelate_frame::write_csv;
use georelate_relate::distance_table;

use crate::cli::DistancesArgs;
use crate::config::{RelateToml, build_relate_config};
use crate::relate_cmd::load_collections;

/// Run the `distances` subcommand: CSV in, full distance table CSV out.
pub fn run(args: DistancesArgs) -> Result<()> {
    let settings = RelateToml::load_or_default(args.join.config.as_deref())?;
    let config = build_relate_config(&settings, &args.join, None);

    let (left, right) = load_collections(&args.join)?;

    let table = distance_table(&left, &right, &config)
        .context("failed to build distance table")?;
    info!(
        n_pairs = table.n_rows(),
        "distance table built"
    );

    write_csv(&table, &args.output)
        .with_context(|| format!("failed to write output: {}", args.output.display()))?;
    info!(path = %args.output.display(), "output written");
    Ok(())
}
