use anyhow::{Context, Result};
use tracing::info;

use georelate_frame::{Frame, read_csv, write_csv};
use georelate_relate::design_matrix;

use crate::cli::{JoinFlags, RelateArgs};
use crate::config::{RelateToml, build_relate_config};

/// Run the `relate` subcommand: CSV in, design matrix CSV out.
pub fn run(args: RelateArgs) -> Result<()> {
    let settings = RelateToml::load_or_default(args.join.config.as_deref())?;
    let config = build_relate_config(&settings, &args.join, args.k_closest);

    let (left, right) = load_collections(&args.join)?;

    let matrix = design_matrix(&left, &right, &config)
        .context("failed to build design matrix")?;
    info!(
        n_rows = matrix.n_rows(),
        n_cols = matrix.n_cols(),
        "design matrix assembled"
    );

    write_csv(&matrix, &args.output)
        .with_context(|| format!("failed to write output: {}", args.output.display()))?;
    info!(path = %args.output.display(), "output written");
    Ok(())
}

/// Reads both CSV collections and applies any row-identifier lifts.
pub fn load_collections(flags: &JoinFlags) -> Result<(Frame, Frame)> {
    let mut left = read_csv(&flags.left)
        .with_context(|| format!("failed to read left CSV: {}", flags.left.display()))?;
    info!(
        path = %flags.left.display(),
        n_rows = left.n_rows(),
        "left collection loaded"
    );

    let mut right = read_csv(&flags.right)
        .with_context(|| format!("failed to read right CSV: {}", flags.right.display()))?;
    info!(
        path = %flags.right.display(),
        n_rows = right.n_rows(),
        "right collection loaded"
    );

    if let Some(column) = &flags.left_index {
        left.set_index_column(column)
            .with_context(|| format!("cannot use '{column}' as left row identifier"))?;
    }
    if let Some(column) = &flags.right_index {
        right
            .set_index_column(column)
            .with_context(|| format!("cannot use '{column}' as right row identifier"))?;
    }

    Ok((left, right))
}
