use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use georelate_relate::{RelateConfig, Suffixes};

use crate::cli::JoinFlags;

/// Join settings loadable from a TOML file.
///
/// Every field is optional; absent fields fall back to the engine defaults
/// (row-identifier keys, `lat`/`lon` coordinates, `_left`/`_right` suffixes).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelateToml {
    /// Left key column.
    #[serde(default)]
    pub left_id: Option<String>,

    /// Right key column.
    #[serde(default)]
    pub right_id: Option<String>,

    /// Left latitude column.
    #[serde(default)]
    pub left_lat: Option<String>,

    /// Left longitude column.
    #[serde(default)]
    pub left_lon: Option<String>,

    /// Right latitude column.
    #[serde(default)]
    pub right_lat: Option<String>,

    /// Right longitude column.
    #[serde(default)]
    pub right_lon: Option<String>,

    /// Left-side suffix for colliding column names.
    #[serde(default)]
    pub left_suffix: Option<String>,

    /// Right-side suffix for colliding column names.
    #[serde(default)]
    pub right_suffix: Option<String>,

    /// Number of nearest matches to attach per left record.
    #[serde(default)]
    pub k_closest: Option<usize>,

    /// Earth radius in kilometres.
    #[serde(default)]
    pub radius: Option<f64>,
}

impl RelateToml {
    /// Loads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Loads settings from an optional path; no path means all defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

/// Builds the engine configuration from file settings and CLI flags.
///
/// Flags win over file values; anything set in neither keeps the engine
/// default.
pub fn build_relate_config(
    file: &RelateToml,
    flags: &JoinFlags,
    k_closest: Option<usize>,
) -> RelateConfig {
    let mut config = RelateConfig::new();

    if let Some(id) = flags.left_id.as_ref().or(file.left_id.as_ref()) {
        config = config.with_left_key(id.clone());
    }
    if let Some(id) = flags.right_id.as_ref().or(file.right_id.as_ref()) {
        config = config.with_right_key(id.clone());
    }

    config = config.with_left_coords(
        pick(&flags.left_lat, &file.left_lat, "lat"),
        pick(&flags.left_lon, &file.left_lon, "lon"),
    );
    config = config.with_right_coords(
        pick(&flags.right_lat, &file.right_lat, "lat"),
        pick(&flags.right_lon, &file.right_lon, "lon"),
    );

    if file.left_suffix.is_some() || file.right_suffix.is_some() {
        config = config.with_suffixes(Suffixes::new(
            file.left_suffix.as_deref(),
            file.right_suffix.as_deref(),
        ));
    }

    if let Some(k) = k_closest.or(file.k_closest) {
        config = config.with_k_closest(k);
    }
    if let Some(radius) = flags.radius.or(file.radius) {
        config = config.with_radius(radius);
    }

    config
}

fn pick(flag: &Option<String>, file: &Option<String>, default: &str) -> String {
    flag.as_ref()
        .or(file.as_ref())
        .cloned()
        .unwrap_or_else(|| default.to_string())
}
