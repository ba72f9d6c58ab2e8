//! All-pairs distance table construction.

use georelate_frame::{Frame, Value};

use crate::config::RelateConfig;
use crate::distance::haversine;
use crate::error::{RelateError, Side};
use crate::keys::{KeySource, apply_suffix};

/// Name of the computed distance column.
pub const DISTANCE_COL: &str = "distance";

/// Builds the full cross-product distance table between two collections.
///
/// One row per (left record, right record) pair — `|left| × |right|` rows,
/// no spatial pruning — carrying each side's join key and raw coordinate
/// values plus the haversine distance in the [`DISTANCE_COL`] column. Rows
/// are generated left-major, so they arrive grouped by left record.
///
/// Any projected column name present on both sides is disambiguated with the
/// configured suffixes, whether or not it is a key or coordinate column.
///
/// An empty left or right collection yields an empty table with the resolved
/// schema, not an error. Duplicate keys within a side are permitted here.
///
/// # Errors
///
/// Returns [`RelateError::MissingColumn`] for an absent explicit key or
/// coordinate column, [`RelateError::AmbiguousKeyCollision`] if a shared
/// name meets an all-empty suffix pair, and [`RelateError::InvalidRadius`]
/// from config validation.
pub fn distance_table(
    left: &Frame,
    right: &Frame,
    config: &RelateConfig,
) -> Result<Frame, RelateError> {
    config.validate()?;

    let left_source = KeySource::from_explicit(config.left_key());
    let right_source = KeySource::from_explicit(config.right_key());
    let left_key = left_source.resolve(left, Side::Left)?;
    let right_key = right_source.resolve(right, Side::Right)?;

    check_column(left, config.left_lat(), Side::Left)?;
    check_column(left, config.left_lon(), Side::Left)?;
    check_column(right, config.right_lat(), Side::Right)?;
    check_column(right, config.right_lon(), Side::Right)?;

    // Projected raw values and coerced coordinates, per side.
    let left_keys = left_source.values(left, Side::Left)?;
    let right_keys = right_source.values(right, Side::Right)?;
    let left_lat_raw = left.column(config.left_lat())?;
    let left_lon_raw = left.column(config.left_lon())?;
    let right_lat_raw = right.column(config.right_lat())?;
    let right_lon_raw = right.column(config.right_lon())?;
    let left_lat = left.numeric_column(config.left_lat())?;
    let left_lon = left.numeric_column(config.left_lon())?;
    let right_lat = right.numeric_column(config.right_lat())?;
    let right_lon = right.numeric_column(config.right_lon())?;

    let (left_names, right_names) = resolve_pair_names(
        [&left_key, config.left_lat(), config.left_lon()],
        [&right_key, config.right_lat(), config.right_lon()],
        config,
    )?;

    // Cross product, left-major.
    let n_left = left.n_rows();
    let n_right = right.n_rows();
    let n_pairs = n_left * n_right;

    let mut key_l = Vec::with_capacity(n_pairs);
    let mut lat_l = Vec::with_capacity(n_pairs);
    let mut lon_l = Vec::with_capacity(n_pairs);
    let mut key_r = Vec::with_capacity(n_pairs);
    let mut lat_r = Vec::with_capacity(n_pairs);
    let mut lon_r = Vec::with_capacity(n_pairs);
    let mut p1_lat = Vec::with_capacity(n_pairs);
    let mut p1_lon = Vec::with_capacity(n_pairs);
    let mut p2_lat = Vec::with_capacity(n_pairs);
    let mut p2_lon = Vec::with_capacity(n_pairs);

    for li in 0..n_left {
        for ri in 0..n_right {
            key_l.push(left_keys[li].clone());
            lat_l.push(left_lat_raw[li].clone());
            lon_l.push(left_lon_raw[li].clone());
            key_r.push(right_keys[ri].clone());
            lat_r.push(right_lat_raw[ri].clone());
            lon_r.push(right_lon_raw[ri].clone());
            p1_lat.push(left_lat[li]);
            p1_lon.push(left_lon[li]);
            p2_lat.push(right_lat[ri]);
            p2_lon.push(right_lon[ri]);
        }
    }

    let distances = haversine(&p1_lat, &p1_lon, &p2_lat, &p2_lon, config.radius());

    let [key_l_name, lat_l_name, lon_l_name] = left_names;
    let [key_r_name, lat_r_name, lon_r_name] = right_names;
    let table = Frame::from_columns([
        (key_l_name, key_l),
        (lat_l_name, lat_l),
        (lon_l_name, lon_l),
        (key_r_name, key_r),
        (lat_r_name, lat_r),
        (lon_r_name, lon_r),
        (
            DISTANCE_COL.to_string(),
            distances.into_iter().map(Value::Float).collect(),
        ),
    ])?;
    Ok(table)
}

fn check_column(frame: &Frame, name: &str, side: Side) -> Result<(), RelateError> {
    if frame.has_column(name) {
        Ok(())
    } else {
        Err(RelateError::MissingColumn {
            side,
            name: name.to_string(),
        })
    }
}

/// Suffixes every projected name that appears on both sides.
fn resolve_pair_names(
    left: [&str; 3],
    right: [&str; 3],
    config: &RelateConfig,
) -> Result<([String; 3], [String; 3]), RelateError> {
    let suffixes = config.suffixes();

    let mut out_left = [String::new(), String::new(), String::new()];
    let mut out_right = [String::new(), String::new(), String::new()];

    for (i, &name) in left.iter().enumerate() {
        out_left[i] = if right.contains(&name) {
            if suffixes.left().is_none() && suffixes.right().is_none() {
                return Err(RelateError::AmbiguousKeyCollision {
                    name: name.to_string(),
                });
            }
            apply_suffix(name, suffixes.left())
        } else {
            name.to_string()
        };
    }
    for (i, &name) in right.iter().enumerate() {
        out_right[i] = if left.contains(&name) {
            apply_suffix(name, suffixes.right())
        } else {
            name.to_string()
        };
    }
    Ok((out_left, out_right))
}
