//! Design matrix assembly.

use std::collections::{HashMap, HashSet};

use georelate_frame::{Frame, Value};

use crate::config::RelateConfig;
use crate::error::{RelateError, Side};
use crate::keys::{KeySource, resolve_suffixed};
use crate::pairs::distance_table;
use crate::select::{k_nearest, rank_col};

/// Builds the design matrix: one output row per left record, carrying the
/// left record's attributes plus, for each rank 1..=k, the full attribute
/// set of its k-th nearest right record and the distance to it.
///
/// Steps: resolve both key columns and their suffixed variants, build the
/// cross-product distance table, select the k nearest right matches per left
/// key, verify the left-key sets match exactly, then join the ranked matches
/// back and attach each rank's right attributes (every right column renamed
/// with the `_{rank}_closest` suffix) through a key → record index built once
/// from the right collection.
///
/// Output cardinality is always `|left|`, for any k. With `k_closest = 0`
/// the left collection is returned with its row identifier materialized and
/// no distance work is done. When k exceeds `|right|` only the
/// `min(k, |right|)` populated rank groups appear.
///
/// Key values must be unique within each collection; this is checked up
/// front so a rank join can never silently drop a left record.
///
/// # Errors
///
/// Returns [`RelateError::MissingColumn`],
/// [`RelateError::AmbiguousKeyCollision`], [`RelateError::DuplicateKey`],
/// [`RelateError::CardinalityViolation`] (also raised when the right
/// collection is empty while `k_closest > 0`, since no left record can then
/// have a nearest match), or [`RelateError::InvalidRadius`].
pub fn design_matrix(
    left: &Frame,
    right: &Frame,
    config: &RelateConfig,
) -> Result<Frame, RelateError> {
    config.validate()?;

    let left_source = KeySource::from_explicit(config.left_key());
    let right_source = KeySource::from_explicit(config.right_key());
    let left_key = left_source.resolve(left, Side::Left)?;
    let right_key = right_source.resolve(right, Side::Right)?;
    let (left_key_sfx, right_key_sfx) =
        resolve_suffixed(&left_key, &right_key, config.suffixes())?;

    let left_reset = left.reset_index()?;
    if config.k_closest() == 0 {
        return Ok(left_reset);
    }

    let left_keys = left_source.values(left, Side::Left)?;
    let right_keys = right_source.values(right, Side::Right)?;
    check_unique(&left_keys, &left_key, Side::Left)?;
    check_unique(&right_keys, &right_key, Side::Right)?;

    let distances = distance_table(left, right, config)?;
    let ranked = k_nearest(&distances, &left_key_sfx, &right_key_sfx, config.k_closest())?;

    // Cardinality invariant: the selection must cover the left keys exactly.
    let ranked_keys = ranked.column(&left_key_sfx)?;
    let left_set: HashSet<&Value> = left_keys.iter().collect();
    let ranked_set: HashSet<&Value> = ranked_keys.iter().collect();
    let missing = left_set.difference(&ranked_set).count();
    let unexpected = ranked_set.difference(&left_set).count();
    if missing != 0 || unexpected != 0 {
        return Err(RelateError::CardinalityViolation {
            missing,
            unexpected,
        });
    }

    // Join left → ranked matches on the left key, preserving left row order.
    let mut ranked_row: HashMap<&Value, usize> = HashMap::new();
    for (i, key) in ranked_keys.iter().enumerate() {
        ranked_row.insert(key, i);
    }
    let mut order = Vec::with_capacity(left_keys.len());
    for key in &left_keys {
        match ranked_row.get(key) {
            Some(&i) => order.push(i),
            None => {
                return Err(RelateError::CardinalityViolation {
                    missing: 1,
                    unexpected: 0,
                });
            }
        }
    }

    let mut out = Frame::new();
    for name in left_reset.column_names() {
        out.push_column(name, left_reset.column(name)?.to_vec())?;
    }
    for name in ranked.column_names() {
        // The join columns merge into one when their names coincide.
        if name == left_key && left_key == left_key_sfx {
            continue;
        }
        let col = ranked.column(name)?;
        out.push_column(name, order.iter().map(|&i| col[i].clone()).collect())?;
    }

    // Per-rank attribute attachment via a key → record index built once.
    let right_reset = right.reset_index()?;
    let mut right_row: HashMap<&Value, usize> = HashMap::new();
    for (i, key) in right_keys.iter().enumerate() {
        right_row.insert(key, i);
    }

    for rank in 1..=config.k_closest() {
        let ranked_key_col = rank_col(&right_key_sfx, rank);
        if !out.has_column(&ranked_key_col) {
            break; // populated ranks exhausted (k exceeds |right|)
        }
        let match_keys = out.column(&ranked_key_col)?.to_vec();
        let mut rows = Vec::with_capacity(match_keys.len());
        for key in &match_keys {
            match right_row.get(key) {
                Some(&i) => rows.push(i),
                None => {
                    return Err(RelateError::MissingRankMatch {
                        rank,
                        key: key.to_string(),
                    });
                }
            }
        }
        for name in right_reset.column_names() {
            let renamed = rank_col(name, rank);
            if renamed == ranked_key_col {
                continue; // already present from the selection step
            }
            let col = right_reset.column(name)?;
            out.push_column(renamed, rows.iter().map(|&i| col[i].clone()).collect())?;
        }
    }

    Ok(out)
}

fn check_unique(keys: &[Value], column: &str, side: Side) -> Result<(), RelateError> {
    let mut seen: HashSet<&Value> = HashSet::with_capacity(keys.len());
    for key in keys {
        if !seen.insert(key) {
            return Err(RelateError::DuplicateKey {
                side,
                column: column.to_string(),
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left_frame() -> Frame {
        Frame::from_columns([
            ("local_id", vec![Value::Int(2), Value::Int(5)]),
            ("lat", vec![Value::Float(0.0), Value::Float(10.0)]),
            ("lon", vec![Value::Float(0.0), Value::Float(10.0)]),
        ])
        .unwrap()
    }

    fn right_frame() -> Frame {
        Frame::from_columns([
            (
                "project_id",
                vec![Value::Int(3), Value::Int(6), Value::Int(7)],
            ),
            (
                "lat",
                vec![Value::Float(0.0), Value::Float(5.0), Value::Float(20.0)],
            ),
            (
                "lon",
                vec![Value::Float(1.0), Value::Float(5.0), Value::Float(20.0)],
            ),
        ])
        .unwrap()
    }

    fn config() -> RelateConfig {
        RelateConfig::new()
            .with_left_key("local_id")
            .with_right_key("project_id")
    }

    #[test]
    fn k_zero_returns_left_with_identifier() {
        let out = design_matrix(&left_frame(), &right_frame(), &config()).unwrap();
        assert_eq!(out.n_rows(), 2);
        assert_eq!(out.column_names(), vec!["index", "local_id", "lat", "lon"]);
    }

    #[test]
    fn two_by_three_scenario() {
        let out =
            design_matrix(&left_frame(), &right_frame(), &config().with_k_closest(2)).unwrap();
        assert_eq!(out.n_rows(), 2);

        // Left record 2 at (0,0): nearest is 3 at (0,1), then 6 at (5,5).
        assert_eq!(out.column("project_id_1_closest").unwrap()[0], Value::Int(3));
        assert_eq!(out.column("project_id_2_closest").unwrap()[0], Value::Int(6));
        // Left record 5 at (10,10): nearest is 6 at (5,5), then 3 at (0,1)
        // (1492 km, just under the 1544 km to 7 at (20,20)).
        assert_eq!(out.column("project_id_1_closest").unwrap()[1], Value::Int(6));
        assert_eq!(out.column("project_id_2_closest").unwrap()[1], Value::Int(3));

        // Each rank carries the right side's full attribute set.
        assert_eq!(out.column("lat_1_closest").unwrap()[0], Value::Float(0.0));
        assert_eq!(out.column("lon_1_closest").unwrap()[0], Value::Float(1.0));
        assert_eq!(out.column("lat_2_closest").unwrap()[0], Value::Float(5.0));

        // Ascending distances within each record.
        let d1 = out.numeric_column("distance_1_closest").unwrap();
        let d2 = out.numeric_column("distance_2_closest").unwrap();
        for (a, b) in d1.iter().zip(&d2) {
            assert!(a <= b);
        }
    }

    #[test]
    fn duplicate_left_key_rejected() {
        let left = Frame::from_columns([
            ("local_id", vec![Value::Int(2), Value::Int(2)]),
            ("lat", vec![Value::Float(0.0), Value::Float(1.0)]),
            ("lon", vec![Value::Float(0.0), Value::Float(1.0)]),
        ])
        .unwrap();
        let err =
            design_matrix(&left, &right_frame(), &config().with_k_closest(1)).unwrap_err();
        assert!(matches!(
            err,
            RelateError::DuplicateKey { side: Side::Left, .. }
        ));
    }

    #[test]
    fn empty_right_with_k_violates_cardinality() {
        let right = Frame::from_columns([
            ("project_id", vec![]),
            ("lat", vec![]),
            ("lon", vec![]),
        ])
        .unwrap();
        let err = design_matrix(&left_frame(), &right, &config().with_k_closest(1)).unwrap_err();
        assert!(matches!(
            err,
            RelateError::CardinalityViolation {
                missing: 2,
                unexpected: 0,
            }
        ));
    }
}
