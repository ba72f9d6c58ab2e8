//! Per-left-record k-nearest selection and ranked reshaping.

use std::cmp::Ordering;
use std::collections::HashMap;

use georelate_frame::{Frame, Value};

use crate::error::RelateError;
use crate::pairs::DISTANCE_COL;

/// Ranked column name: `{base}_{rank}_closest`.
pub(crate) fn rank_col(base: &str, rank: usize) -> String {
    format!("{base}_{rank}_closest")
}

/// Reduces a distance table to the k nearest right matches per left key.
///
/// Two phases: group rows by left key into an insertion-ordered multimap of
/// `(right key, distance)` lists, then stable-sort each list by ascending
/// distance — ties keep their pre-existing row order, NaN compares as equal —
/// and keep the first k. The result has one row per distinct left key (in
/// first-seen order) and, for each populated rank r, the columns
/// `{right_key_col}_{r}_closest` and `distance_{r}_closest`.
///
/// Groups smaller than k leave their trailing rank slots `Null`; no rank
/// columns beyond the largest group (capped at k) are produced. With `k = 0`
/// only the left key column is emitted.
///
/// # Errors
///
/// Returns [`RelateError::Frame`] if `distances` lacks the named key columns
/// or the [`DISTANCE_COL`] column.
pub fn k_nearest(
    distances: &Frame,
    left_key_col: &str,
    right_key_col: &str,
    k: usize,
) -> Result<Frame, RelateError> {
    let left_keys = distances.column(left_key_col)?;
    let right_keys = distances.column(right_key_col)?;
    let dists = distances.numeric_column(DISTANCE_COL)?;

    // Phase 1: insertion-ordered grouping by left key.
    let mut group_of: HashMap<Value, usize> = HashMap::new();
    let mut groups: Vec<(Value, Vec<(Value, f64)>)> = Vec::new();
    for ((lk, rk), &d) in left_keys.iter().zip(right_keys).zip(&dists) {
        let gi = *group_of.entry(lk.clone()).or_insert_with(|| {
            groups.push((lk.clone(), Vec::new()));
            groups.len() - 1
        });
        groups[gi].1.push((rk.clone(), d));
    }

    // Phase 2: rank by ascending distance, keep k.
    for (_, matches) in &mut groups {
        matches.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        matches.truncate(k);
    }

    let n_ranks = groups.iter().map(|(_, m)| m.len()).max().unwrap_or(0);

    let mut out = Frame::new();
    out.push_column(
        left_key_col,
        groups.iter().map(|(key, _)| key.clone()).collect(),
    )?;
    for rank in 1..=n_ranks {
        let mut keys = Vec::with_capacity(groups.len());
        let mut rank_dists = Vec::with_capacity(groups.len());
        for (_, matches) in &groups {
            match matches.get(rank - 1) {
                Some((rk, d)) => {
                    keys.push(rk.clone());
                    rank_dists.push(Value::Float(*d));
                }
                None => {
                    keys.push(Value::Null);
                    rank_dists.push(Value::Null);
                }
            }
        }
        out.push_column(rank_col(right_key_col, rank), keys)?;
        out.push_column(rank_col(DISTANCE_COL, rank), rank_dists)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Distance table shaped like the cross-product output: two left keys,
    /// three candidates each.
    fn table() -> Frame {
        Frame::from_columns([
            (
                "local_id",
                vec![
                    Value::Int(2),
                    Value::Int(2),
                    Value::Int(2),
                    Value::Int(5),
                    Value::Int(5),
                    Value::Int(5),
                ],
            ),
            (
                "project_id",
                vec![
                    Value::from("p1"),
                    Value::from("p2"),
                    Value::from("p3"),
                    Value::from("p1"),
                    Value::from("p2"),
                    Value::from("p3"),
                ],
            ),
            (
                "distance",
                vec![
                    Value::Float(30.0),
                    Value::Float(10.0),
                    Value::Float(20.0),
                    Value::Float(5.0),
                    Value::Float(50.0),
                    Value::Float(40.0),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn ranks_ascend_per_group() {
        let out = k_nearest(&table(), "local_id", "project_id", 2).unwrap();
        assert_eq!(out.n_rows(), 2);
        assert_eq!(
            out.column_names(),
            vec![
                "local_id",
                "project_id_1_closest",
                "distance_1_closest",
                "project_id_2_closest",
                "distance_2_closest",
            ]
        );
        // Group 2: p2 (10) then p3 (20).
        assert_eq!(out.column("project_id_1_closest").unwrap()[0], Value::from("p2"));
        assert_eq!(out.column("distance_1_closest").unwrap()[0], Value::Float(10.0));
        assert_eq!(out.column("project_id_2_closest").unwrap()[0], Value::from("p3"));
        // Group 5: p1 (5) then p3 (40).
        assert_eq!(out.column("project_id_1_closest").unwrap()[1], Value::from("p1"));
        assert_eq!(out.column("project_id_2_closest").unwrap()[1], Value::from("p3"));
    }

    #[test]
    fn group_order_is_first_seen() {
        let out = k_nearest(&table(), "local_id", "project_id", 1).unwrap();
        assert_eq!(
            out.column("local_id").unwrap(),
            &[Value::Int(2), Value::Int(5)]
        );
    }

    #[test]
    fn k_larger_than_group_caps_ranks() {
        let out = k_nearest(&table(), "local_id", "project_id", 10).unwrap();
        // Three candidates per group: ranks 1..=3, nothing fabricated.
        assert!(out.has_column("distance_3_closest"));
        assert!(!out.has_column("distance_4_closest"));
    }

    #[test]
    fn ties_keep_row_order() {
        let t = Frame::from_columns([
            ("l", vec![Value::Int(1), Value::Int(1), Value::Int(1)]),
            (
                "r",
                vec![Value::from("a"), Value::from("b"), Value::from("c")],
            ),
            (
                "distance",
                vec![Value::Float(7.0), Value::Float(7.0), Value::Float(1.0)],
            ),
        ])
        .unwrap();
        let out = k_nearest(&t, "l", "r", 3).unwrap();
        assert_eq!(out.column("r_1_closest").unwrap()[0], Value::from("c"));
        // The tied pair stays in pre-existing order: a before b.
        assert_eq!(out.column("r_2_closest").unwrap()[0], Value::from("a"));
        assert_eq!(out.column("r_3_closest").unwrap()[0], Value::from("b"));
    }

    #[test]
    fn k_zero_emits_only_keys() {
        let out = k_nearest(&table(), "local_id", "project_id", 0).unwrap();
        assert_eq!(out.column_names(), vec!["local_id"]);
        assert_eq!(out.n_rows(), 2);
    }

    #[test]
    fn empty_table_yields_no_groups() {
        let t = Frame::from_columns([
            ("l", vec![]),
            ("r", vec![]),
            ("distance", vec![]),
        ])
        .unwrap();
        let out = k_nearest(&t, "l", "r", 2).unwrap();
        assert_eq!(out.n_rows(), 0);
        assert_eq!(out.column_names(), vec!["l"]);
    }

    #[test]
    fn uneven_groups_pad_with_null() {
        let t = Frame::from_columns([
            ("l", vec![Value::Int(1), Value::Int(1), Value::Int(2)]),
            (
                "r",
                vec![Value::from("a"), Value::from("b"), Value::from("a")],
            ),
            (
                "distance",
                vec![Value::Float(1.0), Value::Float(2.0), Value::Float(3.0)],
            ),
        ])
        .unwrap();
        let out = k_nearest(&t, "l", "r", 2).unwrap();
        assert_eq!(out.column("r_2_closest").unwrap()[0], Value::from("b"));
        assert_eq!(out.column("r_2_closest").unwrap()[1], Value::Null);
        assert_eq!(out.column("distance_2_closest").unwrap()[1], Value::Null);
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = k_nearest(&table(), "station", "project_id", 1).unwrap_err();
        assert!(matches!(err, RelateError::Frame { .. }));
    }
}
