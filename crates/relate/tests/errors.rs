//! Error-path integration tests.

use georelate_frame::{Frame, Value};
use georelate_relate::{
    RelateConfig, RelateError, Side, Suffixes, design_matrix, distance_table,
};

fn left() -> Frame {
    Frame::from_columns([
        ("id", vec![Value::Int(1), Value::Int(2)]),
        ("lat", vec![Value::Float(0.0), Value::Float(1.0)]),
        ("lon", vec![Value::Float(0.0), Value::Float(1.0)]),
    ])
    .unwrap()
}

fn right() -> Frame {
    Frame::from_columns([
        ("site", vec![Value::Int(7), Value::Int(8)]),
        ("lat", vec![Value::Float(2.0), Value::Float(3.0)]),
        ("lon", vec![Value::Float(2.0), Value::Float(3.0)]),
    ])
    .unwrap()
}

#[test]
fn missing_explicit_key_column() {
    let config = RelateConfig::new().with_left_key("station").with_k_closest(1);
    let err = design_matrix(&left(), &right(), &config).unwrap_err();
    assert!(matches!(
        err,
        RelateError::MissingColumn { side: Side::Left, name } if name == "station"
    ));
}

#[test]
fn missing_coordinate_column() {
    let config = RelateConfig::new()
        .with_left_key("id")
        .with_right_key("site")
        .with_left_coords("latitude", "longitude")
        .with_k_closest(1);
    let err = design_matrix(&left(), &right(), &config).unwrap_err();
    assert!(matches!(
        err,
        RelateError::MissingColumn { side: Side::Left, name } if name == "latitude"
    ));
}

#[test]
fn shared_key_without_suffixes_is_ambiguous() {
    let right = Frame::from_columns([
        ("id", vec![Value::Int(7)]),
        ("lat_b", vec![Value::Float(2.0)]),
        ("lon_b", vec![Value::Float(2.0)]),
    ])
    .unwrap();
    let config = RelateConfig::new()
        .with_left_key("id")
        .with_right_key("id")
        .with_right_coords("lat_b", "lon_b")
        .with_suffixes(Suffixes::new(None, None))
        .with_k_closest(1);
    let err = design_matrix(&left(), &right, &config).unwrap_err();
    assert!(matches!(
        err,
        RelateError::AmbiguousKeyCollision { name } if name == "id"
    ));

    // One non-empty suffix resolves the collision.
    let config = RelateConfig::new()
        .with_left_key("id")
        .with_right_key("id")
        .with_right_coords("lat_b", "lon_b")
        .with_suffixes(Suffixes::new(None, Some("_right")))
        .with_k_closest(1);
    assert!(design_matrix(&left(), &right, &config).is_ok());
}

#[test]
fn duplicate_right_key_rejected() {
    let right = Frame::from_columns([
        ("site", vec![Value::Int(7), Value::Int(7)]),
        ("lat", vec![Value::Float(2.0), Value::Float(3.0)]),
        ("lon", vec![Value::Float(2.0), Value::Float(3.0)]),
    ])
    .unwrap();
    let config = RelateConfig::new()
        .with_left_key("id")
        .with_right_key("site")
        .with_k_closest(1);
    let err = design_matrix(&left(), &right, &config).unwrap_err();
    assert!(matches!(
        err,
        RelateError::DuplicateKey { side: Side::Right, key, .. } if key == "7"
    ));
}

#[test]
fn duplicate_keys_permitted_in_distance_table() {
    // The builder itself does not police uniqueness.
    let right = Frame::from_columns([
        ("site", vec![Value::Int(7), Value::Int(7)]),
        ("lat", vec![Value::Float(2.0), Value::Float(3.0)]),
        ("lon", vec![Value::Float(2.0), Value::Float(3.0)]),
    ])
    .unwrap();
    let config = RelateConfig::new().with_left_key("id").with_right_key("site");
    let table = distance_table(&left(), &right, &config).unwrap();
    assert_eq!(table.n_rows(), 4);
}

#[test]
fn invalid_radius_rejected() {
    let config = RelateConfig::new()
        .with_left_key("id")
        .with_right_key("site")
        .with_radius(f64::NAN)
        .with_k_closest(1);
    let err = design_matrix(&left(), &right(), &config).unwrap_err();
    assert!(matches!(err, RelateError::InvalidRadius { .. }));
}

#[test]
fn empty_right_with_k_is_a_cardinality_violation() {
    let right = Frame::from_columns([
        ("site", vec![]),
        ("lat", vec![]),
        ("lon", vec![]),
    ])
    .unwrap();
    let config = RelateConfig::new()
        .with_left_key("id")
        .with_right_key("site")
        .with_k_closest(2);
    let err = design_matrix(&left(), &right, &config).unwrap_err();
    assert!(matches!(
        err,
        RelateError::CardinalityViolation { missing: 2, unexpected: 0 }
    ));
}
