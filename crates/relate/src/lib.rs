//! Geospatial k-nearest design-matrix construction.
//!
//! This crate relates two collections of geographically located records: for
//! each record in a *left* collection it finds the k nearest records in a
//! *right* collection by great-circle distance and assembles one wide output
//! row per left record — the left attributes plus, for each rank 1..=k, the
//! matched right record's attributes and the distance to it.
//!
//! # Quick start
//!
//! ```
//! use georelate_frame::{Frame, Value};
//! use georelate_relate::{RelateConfig, design_matrix};
//!
//! let stations = Frame::from_columns([
//!     ("local_id", vec![Value::Int(1), Value::Int(2)]),
//!     ("lat", vec![Value::Float(-6.69), Value::Float(-4.77)]),
//!     ("lon", vec![Value::Float(-39.77), Value::Float(-39.61)]),
//! ])?;
//! let projects = Frame::from_columns([
//!     ("project_id", vec![Value::from("p1"), Value::from("p2")]),
//!     ("lat_aid", vec![Value::Float(-6.62), Value::Float(-4.77)]),
//!     ("lon_aid", vec![Value::Float(-39.98), Value::Float(-39.77)]),
//! ])?;
//!
//! let config = RelateConfig::new()
//!     .with_left_key("local_id")
//!     .with_right_key("project_id")
//!     .with_right_coords("lat_aid", "lon_aid")
//!     .with_k_closest(1);
//!
//! let matrix = design_matrix(&stations, &projects, &config)?;
//! assert_eq!(matrix.n_rows(), 2);
//! assert!(matrix.has_column("project_id_1_closest"));
//! assert!(matrix.has_column("distance_1_closest"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! design_matrix()
//!   ├─ KeySource::resolve / resolve_suffixed   (keys.rs)
//!   ├─ distance_table()                        (pairs.rs)
//!   │    └─ haversine()                        (distance.rs)
//!   ├─ k_nearest()                             (select.rs)
//!   └─ invariant check + rank joins            (design.rs)
//! ```
//!
//! The whole pipeline is pure and synchronous: inputs are never mutated,
//! derived tables are computed fresh per call, and time and space are bounded
//! by the `|left| × |right|` cross product. Callers wanting less memory
//! pre-filter candidates; callers wanting parallelism run invocations side by
//! side.

pub mod config;
pub mod design;
pub mod distance;
pub mod error;
pub mod keys;
pub mod pairs;
pub mod select;

pub use config::{RelateConfig, Suffixes};
pub use design::design_matrix;
pub use distance::{DEFAULT_RADIUS_KM, haversine};
pub use error::{RelateError, Side};
pub use keys::KeySource;
pub use pairs::{DISTANCE_COL, distance_table};
pub use select::k_nearest;
