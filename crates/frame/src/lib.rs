//! Tabular data model for georelate.
//!
//! This crate provides [`Frame`], a small schema-less table: an ordered set
//! of equal-length named columns of scalar [`Value`]s plus an optional named
//! row identifier. Column access is by name with runtime existence checks;
//! there is no compile-time schema. CSV reading (with per-cell type
//! inference) and writing live here too, so the join engine itself never
//! touches a storage format.
//!
//! # Quick start
//!
//! ```
//! use georelate_frame::{Frame, Value};
//!
//! let mut stations = Frame::from_columns([
//!     ("local_id", vec![Value::Int(1), Value::Int(2)]),
//!     ("lat", vec![Value::Float(-6.69), Value::Float(-4.77)]),
//!     ("lon", vec![Value::Float(-39.77), Value::Float(-39.61)]),
//! ])?;
//!
//! assert_eq!(stations.n_rows(), 2);
//! stations.set_index_column("local_id")?;
//! assert_eq!(stations.index_name(), Some("local_id"));
//! # Ok::<(), georelate_frame::FrameError>(())
//! ```

pub mod csv_io;
pub mod error;
pub mod frame;
pub mod value;

pub use csv_io::{read_csv, read_csv_from, write_csv, write_csv_to};
pub use error::FrameError;
pub use frame::{DEFAULT_INDEX_NAME, Frame};
pub use value::Value;
