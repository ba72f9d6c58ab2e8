//! Error types for the georelate-frame crate.

/// Error type for all fallible operations in the georelate-frame crate.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// Returned when a column name is not present in the frame.
    #[error("column '{name}' not found")]
    MissingColumn {
        /// The missing column name.
        name: String,
    },

    /// Returned when adding a column whose name already exists.
    #[error("column '{name}' already exists")]
    DuplicateColumn {
        /// The conflicting column name.
        name: String,
    },

    /// Returned when a column's length disagrees with the frame's row count.
    #[error("column '{column}' has {got} values, expected {expected}")]
    LengthMismatch {
        /// Name of the offending column.
        column: String,
        /// Row count the frame expects.
        expected: usize,
        /// Row count the column actually has.
        got: usize,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps a filesystem error.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying I/O failure.
        reason: String,
    },
}

impl From<csv::Error> for FrameError {
    fn from(e: csv::Error) -> Self {
        FrameError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for FrameError {
    fn from(e: std::io::Error) -> Self {
        FrameError::Io {
            reason: e.to_string(),
        }
    }
}
