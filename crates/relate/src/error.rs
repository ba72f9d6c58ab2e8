//! Error types for the georelate-relate crate.

use std::fmt;

use georelate_frame::FrameError;

/// Which input collection an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The left collection (drives output cardinality).
    Left,
    /// The right collection (supplies nearest-match attributes).
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Error type for all fallible operations in the georelate-relate crate.
#[derive(Debug, thiserror::Error)]
pub enum RelateError {
    /// Returned when an explicitly named key or coordinate column is absent
    /// from its collection.
    #[error("{side} collection: column '{name}' not found")]
    MissingColumn {
        /// Collection the lookup ran against.
        side: Side,
        /// The missing column name.
        name: String,
    },

    /// Returned when a column name appears on both sides of the pairing but
    /// both suffix elements are empty, so the two cannot be told apart.
    #[error("column '{name}' appears on both sides but both suffixes are empty")]
    AmbiguousKeyCollision {
        /// The colliding column name.
        name: String,
    },

    /// Returned when a collection's resolved key column repeats a value.
    #[error("{side} collection: duplicate key '{key}' in column '{column}'")]
    DuplicateKey {
        /// Collection containing the duplicate.
        side: Side,
        /// Resolved key column name.
        column: String,
        /// The repeated key, rendered for display.
        key: String,
    },

    /// Returned when the k-nearest table's left-key set diverges from the
    /// left collection's key set. Signals a key-resolution bug, not a data
    /// condition; the assembler never silently drops or duplicates rows.
    #[error(
        "k-nearest keys diverge from left collection: {missing} missing, {unexpected} unexpected"
    )]
    CardinalityViolation {
        /// Left keys absent from the k-nearest table.
        missing: usize,
        /// K-nearest keys absent from the left collection.
        unexpected: usize,
    },

    /// Returned when a rank's recorded right key resolves to no right record.
    /// Cannot occur after the duplicate-key and cardinality checks pass;
    /// guards the assembly against silent row loss.
    #[error("no right record for key '{key}' at rank {rank}")]
    MissingRankMatch {
        /// Rank whose attribute attachment failed.
        rank: usize,
        /// The unresolved right key, rendered for display.
        key: String,
    },

    /// Returned when the configured Earth radius is non-finite or
    /// non-positive.
    #[error("radius must be finite and positive, got {radius}")]
    InvalidRadius {
        /// The invalid radius value.
        radius: f64,
    },

    /// Wraps an error originating from the frame layer.
    #[error("frame error: {reason}")]
    Frame {
        /// Description of the underlying frame failure.
        reason: String,
    },
}

impl From<FrameError> for RelateError {
    fn from(e: FrameError) -> Self {
        RelateError::Frame {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_side() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.to_string(), "right");
    }

    #[test]
    fn display_missing_column() {
        let e = RelateError::MissingColumn {
            side: Side::Right,
            name: "lat_aid".into(),
        };
        assert_eq!(e.to_string(), "right collection: column 'lat_aid' not found");
    }

    #[test]
    fn display_ambiguous_key_collision() {
        let e = RelateError::AmbiguousKeyCollision { name: "id".into() };
        assert_eq!(
            e.to_string(),
            "column 'id' appears on both sides but both suffixes are empty"
        );
    }

    #[test]
    fn display_duplicate_key() {
        let e = RelateError::DuplicateKey {
            side: Side::Left,
            column: "local_id".into(),
            key: "2".into(),
        };
        assert_eq!(
            e.to_string(),
            "left collection: duplicate key '2' in column 'local_id'"
        );
    }

    #[test]
    fn display_cardinality_violation() {
        let e = RelateError::CardinalityViolation {
            missing: 2,
            unexpected: 0,
        };
        assert_eq!(
            e.to_string(),
            "k-nearest keys diverge from left collection: 2 missing, 0 unexpected"
        );
    }

    #[test]
    fn display_missing_rank_match() {
        let e = RelateError::MissingRankMatch {
            rank: 3,
            key: "p7".into(),
        };
        assert_eq!(e.to_string(), "no right record for key 'p7' at rank 3");
    }

    #[test]
    fn display_invalid_radius() {
        let e = RelateError::InvalidRadius { radius: -1.0 };
        assert_eq!(e.to_string(), "radius must be finite and positive, got -1");
    }

    #[test]
    fn from_frame_error() {
        let fe = FrameError::MissingColumn { name: "lon".into() };
        let e: RelateError = fe.into();
        assert!(matches!(e, RelateError::Frame { .. }));
        assert!(e.to_string().contains("'lon' not found"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<RelateError>();
    }
}
