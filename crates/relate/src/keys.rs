//! Join-key resolution.

use georelate_frame::{DEFAULT_INDEX_NAME, Frame, Value};

use crate::config::Suffixes;
use crate::error::{RelateError, Side};

/// Where a collection's join key comes from.
///
/// Resolved once per collection at the start of each operation, never
/// inferred mid-algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// An explicitly named column.
    Column(String),
    /// The collection's row identifier.
    RowIndex,
}

impl KeySource {
    /// Builds a key source from an optional explicit column name.
    pub fn from_explicit(explicit: Option<&str>) -> Self {
        match explicit {
            Some(name) => KeySource::Column(name.to_string()),
            None => KeySource::RowIndex,
        }
    }

    /// Resolves the effective key-column name for `frame`.
    ///
    /// An explicit column must exist; the row identifier falls back to its
    /// own name, or to [`DEFAULT_INDEX_NAME`] when unnamed.
    ///
    /// # Errors
    ///
    /// Returns [`RelateError::MissingColumn`] for an explicit column absent
    /// from the frame — no silent fallback.
    pub fn resolve(&self, frame: &Frame, side: Side) -> Result<String, RelateError> {
        match self {
            KeySource::Column(name) => {
                if frame.has_column(name) {
                    Ok(name.clone())
                } else {
                    Err(RelateError::MissingColumn {
                        side,
                        name: name.clone(),
                    })
                }
            }
            KeySource::RowIndex => Ok(frame
                .index_name()
                .unwrap_or(DEFAULT_INDEX_NAME)
                .to_string()),
        }
    }

    /// The key value of every record, in row order.
    ///
    /// # Errors
    ///
    /// Returns [`RelateError::MissingColumn`] for an absent explicit column.
    pub(crate) fn values(&self, frame: &Frame, side: Side) -> Result<Vec<Value>, RelateError> {
        match self {
            KeySource::Column(name) => {
                frame
                    .column(name)
                    .map(<[Value]>::to_vec)
                    .map_err(|_| RelateError::MissingColumn {
                        side,
                        name: name.clone(),
                    })
            }
            KeySource::RowIndex => Ok(frame.index_values()),
        }
    }
}

/// Appends a side's suffix to a name, or leaves it unsuffixed when absent.
pub(crate) fn apply_suffix(name: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(s) => format!("{name}{s}"),
        None => name.to_string(),
    }
}

/// Resolves the key-column pair used after the pairing step: identical names
/// get their configured suffixes, distinct names pass through unchanged.
///
/// # Errors
///
/// Returns [`RelateError::AmbiguousKeyCollision`] if the names coincide while
/// both suffix elements are empty.
pub(crate) fn resolve_suffixed(
    left_key: &str,
    right_key: &str,
    suffixes: &Suffixes,
) -> Result<(String, String), RelateError> {
    if left_key != right_key {
        return Ok((left_key.to_string(), right_key.to_string()));
    }
    if suffixes.left().is_none() && suffixes.right().is_none() {
        return Err(RelateError::AmbiguousKeyCollision {
            name: left_key.to_string(),
        });
    }
    Ok((
        apply_suffix(left_key, suffixes.left()),
        apply_suffix(right_key, suffixes.right()),
    ))
}
