//! Schema-less column table with an optional named row identifier.

use crate::error::FrameError;
use crate::value::Value;

/// Name used for the row identifier when it has none of its own.
pub const DEFAULT_INDEX_NAME: &str = "index";

#[derive(Debug, Clone)]
struct Column {
    name: String,
    values: Vec<Value>,
}

#[derive(Debug, Clone)]
struct RowId {
    name: String,
    values: Vec<Value>,
}

/// An ordered collection of equal-length named columns.
///
/// Each frame carries a row identifier: by default the positional index
/// (`0..n_rows` as `Int` values, unnamed), or an explicit named sequence set
/// via [`set_index`](Frame::set_index). The identifier is not a column; it is
/// materialized into one by [`reset_index`](Frame::reset_index).
///
/// # Example
///
/// ```
/// use georelate_frame::{Frame, Value};
///
/// let frame = Frame::from_columns([
///     ("site", vec![Value::from("a"), Value::from("b")]),
///     ("lat", vec![Value::from(-6.7), Value::from(-4.8)]),
/// ])
/// .unwrap();
///
/// assert_eq!(frame.n_rows(), 2);
/// assert_eq!(frame.column("site").unwrap()[0], Value::from("a"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Frame {
    columns: Vec<Column>,
    index: Option<RowId>,
    n_rows: usize,
}

impl Frame {
    /// Creates an empty frame with zero rows and columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a frame from `(name, values)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::DuplicateColumn`] on a repeated name and
    /// [`FrameError::LengthMismatch`] if the columns disagree in length.
    pub fn from_columns<I, S>(columns: I) -> Result<Self, FrameError>
    where
        I: IntoIterator<Item = (S, Vec<Value>)>,
        S: Into<String>,
    {
        let mut frame = Self::new();
        for (name, values) in columns {
            frame.push_column(name, values)?;
        }
        Ok(frame)
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns (the row identifier does not count).
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Returns `true` if a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Column names in frame order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Looks up a column's values by name.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::MissingColumn`] if no such column exists.
    pub fn column(&self, name: &str) -> Result<&[Value], FrameError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| FrameError::MissingColumn {
                name: name.to_string(),
            })
    }

    /// Looks up a column and coerces every value to `f64`.
    ///
    /// `Str` and `Null` cells coerce to NaN; numeric pass-through otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::MissingColumn`] if no such column exists.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, FrameError> {
        Ok(self
            .column(name)?
            .iter()
            .map(|v| v.as_f64().unwrap_or(f64::NAN))
            .collect())
    }

    /// Appends a column.
    ///
    /// The first column (or index) added to an empty frame fixes the row
    /// count; later additions must match it.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::DuplicateColumn`] or
    /// [`FrameError::LengthMismatch`].
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<Value>,
    ) -> Result<(), FrameError> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(FrameError::DuplicateColumn { name });
        }
        self.check_or_fix_rows(&name, values.len())?;
        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Replaces the row identifier with a named sequence.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::LengthMismatch`] if `values` disagrees with the
    /// frame's row count.
    pub fn set_index(
        &mut self,
        name: impl Into<String>,
        values: Vec<Value>,
    ) -> Result<(), FrameError> {
        let name = name.into();
        self.check_or_fix_rows(&name, values.len())?;
        self.index = Some(RowId { name, values });
        Ok(())
    }

    /// Lifts an existing column out of the frame to serve as its row
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::MissingColumn`] if no such column exists.
    pub fn set_index_column(&mut self, name: &str) -> Result<(), FrameError> {
        let pos = self
            .columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| FrameError::MissingColumn {
                name: name.to_string(),
            })?;
        let column = self.columns.remove(pos);
        self.index = Some(RowId {
            name: column.name,
            values: column.values,
        });
        Ok(())
    }

    /// Name of the row identifier, if it has one.
    pub fn index_name(&self) -> Option<&str> {
        self.index.as_ref().map(|i| i.name.as_str())
    }

    /// Row identifier values: the named sequence if set, else positional
    /// `Int(0)..Int(n_rows)`.
    pub fn index_values(&self) -> Vec<Value> {
        match &self.index {
            Some(id) => id.values.clone(),
            None => (0..self.n_rows as i64).map(Value::Int).collect(),
        }
    }

    /// Returns a new frame with the row identifier materialized as the first
    /// column, named after the identifier or
    /// [`DEFAULT_INDEX_NAME`] when unnamed. The new frame reverts to the
    /// positional identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::DuplicateColumn`] if a column with the
    /// identifier's name already exists.
    pub fn reset_index(&self) -> Result<Frame, FrameError> {
        let name = self.index_name().unwrap_or(DEFAULT_INDEX_NAME).to_string();
        let mut out = Frame::new();
        out.push_column(name, self.index_values())?;
        for c in &self.columns {
            out.push_column(c.name.clone(), c.values.clone())?;
        }
        Ok(out)
    }

    fn check_or_fix_rows(&mut self, name: &str, len: usize) -> Result<(), FrameError> {
        if self.columns.is_empty() && self.index.is_none() {
            self.n_rows = len;
            return Ok(());
        }
        if len != self.n_rows {
            return Err(FrameError::LengthMismatch {
                column: name.to_string(),
                expected: self.n_rows,
                got: len,
            });
        }
        Ok(())
    }
}
