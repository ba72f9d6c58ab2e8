//! CSV reading and writing for frames.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::FrameError;
use crate::frame::Frame;
use crate::value::Value;

/// Reads a CSV file into a frame.
///
/// The header row supplies column names; each cell is type-inferred via
/// [`Value::infer`] (empty ⇒ `Null`, then `i64`, then `f64`, else string).
/// The frame gets the default positional row identifier.
///
/// # Errors
///
/// Returns [`FrameError::Io`] if the file cannot be opened,
/// [`FrameError::Csv`] on malformed CSV, and
/// [`FrameError::DuplicateColumn`] on repeated header names.
pub fn read_csv(path: &Path) -> Result<Frame, FrameError> {
    let file = File::open(path)?;
    read_csv_from(file)
}

/// Reads CSV from any reader into a frame. See [`read_csv`].
pub fn read_csv_from<R: io::Read>(reader: R) -> Result<Frame, FrameError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let mut columns: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];

    for record in rdr.records() {
        let record = record?;
        for (col, cell) in columns.iter_mut().zip(record.iter()) {
            col.push(Value::infer(cell));
        }
    }

    Frame::from_columns(headers.into_iter().zip(columns))
}

/// Writes a frame to a CSV file.
///
/// Only columns are written; the row identifier is not. Callers wanting it in
/// the output should materialize it first via
/// [`Frame::reset_index`].
///
/// # Errors
///
/// Returns [`FrameError::Io`] or [`FrameError::Csv`] on write failure.
pub fn write_csv(frame: &Frame, path: &Path) -> Result<(), FrameError> {
    let file = File::create(path)?;
    write_csv_to(frame, file)
}

/// Writes a frame as CSV to any writer. See [`write_csv`].
pub fn write_csv_to<W: io::Write>(frame: &Frame, writer: W) -> Result<(), FrameError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let names = frame.column_names();
    wtr.write_record(&names)?;

    let columns: Vec<&[Value]> = names
        .iter()
        .map(|n| frame.column(n))
        .collect::<Result<_, _>>()?;

    for row in 0..frame.n_rows() {
        wtr.write_record(columns.iter().map(|c| c[row].to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
