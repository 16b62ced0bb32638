//! Two-column numeric tables.
//!
//! A table has one `time, value` row per sample, comma-space delimited, with
//! no header. Values are written with Rust's shortest round-trip float
//! formatting, so reading a table back yields the exact recorded numbers.

use std::{
    io::{self, BufRead, Write},
    num::ParseFloatError,
};

use thiserror::Error;

use crate::simulate::Sample;

const DELIMITER: &str = ", ";

/// The sampled quantity written in a table's second column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Column {
    /// Position in meters.
    #[default]
    Position,
    /// Velocity in meters per second.
    Velocity,
    /// Engine speed in radians per second.
    EngineSpeed,
    /// Commanded throttle fraction.
    Throttle,
    /// Road grade angle in radians.
    Grade,
}

impl Column {
    /// Extracts this column's value from a sample.
    #[must_use]
    pub fn value(self, sample: &Sample) -> f64 {
        match self {
            Self::Position => sample.state.position,
            Self::Velocity => sample.state.velocity,
            Self::EngineSpeed => sample.state.engine_speed,
            Self::Throttle => sample.controls.throttle,
            Self::Grade => sample.controls.grade,
        }
    }
}

/// Errors that can occur while reading or writing a table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("line {line}: expected 2 columns, found {found}")]
    Columns { line: usize, found: usize },

    #[error("line {line}: invalid number")]
    Number {
        line: usize,
        #[source]
        source: ParseFloatError,
    },
}

/// Pairs each sample's time with the selected column.
pub fn rows(history: &[Sample], column: Column) -> impl Iterator<Item = (f64, f64)> + '_ {
    history
        .iter()
        .map(move |sample| (sample.time, column.value(sample)))
}

/// Writes `(time, value)` rows to `writer`.
///
/// # Errors
///
/// Returns [`TableError::Io`] if writing fails.
pub fn write_table<W, I>(mut writer: W, rows: I) -> Result<(), TableError>
where
    W: Write,
    I: IntoIterator<Item = (f64, f64)>,
{
    for (time, value) in rows {
        writeln!(writer, "{time}{DELIMITER}{value}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads `(time, value)` rows from `reader`, skipping blank lines.
///
/// Line numbers in errors are one-based.
///
/// # Errors
///
/// - [`TableError::Io`] if reading fails.
/// - [`TableError::Columns`] if a line does not have exactly two fields.
/// - [`TableError::Number`] if a field is not a number.
pub fn read_table<R: BufRead>(reader: R) -> Result<Vec<(f64, f64)>, TableError> {
    let mut rows = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<_> = line.split(',').map(str::trim).collect();
        let &[time, value] = fields.as_slice() else {
            return Err(TableError::Columns {
                line: number,
                found: fields.len(),
            });
        };

        let parse = |field: &str| {
            field.parse::<f64>().map_err(|source| TableError::Number {
                line: number,
                source,
            })
        };
        rows.push((parse(time)?, parse(value)?));
    }

    Ok(rows)
}
