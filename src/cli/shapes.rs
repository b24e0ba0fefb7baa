//! CLI command for listing temporal shapes.

use super::recognize::OutputFormat;
use crate::models::Shape;
use crate::{Error, Result};
use serde::Serialize;
use std::io::{self, Write};

/// Information about a shape.
#[derive(Debug, Clone, Serialize)]
pub struct ShapeInfo {
    /// Shape key.
    pub shape: String,
    /// Engine type label.
    pub type_label: String,
    /// Whether values of this shape are intervals.
    pub range: bool,
    /// Description of the payload.
    pub description: String,
}

impl ShapeInfo {
    fn new(shape: Shape, description: &str) -> Self {
        Self {
            shape: shape.to_string(),
            type_label: shape.type_label(),
            range: shape.is_range(),
            description: description.to_string(),
        }
    }
}

/// Returns information on all shapes.
#[must_use]
pub fn get_all_shapes() -> Vec<ShapeInfo> {
    Shape::all()
        .iter()
        .map(|&shape| {
            let description = match shape {
                Shape::Date => "Calendar date (yyyy-MM-dd)",
                Shape::Time => "Wall-clock time (HH:mm:ss)",
                Shape::DateTime => "Date with time (yyyy-MM-dd HH:mm:ss)",
                Shape::DateRange => "Date interval, optionally open-ended",
                Shape::TimeRange => "Time interval, optionally open-ended",
                Shape::DateTimeRange => "Date-time interval, optionally open-ended",
                Shape::Duration => "Span in seconds with an optional more/less modifier",
                Shape::Set => "Recurring set, described by its Timex only",
            };
            ShapeInfo::new(shape, description)
        })
        .collect()
}

/// Writes shapes as a table.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_shapes_table<W: Write>(writer: &mut W, shapes: &[ShapeInfo]) -> io::Result<()> {
    writeln!(writer, "{:<15}{:<26}DESCRIPTION", "SHAPE", "TYPE LABEL")?;
    for info in shapes {
        writeln!(
            writer,
            "{:<15}{:<26}{}",
            info.shape, info.type_label, info.description
        )?;
    }
    Ok(())
}

/// Writes shapes as JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_shapes_json<W: Write>(writer: &mut W, shapes: &[ShapeInfo]) -> Result<()> {
    let json = serde_json::to_string_pretty(shapes).map_err(|e| Error::OperationFailed {
        operation: "serialize_shapes".to_string(),
        cause: e.to_string(),
    })?;
    writeln!(writer, "{json}").map_err(|e| Error::OperationFailed {
        operation: "write_output".to_string(),
        cause: e.to_string(),
    })
}

/// Executes the shapes command.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn cmd_shapes(format: OutputFormat) -> Result<()> {
    let shapes = get_all_shapes();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            write_shapes_table(&mut handle, &shapes).map_err(|e| Error::OperationFailed {
                operation: "write_output".to_string(),
                cause: e.to_string(),
            })
        },
        OutputFormat::Json => write_shapes_json(&mut handle, &shapes),
    }
}
