//! Rendering extracted tables.
//!
//! Rendering runs in a fixed order:
//!
//! 1. `quiet` returns empty output.
//! 2. The before-render hook, if any, may veto output.
//! 3. The output format decides the document:
//!    - `text`: aligned columns built from the rows, query filters rejected
//!    - `api-json`: the raw payload, optionally filtered
//!    - `json`: the raw payload in the legacy envelope, optionally filtered

use console::{measure_text_width, pad_str, Alignment};
use serde_json::Value;

use crate::cell::{active_columns, format_cell};
use crate::error::{PrinterError, Result};
use crate::legacy::legacy_envelope;
use crate::output::{OutputFormat, RenderOptions};
use crate::query::apply_query;
use crate::table::{Row, Table};

const COLUMN_SEPARATOR: &str = "  ";

impl Table {
    /// Renders the table for the given visible columns.
    ///
    /// Rendering does not change the table, so repeated calls with the same
    /// arguments produce the same output.
    pub fn render(&self, visible: &[String], options: &RenderOptions) -> Result<String> {
        if options.quiet {
            return Ok(String::new());
        }

        if let Some(hook) = &self.before_render {
            if !hook(self, visible) {
                tracing::debug!("rendering vetoed by before-render hook");
                return Ok(String::new());
            }
        }

        if !options.format.is_json() && options.active_query().is_some() {
            return Err(PrinterError::QueryInTextMode);
        }

        tracing::debug!(format = %options.format, columns = visible.len(), "rendering table");
        match options.format {
            OutputFormat::Text => Ok(render_text(&self.rows, visible, options.no_headers)),
            OutputFormat::ApiJson => {
                let filtered = apply_query(self.raw.clone(), options.active_query())?;
                to_json_document(&filtered)
            }
            OutputFormat::Json => {
                let envelope = legacy_envelope(self.raw.clone());
                let filtered = apply_query(envelope, options.active_query())?;
                to_json_document(&filtered)
            }
        }
    }
}

/// Aligned text table of the non-blank visible columns.
///
/// Returns an empty string when every visible column is blank.
pub fn render_text(rows: &[Row], visible: &[String], no_headers: bool) -> String {
    let active = active_columns(rows, visible);
    if active.is_empty() {
        tracing::debug!("no column has data, nothing to print");
        return String::new();
    }

    let mut lines: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    if !no_headers {
        lines.push(active.clone());
    }
    for row in rows {
        lines.push(
            active
                .iter()
                .map(|col| row.get(col.as_str()).map(format_cell).unwrap_or_default())
                .collect(),
        );
    }

    let mut widths = vec![0; active.len()];
    for line in &lines {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(measure_text_width(cell));
        }
    }

    let last = active.len() - 1;
    let mut out = String::new();
    for line in &lines {
        for (i, cell) in line.iter().enumerate() {
            if i == last {
                out.push_str(cell);
            } else {
                out.push_str(&pad_str(cell, widths[i], Alignment::Left, None));
                out.push_str(COLUMN_SEPARATOR);
            }
        }
        out.push('\n');
    }
    out
}

/// Pretty JSON with two-space indentation and a trailing newline.
fn to_json_document(value: &Value) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
