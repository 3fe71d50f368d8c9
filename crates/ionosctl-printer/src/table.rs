//! The [`Table`] object and the [`sprint`] convenience entry point.
//!
//! A table owns a column schema, the rows extracted from the last payload and
//! the payload itself. The usual flow is:
//!
//! ```text
//! schema → Table::new → extract(payload) → render(visible cols, options)
//! ```
//!
//! Extraction may be repeated to refresh rows from a re-fetched payload, for
//! example while waiting for a resource to reach a terminal state.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::column::{resolve_cols, Column};
use crate::error::{PrinterError, Result};
use crate::output::RenderOptions;

/// One extracted row: column name to cell value.
pub type Row = Map<String, Value>;

/// Decides whether a table may be rendered right now.
///
/// Receives the table and the visible column names. Returning `false`
/// suppresses output for this render call.
pub type BeforeRenderHook = Arc<dyn Fn(&Table, &[String]) -> bool + Send + Sync>;

/// Construction options, for callers that assemble them as a list.
#[derive(Clone)]
pub enum TableOption {
    /// Dotted path of the array holding the list items (e.g. `items`).
    Prefix(String),
    /// Hook consulted before every render.
    BeforeRender(BeforeRenderHook),
}

/// A column schema bound to extracted rows and the raw payload.
#[derive(Clone)]
pub struct Table {
    pub(crate) columns: Vec<Column>,
    pub(crate) prefix: Option<String>,
    pub(crate) before_render: Option<BeforeRenderHook>,
    pub(crate) rows: Vec<Row>,
    pub(crate) raw: Value,
}

impl Table {
    /// Create an empty table for a schema.
    pub fn new(columns: Vec<Column>) -> Self {
        Table {
            columns,
            prefix: None,
            before_render: None,
            rows: Vec::new(),
            raw: Value::Null,
        }
    }

    /// Locate list items under `prefix` instead of at the payload root.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = if prefix.is_empty() { None } else { Some(prefix) };
        self
    }

    /// Install a hook that may veto rendering.
    pub fn before_render<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Table, &[String]) -> bool + Send + Sync + 'static,
    {
        self.before_render = Some(Arc::new(hook));
        self
    }

    /// Apply a list of options.
    pub fn with_options(mut self, options: impl IntoIterator<Item = TableOption>) -> Self {
        for option in options {
            match option {
                TableOption::Prefix(prefix) => self = self.prefix(prefix),
                TableOption::BeforeRender(hook) => self.before_render = Some(hook),
            }
        }
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The payload given to the last [`extract`](Table::extract) call.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Overwrite a single cell of the extracted rows.
    ///
    /// `column` must name a schema column (case-insensitive).
    pub fn set_cell(&mut self, row: usize, column: &str, value: impl Into<Value>) -> Result<()> {
        let name = self
            .columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(column))
            .map(|c| c.name.clone())
            .ok_or_else(|| PrinterError::UnknownColumn(column.to_string()))?;

        let len = self.rows.len();
        let target = self
            .rows
            .get_mut(row)
            .ok_or(PrinterError::RowOutOfRange { row, len })?;
        target.insert(name, value.into());
        Ok(())
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("prefix", &self.prefix)
            .field("before_render", &self.before_render.as_ref().map(|_| "<fn>"))
            .field("rows", &self.rows)
            .finish()
    }
}

/// Extracts `payload` and renders it in one call.
///
/// `user_cols` is the raw `--cols` input and is resolved with
/// [`resolve_cols`].
///
/// # Example
///
/// ```rust
/// use ionosctl_printer::{sprint, Column, OutputFormat, RenderOptions, TableOption};
/// use serde_json::json;
///
/// let schema = vec![
///     Column::new("Id").path("id").by_default(),
///     Column::new("Name").path("properties.name").by_default(),
/// ];
/// let payload = json!({"items": [{"id": "a", "properties": {"name": "one"}}]});
///
/// let out = sprint(
///     schema,
///     &payload,
///     &[],
///     &RenderOptions::new(OutputFormat::Text),
///     [TableOption::Prefix("items".into())],
/// )
/// .unwrap();
/// assert_eq!(out, "Id  Name\na   one\n");
/// ```
pub fn sprint<T: Serialize + ?Sized>(
    columns: Vec<Column>,
    payload: &T,
    user_cols: &[String],
    options: &RenderOptions,
    table_options: impl IntoIterator<Item = TableOption>,
) -> Result<String> {
    let mut table = Table::new(columns).with_options(table_options);
    table.extract(payload)?;
    let visible = resolve_cols(&table.columns, user_cols);
    table.render(&visible, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Vec<Column> {
        vec![
            Column::new("Id").path("id").by_default(),
            Column::new("State").path("metadata.state").by_default(),
        ]
    }

    #[test]
    fn new_table_is_empty() {
        let table = Table::new(schema());
        assert!(table.rows().is_empty());
        assert_eq!(table.raw(), &Value::Null);
        assert_eq!(table.columns().len(), 2);
    }

    #[test]
    fn empty_prefix_means_none() {
        let table = Table::new(schema()).prefix("");
        assert!(table.prefix.is_none());
    }

    #[test]
    fn options_apply_prefix_and_hook() {
        let hook: BeforeRenderHook = Arc::new(|_: &Table, _: &[String]| false);
        let table = Table::new(schema()).with_options([
            TableOption::Prefix("items".into()),
            TableOption::BeforeRender(hook),
        ]);
        assert_eq!(table.prefix.as_deref(), Some("items"));
        assert!(table.before_render.is_some());
    }

    #[test]
    fn set_cell_overwrites_value() {
        let mut table = Table::new(schema());
        table
            .extract(&json!({"id": "dc-1", "metadata": {"state": "BUSY"}}))
            .unwrap();
        table.set_cell(0, "state", "AVAILABLE").unwrap();
        assert_eq!(table.rows()[0]["State"], json!("AVAILABLE"));
    }

    #[test]
    fn set_cell_unknown_column() {
        let mut table = Table::new(schema());
        table.extract(&json!({"id": "dc-1"})).unwrap();
        let err = table.set_cell(0, "Bogus", "x").unwrap_err();
        assert!(matches!(err, PrinterError::UnknownColumn(_)));
    }

    #[test]
    fn set_cell_row_out_of_range() {
        let mut table = Table::new(schema());
        table.extract(&json!({"id": "dc-1"})).unwrap();
        let err = table.set_cell(3, "Id", "x").unwrap_err();
        assert!(matches!(err, PrinterError::RowOutOfRange { row: 3, len: 1 }));
    }

    #[test]
    fn debug_output_hides_hook() {
        let table = Table::new(schema()).before_render(|_, _| true);
        assert!(format!("{:?}", table).contains("<fn>"));
    }
}
