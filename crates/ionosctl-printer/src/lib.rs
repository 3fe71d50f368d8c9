//! # ionosctl-printer - Tables and JSON for API responses
//!
//! `ionosctl-printer` turns arbitrary, shape-varying API responses into the
//! text tables and JSON documents printed by `ionosctl` commands. Commands
//! describe their output once as a column schema; the printer does the rest.
//!
//! ## Core Concepts
//!
//! - [`Column`]: a named output column reading a dotted path or computing a
//!   value with a derivation
//! - [`resolve_cols`]: the `--cols` resolution rules (defaults, `all`,
//!   case-insensitive names)
//! - [`Table`]: a schema plus the rows extracted from a payload
//! - [`OutputFormat`] / [`RenderOptions`]: `text`, `json` or `api-json`, with
//!   quiet, no-headers and JMESPath query switches
//! - [`sprint`]: extract, resolve and render in one call
//!
//! ## Quick Start
//!
//! ```rust
//! use ionosctl_printer::{resolve_cols, Column, OutputFormat, RenderOptions, Table};
//! use serde_json::json;
//!
//! let schema = vec![
//!     Column::new("Id").path("id").by_default(),
//!     Column::new("Name").path("properties.name").by_default(),
//!     Column::new("State").path("metadata.state").by_default(),
//! ];
//!
//! let mut table = Table::new(schema);
//! table
//!     .extract(&json!({
//!         "id": "dc-123",
//!         "metadata": {"state": "AVAILABLE"},
//!         "properties": {"name": "My DC"}
//!     }))
//!     .unwrap();
//!
//! let visible = resolve_cols(table.columns(), &[]);
//! let out = table
//!     .render(&visible, &RenderOptions::new(OutputFormat::Text))
//!     .unwrap();
//! assert_eq!(out, "Id      Name   State\ndc-123  My DC  AVAILABLE\n");
//! ```
//!
//! ## Output Formats
//!
//! | Format | Document |
//! |--------|----------|
//! | `text` | aligned columns, blank columns dropped |
//! | `json` | the payload, list pages merged into `{"items": [...]}` |
//! | `api-json` | the payload exactly as returned by the API |
//!
//! Query expressions only apply to the JSON formats.

pub mod cell;
pub mod column;
mod error;
mod extract;
pub mod hooks;
pub mod legacy;
pub mod output;
pub mod path;
pub mod query;
mod render;
mod table;

pub use column::{
    all_cols, cols_message, default_cols, resolve_cols, Column, Derivation, ALL_COLUMNS,
};
pub use error::{PrinterError, Result};
pub use output::{OutputFormat, RenderOptions};
pub use render::render_text;
pub use table::{sprint, BeforeRenderHook, Row, Table, TableOption};
