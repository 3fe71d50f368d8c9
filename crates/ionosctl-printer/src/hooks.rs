//! Ready-made before-render hooks.
//!
//! A hook runs at the start of every [`Table::render`] call and may suppress
//! the output. The typical use is a wait loop: re-fetch, re-extract and
//! render until the resource settles, printing only once.
//!
//! ```rust
//! use ionosctl_printer::{hooks, Column, OutputFormat, RenderOptions, Table};
//! use serde_json::json;
//!
//! let mut table = Table::new(vec![Column::new("State").path("metadata.state")])
//!     .with_options([hooks::until_state("State", ["AVAILABLE"])]);
//! let opts = RenderOptions::new(OutputFormat::Text);
//! let visible = vec!["State".to_string()];
//!
//! table.extract(&json!({"metadata": {"state": "BUSY"}})).unwrap();
//! assert_eq!(table.render(&visible, &opts).unwrap(), "");
//!
//! table.extract(&json!({"metadata": {"state": "AVAILABLE"}})).unwrap();
//! assert_eq!(table.render(&visible, &opts).unwrap(), "State\nAVAILABLE\n");
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::table::{BeforeRenderHook, Table, TableOption};

/// Suppresses output until every row's `column` holds one of `states`.
///
/// States compare case-insensitively. A table without rows renders.
pub fn until_state<I, S>(column: impl Into<String>, states: I) -> TableOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let column = column.into();
    let states: Vec<String> = states.into_iter().map(Into::into).collect();

    let hook: BeforeRenderHook = Arc::new(move |table: &Table, _visible: &[String]| {
        table.rows().iter().all(|row| match row.get(&column) {
            Some(Value::String(state)) => states.iter().any(|s| s.eq_ignore_ascii_case(state)),
            _ => false,
        })
    });
    TableOption::BeforeRender(hook)
}
