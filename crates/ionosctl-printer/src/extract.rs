//! Turning payloads into rows.
//!
//! The payload is first converted to a `serde_json::Value`, then the items to
//! iterate are located:
//!
//! | Prefix | Payload | Items |
//! |--------|---------|-------|
//! | none | array | its elements |
//! | none | anything else | the payload itself |
//! | set | prefix missing or `null` | none |
//! | set | prefix is an array | its elements, nested arrays flattened once |
//! | set | prefix is not an array | error |
//!
//! Every item then yields one row with a value per column.

use serde::Serialize;
use serde_json::Value;

use crate::column::Column;
use crate::error::{PrinterError, Result};
use crate::path::{last_segment, lookup, parent_id_from_href};
use crate::table::{Row, Table};

impl Table {
    /// Replaces rows and raw payload with those of `payload`.
    ///
    /// Fails on a `null` payload, on values that cannot be represented as
    /// JSON, and when the configured prefix exists but is not an array.
    pub fn extract<T: Serialize + ?Sized>(&mut self, payload: &T) -> Result<()> {
        let raw = serde_json::to_value(payload)?;
        if raw.is_null() {
            return Err(PrinterError::NilPayload);
        }

        let rows = {
            let items = locate_items(&raw, self.prefix.as_deref())?;
            items
                .into_iter()
                .map(|item| build_row(&self.columns, item))
                .collect::<Vec<_>>()
        };

        tracing::debug!(
            rows = rows.len(),
            prefix = self.prefix.as_deref().unwrap_or(""),
            "extracted rows"
        );
        self.rows = rows;
        self.raw = raw;
        Ok(())
    }
}

fn locate_items<'a>(raw: &'a Value, prefix: Option<&str>) -> Result<Vec<&'a Value>> {
    let Some(prefix) = prefix else {
        return Ok(match raw {
            Value::Array(items) => items.iter().collect(),
            single => vec![single],
        });
    };

    match lookup(raw, prefix) {
        None | Some(Value::Null) => {
            tracing::trace!(prefix, "prefix not present in payload");
            Ok(Vec::new())
        }
        Some(Value::Array(children)) => Ok(children
            .iter()
            .flat_map(|child| match child {
                Value::Array(nested) => nested.iter().collect::<Vec<_>>(),
                other => vec![other],
            })
            .collect()),
        Some(_) => Err(PrinterError::PrefixNotArray {
            prefix: prefix.to_string(),
        }),
    }
}

fn build_row(columns: &[Column], item: &Value) -> Row {
    let mut row = Row::new();
    for column in columns {
        if let Some(value) = column_value(column, item) {
            row.insert(column.name.clone(), value);
        }
    }
    row
}

fn column_value(column: &Column, item: &Value) -> Option<Value> {
    if let Some(derive) = &column.derive {
        return derive(item.as_object()?);
    }

    let path = column.path.as_deref()?;
    let value = lookup(item, path)?;

    if last_segment(path) == "href" && !column.name.eq_ignore_ascii_case("href") {
        let parent = parent_id_from_href(value.as_str()?)?;
        return Some(Value::from(parent));
    }
    Some(value.clone())
}
