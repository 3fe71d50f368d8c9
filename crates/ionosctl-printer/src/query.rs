//! JMESPath filtering for the JSON output formats.

use serde_json::Value;

use crate::error::{PrinterError, Result};

/// Applies a JMESPath expression to `data`.
///
/// `None` returns `data` unchanged. Compile and evaluation failures surface
/// as [`PrinterError::Query`].
pub fn apply_query(data: Value, expression: Option<&str>) -> Result<Value> {
    let Some(expression) = expression else {
        return Ok(data);
    };

    let compiled =
        jmespath::compile(expression).map_err(|e| PrinterError::Query(e.to_string()))?;
    let result = compiled
        .search(&data)
        .map_err(|e| PrinterError::Query(e.to_string()))?;

    tracing::debug!(query = expression, "applied query filter");
    Ok(serde_json::to_value(&*result)?)
}
