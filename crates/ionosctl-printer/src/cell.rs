//! Cell formatting for text output.

use serde_json::{Map, Number, Value};

/// Formats one cell value for the text table.
///
/// - `null` renders empty
/// - arrays render their elements joined by `", "`
/// - whole floats render without a fractional part (`3.0` becomes `3`)
/// - strings render without quotes
/// - objects render as compact JSON
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::Array(items) => items
            .iter()
            .map(format_cell)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        // `+ 0.0` turns -0.0 into 0.0
        Some(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f + 0.0),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// True when a cell would render blank: absent, `null`, `""` or `[]`.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

/// The subset of `visible` that has a non-blank value in at least one row.
///
/// Order follows `visible`.
pub fn active_columns(rows: &[Map<String, Value>], visible: &[String]) -> Vec<String> {
    visible
        .iter()
        .filter(|col| rows.iter().any(|row| !is_blank(row.get(col.as_str()))))
        .cloned()
        .collect()
}
