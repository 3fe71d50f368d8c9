//! Dotted-path navigation over JSON trees.
//!
//! Paths look like `properties.name` or `entities.nics.items.0.id`. Each
//! segment addresses an object key, or an array index when the segment
//! parses as an unsigned integer.

use serde_json::Value;

/// Looks up `path` inside `value`.
///
/// Returns `None` when any segment is missing. An empty path resolves to
/// `value` itself.
///
/// # Example
///
/// ```rust
/// use ionosctl_printer::path::lookup;
/// use serde_json::json;
///
/// let dc = json!({"properties": {"name": "My DC"}});
/// assert_eq!(lookup(&dc, "properties.name"), Some(&json!("My DC")));
/// assert_eq!(lookup(&dc, "metadata.state"), None);
/// ```
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }

    let mut current = value;
    for part in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(part)?,
            Value::Array(arr) => arr.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Returns the last segment of a dotted path.
pub fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

/// Extracts the owning resource id from a REST resource URL.
///
/// For `.../datacenters/{dcId}/servers/{serverId}` this returns `{dcId}`:
/// the token three positions before the end of the `/`-split URL.
pub fn parent_id_from_href(href: &str) -> Option<&str> {
    let tokens: Vec<&str> = href.split('/').collect();
    if tokens.len() < 3 {
        return None;
    }
    Some(tokens[tokens.len() - 3])
}
