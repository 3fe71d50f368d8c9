//! Column schemas and `--cols` resolution.
//!
//! A schema is an ordered `Vec<Column>` declared once per resource type.
//! Each column says where its value lives in a payload item (a dotted path)
//! or how to compute it (a derivation), and whether it is shown when the user
//! does not ask for specific columns.
//!
//! ```rust
//! use ionosctl_printer::{resolve_cols, Column};
//!
//! let schema = vec![
//!     Column::new("Id").path("id").by_default(),
//!     Column::new("Name").path("properties.name").by_default(),
//!     Column::new("Version").path("properties.version"),
//! ];
//!
//! assert_eq!(resolve_cols(&schema, &[]), vec!["Id", "Name"]);
//! assert_eq!(resolve_cols(&schema, &["all".into()]), vec!["Id", "Name", "Version"]);
//! assert_eq!(resolve_cols(&schema, &["version".into(), "id".into()]), vec!["Version", "Id"]);
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

/// Computes a display value from a whole payload item.
///
/// Returning `None` leaves the cell absent.
pub type Derivation = Arc<dyn Fn(&Map<String, Value>) -> Option<Value> + Send + Sync>;

/// Keyword selecting every column of a schema.
pub const ALL_COLUMNS: &str = "all";

/// One output column.
#[derive(Clone)]
pub struct Column {
    /// Header text, also the key of the column in extracted rows.
    pub name: String,
    /// Dotted path into a payload item.
    pub path: Option<String>,
    /// Custom value computation. Takes precedence over `path`.
    pub derive: Option<Derivation>,
    /// Shown when no explicit column selection is given.
    pub is_default: bool,
}

impl Column {
    /// Create a column with no value source that is hidden by default.
    pub fn new(name: impl Into<String>) -> Self {
        Column {
            name: name.into(),
            path: None,
            derive: None,
            is_default: false,
        }
    }

    /// Set the dotted path the value is read from.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Compute the value from the whole item instead of a path.
    pub fn derive<F>(mut self, f: F) -> Self
    where
        F: Fn(&Map<String, Value>) -> Option<Value> + Send + Sync + 'static,
    {
        self.derive = Some(Arc::new(f));
        self
    }

    /// Show this column when the user does not select columns.
    pub fn by_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("derive", &self.derive.as_ref().map(|_| "<fn>"))
            .field("is_default", &self.is_default)
            .finish()
    }
}

/// All column names in declaration order.
pub fn all_cols(schema: &[Column]) -> Vec<String> {
    schema.iter().map(|c| c.name.clone()).collect()
}

/// Names of the default columns in declaration order.
pub fn default_cols(schema: &[Column]) -> Vec<String> {
    schema
        .iter()
        .filter(|c| c.is_default)
        .map(|c| c.name.clone())
        .collect()
}

/// Resolves the user's `--cols` input against a schema.
///
/// 1. Empty input selects the default columns.
/// 2. A first element of `all` selects every column.
/// 3. Otherwise names are matched case-insensitively and returned in the
///    order the user gave them; unknown names are dropped.
/// 4. If nothing matched, the default columns are used.
pub fn resolve_cols(schema: &[Column], user_input: &[String]) -> Vec<String> {
    let Some(first) = user_input.first() else {
        return default_cols(schema);
    };
    if first == ALL_COLUMNS {
        return all_cols(schema);
    }

    let matched: Vec<String> = user_input
        .iter()
        .filter_map(|wanted| {
            schema
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(wanted))
                .map(|c| c.name.clone())
        })
        .collect();

    if matched.is_empty() {
        default_cols(schema)
    } else {
        matched
    }
}

/// Help text for a `--cols` flag listing every available column.
pub fn cols_message(schema: &[Column]) -> String {
    format!(
        "Set of columns to be printed on output\nAvailable columns: {}",
        all_cols(schema).join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Vec<Column> {
        vec![
            Column::new("Id").path("id").by_default(),
            Column::new("Name").path("properties.name").by_default(),
            Column::new("Location").path("properties.location"),
            Column::new("State").path("metadata.state").by_default(),
        ]
    }

    fn input(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn all_cols_keeps_declaration_order() {
        assert_eq!(all_cols(&schema()), vec!["Id", "Name", "Location", "State"]);
    }

    #[test]
    fn default_cols_filters_hidden() {
        assert_eq!(default_cols(&schema()), vec!["Id", "Name", "State"]);
    }

    #[test]
    fn resolve_empty_input_uses_defaults() {
        assert_eq!(resolve_cols(&schema(), &[]), vec!["Id", "Name", "State"]);
    }

    #[test]
    fn resolve_all_keyword() {
        assert_eq!(
            resolve_cols(&schema(), &input(&["all", "Id"])),
            vec!["Id", "Name", "Location", "State"]
        );
    }

    #[test]
    fn resolve_all_only_counts_as_first_element() {
        assert_eq!(resolve_cols(&schema(), &input(&["Id", "all"])), vec!["Id"]);
    }

    #[test]
    fn resolve_is_case_insensitive_and_keeps_user_order() {
        assert_eq!(
            resolve_cols(&schema(), &input(&["state", "LOCATION", "id"])),
            vec!["State", "Location", "Id"]
        );
    }

    #[test]
    fn resolve_drops_unknown_names() {
        assert_eq!(
            resolve_cols(&schema(), &input(&["bogus", "name"])),
            vec!["Name"]
        );
    }

    #[test]
    fn resolve_falls_back_when_nothing_matches() {
        assert_eq!(
            resolve_cols(&schema(), &input(&["bogus", "nope"])),
            vec!["Id", "Name", "State"]
        );
    }

    #[test]
    fn cols_message_lists_every_column() {
        let msg = cols_message(&schema());
        assert!(msg.contains("Id, Name, Location, State"));
    }

    #[test]
    fn all_keyword_is_case_sensitive() {
        assert_eq!(
            resolve_cols(&schema(), &input(&["ALL"])),
            default_cols(&schema())
        );
        assert_eq!(
            resolve_cols(&schema(), &input(&["All"])),
            default_cols(&schema())
        );
    }

    #[test]
    fn derive_takes_a_closure() {
        let col = Column::new("Upper").derive(|item| {
            item.get("name")
                .and_then(Value::as_str)
                .map(|s| Value::from(s.to_uppercase()))
        });
        let mut item = Map::new();
        item.insert("name".into(), json!("dc"));
        let f = col.derive.as_ref().unwrap();
        assert_eq!(f(&item), Some(json!("DC")));
    }

    #[test]
    fn debug_hides_closure() {
        let col = Column::new("X").derive(|_| None);
        assert!(format!("{:?}", col).contains("<fn>"));
    }
}
