//! Error types for extraction and rendering.

use thiserror::Error;

/// Errors returned by [`Table`](crate::Table) extraction and rendering.
///
/// Input errors (nil payload, bad JSON, a prefix that is not a list) and
/// configuration errors (format token, query expression) are always
/// surfaced to the caller. Soft conditions such as an absent prefix or an
/// all-empty column set are not errors and produce empty output instead.
#[derive(Debug, Error)]
pub enum PrinterError {
    #[error("cannot extract rows from a nil payload")]
    NilPayload,

    #[error("failed to convert payload to JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("prefix '{prefix}' does not point to an array")]
    PrefixNotArray { prefix: String },

    #[error("invalid format: '{0}' (expected one of: text, json, api-json)")]
    InvalidFormat(String),

    #[error("query filters are not supported with text output, use --output json or --output api-json")]
    QueryInTextMode,

    #[error("invalid query expression: {0}")]
    Query(String),

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("row {row} is out of range (table has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },
}

/// Result type for printer operations.
pub type Result<T> = std::result::Result<T, PrinterError>;
