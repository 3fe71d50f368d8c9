//! Output format selection.
//!
//! [`OutputFormat`] is the value behind the `--output` flag. [`RenderOptions`]
//! bundles it with the other switches that shape rendering, so callers pass
//! them explicitly instead of reading process-wide configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::PrinterError;

/// How a table is rendered.
///
/// - `Text` - aligned columns with an optional header line
/// - `Json` - the raw payload wrapped in the legacy `{"items": [...]}` envelope
/// - `ApiJson` - the raw payload exactly as the API returned it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    ApiJson,
}

impl OutputFormat {
    /// Returns true for the JSON-producing formats.
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::ApiJson)
    }

    /// The token accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::ApiJson => "api-json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = PrinterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "api-json" => Ok(OutputFormat::ApiJson),
            other => Err(PrinterError::InvalidFormat(other.to_string())),
        }
    }
}

/// Switches read by [`Table::render`](crate::Table::render).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Suppress all output.
    pub quiet: bool,
    /// Omit the header line in text output.
    pub no_headers: bool,
    /// JMESPath expression applied in the JSON formats.
    pub query: Option<String>,
}

impl RenderOptions {
    pub fn new(format: OutputFormat) -> Self {
        RenderOptions {
            format,
            ..Default::default()
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn no_headers(mut self, no_headers: bool) -> Self {
        self.no_headers = no_headers;
        self
    }

    /// Set the query expression. Empty strings count as no query.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = if query.is_empty() { None } else { Some(query) };
        self
    }

    /// The query expression, if one is set and non-empty.
    pub fn active_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}
