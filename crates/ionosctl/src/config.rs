//! Layered render settings.
//!
//! Settings come from, in order of precedence:
//!
//! 1. command-line flags
//! 2. environment variables (`IONOS_OUTPUT`, `IONOS_QUIET`, `IONOS_NO_HEADERS`,
//!    `IONOS_QUERY`)
//! 3. the YAML config file (`--config` or `IONOSCTL_CONFIG`)
//! 4. built-in defaults
//!
//! Flags and environment variables are handled by clap; this module loads the
//! file and merges it underneath.
//!
//! ```yaml
//! output: json
//! no_headers: true
//! columns:
//!   datacenter: [Name, State]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ionosctl_printer::{OutputFormat, PrinterError, RenderOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::GlobalArgs;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Contents of the YAML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: Option<String>,
    pub quiet: bool,
    pub no_headers: bool,
    pub query: Option<String>,
    /// Default `--cols` per resource name.
    pub columns: BTreeMap<String, Vec<String>>,
}

impl Config {
    pub fn from_yaml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(path, &content)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Loads the file named by `--config`, or the defaults when none is set.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Merges command-line settings over this file's settings.
    ///
    /// Boolean switches can only be turned on by a higher layer.
    pub fn render_options(&self, args: &GlobalArgs) -> Result<RenderOptions, PrinterError> {
        let format = match args.output.as_deref().or(self.output.as_deref()) {
            Some(token) => token.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };
        let query = args
            .query
            .clone()
            .or_else(|| self.query.clone())
            .unwrap_or_default();

        Ok(RenderOptions::new(format)
            .quiet(args.quiet || self.quiet)
            .no_headers(args.no_headers || self.no_headers)
            .query(query))
    }

    /// The user's columns, or the configured default for `resource`.
    pub fn columns_for(&self, resource: &str, requested: &[String]) -> Vec<String> {
        if !requested.is_empty() {
            return requested.to_vec();
        }
        self.columns.get(resource).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> GlobalArgs {
        GlobalArgs {
            output: None,
            quiet: false,
            no_headers: false,
            query: None,
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn test_defaults() {
        let opts = Config::default().render_options(&args()).unwrap();
        assert_eq!(opts, RenderOptions::new(OutputFormat::Text));
    }

    #[test]
    fn test_file_values_apply() {
        let config = Config::from_yaml(
            Path::new("config.yaml"),
            "output: api-json\nquiet: true\nquery: items[0]\n",
        )
        .unwrap();
        let opts = config.render_options(&args()).unwrap();
        assert_eq!(opts.format, OutputFormat::ApiJson);
        assert!(opts.quiet);
        assert_eq!(opts.active_query(), Some("items[0]"));
    }

    #[test]
    fn test_flags_override_file() {
        let config = Config {
            output: Some("json".into()),
            query: Some("a".into()),
            ..Default::default()
        };
        let mut a = args();
        a.output = Some("text".into());
        a.query = Some(String::new());
        a.no_headers = true;
        let opts = config.render_options(&a).unwrap();
        assert_eq!(opts.format, OutputFormat::Text);
        assert_eq!(opts.active_query(), None);
        assert!(opts.no_headers);
    }

    #[test]
    fn test_invalid_output_token() {
        let config = Config {
            output: Some("xml".into()),
            ..Default::default()
        };
        assert!(matches!(
            config.render_options(&args()),
            Err(PrinterError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = Config::from_yaml(Path::new("c.yaml"), "colour: red\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_columns_for() {
        let config = Config::from_yaml(
            Path::new("c.yaml"),
            "columns:\n  datacenter: [Name, State]\n",
        )
        .unwrap();
        assert_eq!(config.columns_for("datacenter", &[]), vec!["Name", "State"]);
        assert_eq!(
            config.columns_for("datacenter", &["Id".to_string()]),
            vec!["Id"]
        );
        assert!(config.columns_for("server", &[]).is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/ionosctl.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_optional_none() {
        assert_eq!(Config::load_optional(None).unwrap(), Config::default());
    }
}
