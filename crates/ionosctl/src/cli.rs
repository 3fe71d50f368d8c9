//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::resources::Resource;

/// Render IONOS Cloud API responses as tables or JSON.
#[derive(Debug, Parser)]
#[command(name = "ionosctl", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Output format: text, json or api-json
    #[arg(short, long, global = true, env = "IONOS_OUTPUT")]
    pub output: Option<String>,

    /// Suppress all output
    #[arg(short, long, global = true, env = "IONOS_QUIET")]
    pub quiet: bool,

    /// Omit the header line in text output
    #[arg(long, global = true, env = "IONOS_NO_HEADERS")]
    pub no_headers: bool,

    /// JMESPath expression applied to JSON output
    #[arg(long, global = true, env = "IONOS_QUERY")]
    pub query: Option<String>,

    /// YAML file with default settings
    #[arg(long, global = true, env = "IONOSCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a recorded API response for a resource type
    Print(PrintArgs),

    /// List the columns available for a resource type
    Columns {
        #[arg(value_enum)]
        resource: Resource,
    },
}

#[derive(Debug, Args)]
pub struct PrintArgs {
    #[arg(value_enum)]
    pub resource: Resource,

    /// JSON response to read (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Columns to print, comma separated; `all` prints every column
    #[arg(long, value_delimiter = ',')]
    pub cols: Vec<String>,

    /// Path of the list inside the response (defaults to `items` when present)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Print nothing until every row's State is one of these values
    #[arg(long, value_delimiter = ',')]
    pub wait_for_state: Vec<String>,
}
