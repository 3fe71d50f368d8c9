//! `ionosctl` - print IONOS Cloud API responses.
//!
//! Each resource type declares a column schema (see [`resources`]); the
//! `print` command feeds a recorded response through `ionosctl-printer` with
//! the user's `--cols`, `--output`, `--query` and related switches.

pub mod cli;
pub mod config;
pub mod logging;
pub mod resources;

use std::io::Read;

use anyhow::{Context, Result};
use ionosctl_printer::{cols_message, hooks, sprint, TableOption};
use serde_json::Value;

use crate::cli::{Cli, Command, PrintArgs};
use crate::config::Config;

/// List wrapper key used by the IONOS APIs.
const ITEMS_KEY: &str = "items";

/// Runs a parsed command line and returns what should be printed.
pub fn run(cli: &Cli, stdin: impl Read) -> Result<String> {
    let config = Config::load_optional(cli.global.config.as_deref())?;

    match &cli.command {
        Command::Columns { resource } => {
            Ok(format!("{}\n", cols_message(&resource.schema())))
        }
        Command::Print(args) => print(cli, &config, args, stdin),
    }
}

fn print(cli: &Cli, config: &Config, args: &PrintArgs, stdin: impl Read) -> Result<String> {
    let payload = read_payload(args, stdin)?;
    let options = config.render_options(&cli.global)?;
    let cols = config.columns_for(args.resource.name(), &args.cols);

    let mut table_options = Vec::new();
    if let Some(prefix) = args.prefix.clone().or_else(|| default_prefix(&payload)) {
        table_options.push(TableOption::Prefix(prefix));
    }
    if !args.wait_for_state.is_empty() {
        table_options.push(hooks::until_state("State", args.wait_for_state.clone()));
    }

    tracing::debug!(
        resource = args.resource.name(),
        format = %options.format,
        "printing response"
    );
    let out = sprint(args.resource.schema(), &payload, &cols, &options, table_options)
        .with_context(|| format!("failed to print {} response", args.resource.name()))?;
    Ok(out)
}

fn read_payload(args: &PrintArgs, mut stdin: impl Read) -> Result<Value> {
    let content = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read response from stdin")?;
            buf
        }
    };
    serde_json::from_str(&content).context("response is not valid JSON")
}

/// `items` when the response is a list wrapper.
fn default_prefix(payload: &Value) -> Option<String> {
    payload
        .get(ITEMS_KEY)
        .map(|_| ITEMS_KEY.to_string())
}
