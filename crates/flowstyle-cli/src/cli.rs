//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flowstyle::constants::PROPERTY_LINE_STYLE;

use crate::output::OutputMode;

/// Resolve flowchart edge styles into rendering directives.
#[derive(Debug, Parser)]
#[command(name = "flowstyle", version, about)]
pub struct Cli {
    /// Load the mapping table from a YAML or JSON stylesheet.
    #[arg(long, global = true, value_name = "PATH", conflicts_with_all = ["arrow_width", "arrow_length"])]
    pub stylesheet: Option<PathBuf>,

    /// Arrowhead width for the built-in table [default: 20]
    #[arg(long, global = true, value_name = "W")]
    pub arrow_width: Option<f64>,

    /// Arrowhead length for the built-in table [default: 15]
    #[arg(long, global = true, value_name = "L")]
    pub arrow_length: Option<f64>,

    /// Output mode.
    #[arg(long, global = true, value_enum, value_name = "MODE", default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the style keys of a property in declaration order.
    Styles {
        #[arg(long, default_value = PROPERTY_LINE_STYLE)]
        property: String,
        /// Mark this key as the current selection.
        #[arg(long, value_name = "KEY")]
        current: Option<String>,
    },
    /// Resolve a single property bag.
    Resolve {
        /// A property assignment; may be repeated.
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
        /// Fail on style keys the table does not declare.
        #[arg(long)]
        strict: bool,
    },
    /// Validate a dataset and print the appearance of every edge.
    Edges {
        /// JSON document shaped `{ "nodes": [...], "edges": [...] }`.
        dataset: PathBuf,
        /// Fail on style keys the table does not declare.
        #[arg(long)]
        strict: bool,
    },
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}
