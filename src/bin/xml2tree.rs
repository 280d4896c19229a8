//! Command-line interface for xml2tree
//! This binary reads an XML file, runs the transformation pipeline and
//! prints the resulting tree to stdout in a machine format.
//!
//! Usage:
//!   xml2tree `<path>`                          - Print the tree as pretty JSON
//!   xml2tree `<path>` --format yaml            - Pick another output format
//!   xml2tree `<path>` --attributes             - Capture tag attributes on each node
//!   xml2tree `<path>` --keep b,c               - Group non-listed top-level nodes under Extra

use clap::{Arg, ArgAction, Command};
use std::fmt;
use std::fs;
use xml2tree::{parse, ParseOptions, ParseOutcome};

fn main() {
    let matches = Command::new("xml2tree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for transforming XML documents into a serializable tree")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the XML file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: json, json-pretty, yaml")
                .default_value("json-pretty"),
        )
        .arg(
            Arg::new("attributes")
                .long("attributes")
                .short('a')
                .help("Capture tag attributes on each node")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("keep")
                .long("keep")
                .short('k')
                .help("Comma-separated type labels kept at the top level; other top-level nodes are grouped under an Extra node"),
        )
        .arg(
            Arg::new("hints")
                .long("hints")
                .help("Print layout hints (levels, widest level) to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    let options = ParseOptions {
        capture_attributes: matches.get_flag("attributes"),
        important_types: matches
            .get_one::<String>("keep")
            .map(|list| {
                list.split(',')
                    .filter(|t| !t.is_empty())
                    .map(|t| t.to_string())
                    .collect()
            })
            .unwrap_or_default(),
    };

    handle_convert_command(path, format, &options, matches.get_flag("hints"));
}

/// Handle the default convert command
fn handle_convert_command(path: &str, format: &str, options: &ParseOptions, show_hints: bool) {
    let outcome = match convert_file(path, options) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for issue in outcome.status.issues() {
        eprintln!("Warning: {}", issue);
    }
    if show_hints {
        eprintln!(
            "Hints: {} levels, widest level holds {} nodes",
            outcome.hints.levels, outcome.hints.max_level_width
        );
    }

    let tree = match &outcome.tree {
        Some(tree) => tree,
        None => {
            eprintln!("Input contains no elements; nothing to print");
            return;
        }
    };

    match render_tree(tree, format) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("\nAvailable formats: json, json-pretty, yaml");
            std::process::exit(1);
        }
    }
}

/// Read and parse one file
fn convert_file(path: &str, options: &ParseOptions) -> Result<ParseOutcome, CliError> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::Io(path.to_string(), e.to_string()))?;
    Ok(parse(&content, options))
}

/// Render the tree in the requested output format
fn render_tree(tree: &xml2tree::TreeNode, format: &str) -> Result<String, CliError> {
    match format {
        "json" => serde_json::to_string(tree).map_err(|e| CliError::Render(e.to_string())),
        "json-pretty" => {
            serde_json::to_string_pretty(tree).map_err(|e| CliError::Render(e.to_string()))
        }
        "yaml" => serde_yaml::to_string(tree).map_err(|e| CliError::Render(e.to_string())),
        other => Err(CliError::UnknownFormat(other.to_string())),
    }
}

/// Errors surfaced to the command line
#[derive(Debug, Clone, PartialEq)]
enum CliError {
    Io(String, String),
    UnknownFormat(String),
    Render(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(path, msg) => write!(f, "cannot read {}: {}", path, msg),
            CliError::UnknownFormat(format) => write!(f, "unknown format: {}", format),
            CliError::Render(msg) => write!(f, "cannot render tree: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}
