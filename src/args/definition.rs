//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

use crate::state::Column;

use super::utils::{parse_column, parse_column_filter};

/// Repotable - search, filter and sort a catalogue of federal institutions' repositories
#[derive(Parser, Debug, Default)]
#[command(name = "repotable")]
#[command(version)]
#[command(about = "Search, filter and sort a catalogue of federal institutions' repositories", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// JSON dataset to load
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// JSON dataset to load (same as the positional FILE)
    #[arg(long = "data", value_name = "FILE", conflicts_with = "file")]
    pub data: Option<PathBuf>,

    /// Initial free-text search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show repositories whose main language equals this value
    #[arg(long)]
    pub language: Option<String>,

    /// Only show repositories whose license equals this value
    #[arg(long)]
    pub license: Option<String>,

    /// Column prefix filter as COLUMN=VALUE (repeatable), e.g. -f stars=10
    #[arg(short = 'f', long = "filter", value_name = "COLUMN=VALUE", value_parser = parse_column_filter)]
    pub filters: Vec<(Column, String)>,

    /// Sort column (key or alias, e.g. stars, updated, Estrelas)
    #[arg(long, value_parser = parse_column)]
    pub sort: Option<Column>,

    /// Sort in descending order (use with --sort)
    #[arg(long)]
    pub desc: bool,

    /// Page to show first (1-based)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Rows per page (overrides settings.conf)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Drop repositories repeated with the same name and link before loading
    #[arg(long)]
    pub dedupe: bool,

    /// Print the table page as text instead of starting the browser
    #[arg(long)]
    pub print: bool,

    /// Print the table page as JSON instead of starting the browser
    #[arg(long, conflicts_with = "print")]
    pub json: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}
