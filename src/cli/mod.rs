//! CLI argument parsing for citygraph
//!
//! Uses clap for argument parsing. The two positional arguments are the
//! distance table file and the algorithm; start and target nodes are read
//! from standard input unless given as flags.

pub mod parse;

use clap::Parser;
use std::path::PathBuf;

use citygraph_core::config::CONFIG_ENV;
use citygraph_core::format::OutputFormat;
use citygraph_core::graph::{Algorithm, NeighborOrder, UnreachedTarget};
use parse::{parse_algorithm, parse_neighbor_order, parse_output_format, parse_unreached_target};

/// Citygraph - shortest paths and traversals over city distance tables
#[derive(Parser, Debug)]
#[command(name = "citygraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON distance table to load
    pub filename: PathBuf,

    /// Algorithm to run: bfs, dfs, or dijkstra
    #[arg(value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Start node (read from stdin when omitted)
    #[arg(long)]
    pub start: Option<String>,

    /// Target node for bfs/dijkstra (read from stdin when omitted)
    #[arg(long)]
    pub target: Option<String>,

    /// TOML configuration file
    #[arg(long, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Neighbor enumeration order: declared or lexical
    #[arg(long, value_parser = parse_neighbor_order)]
    pub neighbor_order: Option<NeighborOrder>,

    /// Dijkstra result when the target is unreachable: fail or empty
    #[arg(long, value_parser = parse_unreached_target)]
    pub unreached_target: Option<UnreachedTarget>,

    /// Treat neighbors without an adjacency entry as dead ends
    #[arg(long)]
    pub lenient_nodes: bool,

    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress error messages
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level filter (overrides --verbose)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}
