//! Command dispatch logic for citygraph

use std::io;
use std::time::Instant;

use citygraph_core::config::Config;
use citygraph_core::error::Result;
use citygraph_core::format::render;
use citygraph_core::graph::{run as run_traversal, TraversalOptions};
use citygraph_core::{bail_usage, loader, trace_time};
use tracing::debug;

use crate::cli::Cli;
use crate::commands::input::read_request;

/// Merge the config file with command-line overrides
fn traversal_options(cli: &Cli) -> Result<TraversalOptions> {
    let mut opts = Config::load_or_default(cli.config.as_deref())?.traversal;
    if let Some(order) = cli.neighbor_order {
        opts.neighbor_order = order;
    }
    if let Some(policy) = cli.unreached_target {
        opts.unreached_target = policy;
    }
    if cli.lenient_nodes {
        opts.strict_nodes = false;
    }
    Ok(opts)
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    if cli.target.is_some() && !cli.algorithm.needs_target() {
        bail_usage!(format!("--target is not used by {}", cli.algorithm));
    }

    let opts = traversal_options(cli)?;
    debug!(elapsed = ?start.elapsed(), opts = ?opts, "resolve_options");

    let graph = loader::load_from_file(&cli.filename)?;
    trace_time!(start, "load_graph", nodes = graph.node_count());

    let stdin = io::stdin();
    let request = read_request(
        &mut stdin.lock(),
        cli.algorithm,
        cli.start.as_deref(),
        cli.target.as_deref(),
    )?;

    let outcome = run_traversal(&graph, &request, &opts)?;
    debug!(
        elapsed = ?start.elapsed(),
        length = outcome.path.len(),
        cost = ?outcome.cost,
        "traversal_complete"
    );

    println!("{}", render(&outcome, cli.format)?);
    Ok(())
}
