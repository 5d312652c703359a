use citygraph_core::format::OutputFormat;
use citygraph_core::graph::{Algorithm, NeighborOrder, UnreachedTarget};

/// Parse algorithm name from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse neighbor order from string
pub fn parse_neighbor_order(s: &str) -> std::result::Result<NeighborOrder, String> {
    s.parse::<NeighborOrder>().map_err(|e| e.to_string())
}

/// Parse unreached-target policy from string
pub fn parse_unreached_target(s: &str) -> std::result::Result<UnreachedTarget, String> {
    s.parse::<UnreachedTarget>().map_err(|e| e.to_string())
}
