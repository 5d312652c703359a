use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::PathBuf;

/// Get a Command for citygraph
pub fn citygraph() -> Command {
    cargo_bin_cmd!("citygraph")
}

/// Path to a checked-in fixture under `tests/fixtures`
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
