//! Error types and exit codes for citygraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad arguments, missing stdin input)
//! - 3: Data error (missing file, malformed JSON or TOML)
//! - 4: Traversal error (unknown node, broken parent chain)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the citygraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad arguments or input (2)
    Usage = 2,
    /// Data error - missing or malformed input file (3)
    Data = 3,
    /// Traversal error - lookup failure inside an algorithm (4)
    Traversal = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading or traversing a graph
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("Command is incorrect: {0}")]
    BadArguments(String),

    #[error("missing input: expected {what} on standard input")]
    MissingInput { what: String },

    // Data errors (exit code 3)
    #[error("File not found: {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("JSON Deserialization error: {reason}")]
    Deserialization { reason: String },

    // Traversal errors (exit code 4)
    #[error("Vertex not found in dictionary: {id}")]
    UnknownNode { id: String },

    #[error("no parent recorded for {node} while reconstructing path")]
    MissingParentLink { node: String },

    #[error("parent links form a cycle through {node} while reconstructing path")]
    ParentCycle { node: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error: {0}")]
    Other(String),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Deserialization {
            reason: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(err: toml::de::Error) -> Self {
        GraphError::Deserialization {
            reason: err.to_string(),
        }
    }
}

impl GraphError {
    /// Create an error for a node with no adjacency entry
    pub fn unknown_node(id: impl Into<String>) -> Self {
        GraphError::UnknownNode { id: id.into() }
    }

    /// Create an error for a broken parent chain
    pub fn missing_parent(node: impl Into<String>) -> Self {
        GraphError::MissingParentLink { node: node.into() }
    }

    /// Create an error for a parent chain that loops back on itself
    pub fn parent_cycle(node: impl Into<String>) -> Self {
        GraphError::ParentCycle { node: node.into() }
    }

    /// Create an error for unreadable or mis-shaped input data
    pub fn deserialization(reason: impl std::fmt::Display) -> Self {
        GraphError::Deserialization {
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::BadArguments(_) | GraphError::MissingInput { .. } => ExitCode::Usage,

            GraphError::FileNotFound { .. } | GraphError::Deserialization { .. } => ExitCode::Data,

            GraphError::UnknownNode { .. }
            | GraphError::MissingParentLink { .. }
            | GraphError::ParentCycle { .. } => ExitCode::Traversal,

            GraphError::Io(_) | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::BadArguments(_) => "bad_arguments",
            GraphError::MissingInput { .. } => "missing_input",
            GraphError::FileNotFound { .. } => "file_not_found",
            GraphError::Deserialization { .. } => "deserialization_error",
            GraphError::UnknownNode { .. } => "unknown_node",
            GraphError::MissingParentLink { .. } => "missing_parent_link",
            GraphError::ParentCycle { .. } => "parent_cycle",
            GraphError::Io(_) => "io_error",
            GraphError::Other(_) => "unclassified",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for citygraph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_per_kind() {
        assert_eq!(
            GraphError::BadArguments("x".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GraphError::FileNotFound {
                path: PathBuf::from("nope.json")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(GraphError::unknown_node("Z").exit_code(), ExitCode::Traversal);
        assert_eq!(
            GraphError::missing_parent("Z").exit_code(),
            ExitCode::Traversal
        );
        assert_eq!(GraphError::parent_cycle("B").exit_code(), ExitCode::Traversal);
        assert_eq!(GraphError::parent_cycle("B").error_type(), "parent_cycle");
        assert_eq!(GraphError::Other("boom".into()).exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_messages_keep_console_wording() {
        let err = GraphError::unknown_node("Paris");
        assert_eq!(err.to_string(), "Vertex not found in dictionary: Paris");

        let err = GraphError::deserialization("trailing comma");
        assert!(err.to_string().starts_with("JSON Deserialization error"));
    }

    #[test]
    fn test_serde_json_error_maps_to_deserialization() {
        let err: GraphError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.error_type(), "deserialization_error");
    }

    #[test]
    fn test_to_json_envelope() {
        let json = GraphError::missing_parent("C").to_json();
        assert_eq!(json["error"]["code"], 4);
        assert_eq!(json["error"]["type"], "missing_parent_link");
        assert!(json["error"]["message"].as_str().unwrap().contains('C'));
    }
}
