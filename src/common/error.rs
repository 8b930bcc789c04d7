//! Error types for the spec runner core
//!
//! The taxonomy mirrors how failures propagate: tree-integrity problems are
//! fatal, runner resolution aborts a single dispatch, and artifact
//! filesystem problems are logged at the call site and never surface here.

use std::io;
use thiserror::Error;

use crate::domain::NodeKind;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the spec runner core
#[derive(Error, Debug)]
pub enum Error {
    // === Tree Integrity Errors ===
    #[error("node '{node}' has no enclosing {kind} node; the repository tree is malformed")]
    MalformedTree { node: String, kind: NodeKind },

    // === Module Resolution Errors ===
    #[error("no resolved local module for '{0}'; the run has no content root to put artifacts under")]
    UnresolvedModule(String),

    // === Runner Resolution Errors ===
    #[error("failed to resolve the runner entry point: {0}")]
    RunnerResolution(String),

    // === Configuration Errors ===
    #[error("failed to read configuration file '{path}': {error}")]
    ConfigRead { path: String, error: String },

    #[error("invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a malformed-tree error for a missing ancestor kind
    pub fn malformed_tree(node: &str, kind: NodeKind) -> Self {
        Self::MalformedTree {
            node: node.to_string(),
            kind,
        }
    }

    /// Create a runner resolution error
    pub fn runner_resolution(message: impl Into<String>) -> Self {
        Self::RunnerResolution(message.into())
    }
}
