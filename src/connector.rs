//! Connector to the remote test-execution backend
//!
//! The connector knows how the external engine is invoked for a given
//! repository server; this core only asks it for the entry point to launch.

use async_trait::async_trait;

use crate::common::Result;

/// Capability resolving how the external execution engine is invoked
#[async_trait]
pub trait Connector: Send + Sync {
    /// Fully-qualified class name of the runner entry point
    ///
    /// Failure maps to [`Error::RunnerResolution`](crate::Error) and aborts
    /// the dispatch of the node being assembled, leaving sibling selections
    /// untouched.
    async fn resolve_runner_entry_point(&self) -> Result<String>;
}
