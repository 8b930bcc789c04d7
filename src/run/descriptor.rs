//! Run descriptor and the execution engine seam

use std::sync::Arc;

use async_trait::async_trait;

use crate::common::Result;
use crate::domain::{LocalModule, Node};

/// Opaque handle to the UI status line
///
/// Carried through to the execution engine untouched so it can report
/// progress where the triggering view expects it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLineHandle(pub String);

/// How a run is launched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorMode {
    /// Normal execution
    Run,
    /// Execution under a debugger; forces the edit-before-run dialog
    Debug,
}

impl std::fmt::Display for ExecutorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Run => write!(f, "run"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

/// Fully resolved parameters for one execution of a specification
///
/// Created fresh per dispatch, never mutated after hand-off, never
/// persisted. The dispatch that built it owns it exclusively until the
/// engine takes it over.
#[derive(Debug, Clone)]
pub struct RunDescriptor {
    /// Resolved local build module; `None` when no registry module matches
    /// the tree's module node, which surfaces later as a launch failure
    pub module: Option<LocalModule>,
    /// Stable unique identifier of the repository
    pub repository_uid: String,
    /// Base URL of the repository
    pub repository_url: String,
    /// Class name of the remote repository implementation
    pub repository_class: String,
    /// Display name of the repository
    pub repository_name: String,
    /// Name of the specification to execute
    pub specification_name: String,
    /// Run the latest revision instead of a pinned one
    pub current_version: bool,
    /// Entry-point class name of the external runner
    pub runner_class: String,
    /// Status line the engine reports progress to
    pub status_line: StatusLineHandle,
    /// The tree node this run was triggered from
    pub selected_node: Arc<Node>,
    /// Program parameters for the runner; see the assembler for the format
    pub program_parameters: String,
    /// Capture stdout into the console
    pub show_console_on_std_out: bool,
    /// Capture stderr into the console
    pub show_console_on_std_err: bool,
    /// Runs are named and retained, never temporary
    pub temporary: bool,
    /// Show the run configuration dialog before launching
    pub edit_before_run: bool,
    /// Bring the output panel to front when the run starts
    pub activate_output_panel: bool,
}

/// The external test-execution engine
///
/// Opaque to this core: it receives a fully-built descriptor and owns
/// everything from launch onwards, including cancellation and timeouts.
/// `execute` returns once the hand-off is accepted; the engine may keep
/// running asynchronously and this core never awaits its completion.
#[async_trait]
pub trait ExecutionEngine: Send + Sync {
    /// Hand a descriptor over for execution in the given mode
    async fn execute(&self, descriptor: RunDescriptor, mode: ExecutorMode) -> Result<()>;
}
