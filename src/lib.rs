//! Spec Runner - orchestration core for remote acceptance-test execution
//!
//! This library resolves a specification selected from a hierarchical
//! repository tree, assembles a complete run descriptor for it, manages the
//! on-disk artifact files a run produces and consumes, and hands the
//! descriptor off to an external execution engine.
//!
//! The UI that renders the tree, the settings storage, the HTTP repository
//! client and the execution engine itself are external collaborators,
//! injected behind the traits in [`connector`], [`domain`] and [`run`].

pub mod common;
pub mod connector;
pub mod domain;
pub mod run;

// Re-export commonly used types
pub use common::{Error, Result};
pub use connector::Connector;
pub use domain::{ModuleRegistry, Node, NodeKind, SettingsStore};
pub use run::{Dispatcher, ExecutionEngine, ExecutorMode, FilesManager, RunDescriptor};
