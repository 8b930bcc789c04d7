//! Run assembly, artifact files and dispatch

pub mod assembler;
pub mod descriptor;
pub mod dispatcher;
pub mod files;

pub use assembler::assemble;
pub use descriptor::{ExecutionEngine, ExecutorMode, RunDescriptor, StatusLineHandle};
pub use dispatcher::{is_enabled, DispatchOutcome, Dispatcher};
pub use files::{ArtifactKind, FilesManager};
