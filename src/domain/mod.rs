//! Domain model for the repository tree and module-scoped settings

pub mod node;
pub mod registry;
pub mod settings;

pub use node::{Icon, Node, NodeData, NodeKind};
pub use registry::{LocalModule, ModuleRegistry};
pub use settings::{ModuleSettings, SettingsStore};
