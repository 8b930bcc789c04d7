//! Module-scoped runner settings
//!
//! Settings are plain values; persistence belongs to the embedding
//! application, which supplies them through [`SettingsStore`].

use serde::{Deserialize, Serialize};

/// Per-module settings for running specifications
///
/// `project`, `sud`, `user` and `password` identify the remote project and
/// system under test on the repository server; they are opaque to this core
/// and carried for the settings editor collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSettings {
    /// Whether running specifications is enabled for this module
    pub enabled: bool,
    /// Remote project the module is bound to
    pub project: String,
    /// Name of the system under test on the repository server
    pub sud: String,
    /// Credentials for the repository server
    pub user: String,
    pub password: String,
    /// Fixture factory class of the system under test; blank means none
    pub sud_class_name: String,
    /// Arguments handed to the fixture factory; blank means none
    pub sud_args: String,
}

/// Capability supplying the settings record for a module
///
/// Backed by whatever key/value storage the embedding application uses.
pub trait SettingsStore: Send + Sync {
    /// Settings for the module with the given name
    ///
    /// Unknown modules yield the default (disabled, everything blank).
    fn settings_for(&self, module_name: &str) -> ModuleSettings;
}
