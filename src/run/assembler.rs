//! Run descriptor assembly
//!
//! Pure transformation from a selected specification node to a complete
//! [`RunDescriptor`]: no filesystem access, no stored state, so it tests
//! against entirely synthetic collaborators.

use std::sync::Arc;

use crate::common::{is_blank, Result};
use crate::connector::Connector;
use crate::domain::{ModuleRegistry, ModuleSettings, Node, NodeKind, SettingsStore};
use crate::run::descriptor::{RunDescriptor, StatusLineHandle};

/// Build the descriptor for one specification node
///
/// Resolves the enclosing module and repository nodes (a missing one is a
/// malformed tree and aborts), matches the local build module by exact
/// name (no match leaves `module` unset rather than failing), copies the
/// repository and specification identity, and asks the connector for the
/// runner entry point (failure aborts this node only).
pub async fn assemble(
    spec_node: &Arc<Node>,
    registry: &dyn ModuleRegistry,
    settings: &dyn SettingsStore,
    connector: &dyn Connector,
    status_line: StatusLineHandle,
) -> Result<RunDescriptor> {
    let module_node = spec_node.require_ancestor(NodeKind::Module)?;
    let repository_node = spec_node.require_ancestor(NodeKind::Repository)?;

    let module_name = module_node.module_name().unwrap_or_default();
    let module = registry.find(module_name);

    let runner_class = connector.resolve_runner_entry_point().await?;

    let module_settings = settings.settings_for(module_name);

    Ok(RunDescriptor {
        module,
        repository_uid: repository_node.uid().unwrap_or_default().to_string(),
        repository_url: repository_node.base_test_url().unwrap_or_default().to_string(),
        repository_class: repository_node
            .type_class_name()
            .unwrap_or_default()
            .to_string(),
        repository_name: repository_node.name().to_string(),
        specification_name: spec_node.name().to_string(),
        current_version: spec_node.using_current_version().unwrap_or_default(),
        runner_class,
        status_line,
        selected_node: Arc::clone(spec_node),
        program_parameters: program_parameters(&module_settings),
        show_console_on_std_out: true,
        show_console_on_std_err: true,
        temporary: false,
        edit_before_run: true,
        activate_output_panel: false,
    })
}

/// Program-parameter string for the runner
///
/// Blank SUT class means no parameters. Otherwise `-f <class>`, with
/// `;<args>` appended when the argument string is non-blank.
fn program_parameters(settings: &ModuleSettings) -> String {
    if is_blank(&settings.sud_class_name) {
        return String::new();
    }

    let mut parameters = format!("-f {}", settings.sud_class_name);
    if !is_blank(&settings.sud_args) {
        parameters.push(';');
        parameters.push_str(&settings.sud_args);
    }
    parameters
}
