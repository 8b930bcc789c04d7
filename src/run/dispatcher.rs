//! Dispatch of selected specification nodes to the execution engine
//!
//! A user-triggered action hands each selected specification to the engine
//! one at a time, in selection order. Dispatches share no state: each one
//! assembles its own descriptor and the engine derives its own artifact
//! file set from it.

use std::sync::Arc;

use tracing::{info, warn};

use crate::common::{Error, Result};
use crate::connector::Connector;
use crate::domain::{ModuleRegistry, Node, NodeKind, SettingsStore};
use crate::run::assembler::assemble;
use crate::run::descriptor::{ExecutionEngine, ExecutorMode, StatusLineHandle};

/// Whether the execute trigger should be active for a selection
///
/// True iff the selection is non-empty and every selected node is a
/// specification.
pub fn is_enabled(selection: &[Arc<Node>]) -> bool {
    !selection.is_empty()
        && selection
            .iter()
            .all(|node| node.kind() == NodeKind::Specification)
}

/// What happened to one selected node during a dispatch
#[derive(Debug)]
pub struct DispatchOutcome {
    /// Name of the specification the cycle ran for
    pub specification: String,
    /// `Ok` once the engine accepted the hand-off
    pub outcome: Result<()>,
}

/// Drives the assemble-and-execute cycle for selected nodes
///
/// All collaborators are injected at construction; the dispatcher itself
/// holds no mutable state.
pub struct Dispatcher {
    registry: Arc<dyn ModuleRegistry>,
    settings: Arc<dyn SettingsStore>,
    connector: Arc<dyn Connector>,
    engine: Arc<dyn ExecutionEngine>,
    status_line: StatusLineHandle,
}

impl Dispatcher {
    pub fn new(
        registry: Arc<dyn ModuleRegistry>,
        settings: Arc<dyn SettingsStore>,
        connector: Arc<dyn Connector>,
        engine: Arc<dyn ExecutionEngine>,
    ) -> Self {
        Self {
            registry,
            settings,
            connector,
            engine,
            status_line: StatusLineHandle::default(),
        }
    }

    /// Status line handed to every descriptor this dispatcher builds
    pub fn with_status_line(mut self, status_line: StatusLineHandle) -> Self {
        self.status_line = status_line;
        self
    }

    /// Run one full assemble-and-dispatch cycle per selected specification
    ///
    /// Non-specification nodes in the selection are skipped. A failure to
    /// resolve the runner entry point, or a refused hand-off, is recorded
    /// for that node and the remaining selections still proceed. A
    /// malformed tree aborts the whole dispatch: it is a data-integrity
    /// error no sibling can be trusted after.
    pub async fn dispatch(
        &self,
        selection: &[Arc<Node>],
        debug_mode: bool,
    ) -> Result<Vec<DispatchOutcome>> {
        let mode = if debug_mode {
            ExecutorMode::Debug
        } else {
            ExecutorMode::Run
        };

        let mut outcomes = Vec::new();
        for node in selection {
            if node.kind() != NodeKind::Specification {
                continue;
            }

            let assembled = assemble(
                node,
                self.registry.as_ref(),
                self.settings.as_ref(),
                self.connector.as_ref(),
                self.status_line.clone(),
            )
            .await;

            let mut descriptor = match assembled {
                Ok(descriptor) => descriptor,
                Err(err @ Error::MalformedTree { .. }) => return Err(err),
                Err(err) => {
                    warn!("skipping '{}': {err}", node.name());
                    outcomes.push(DispatchOutcome {
                        specification: node.name().to_string(),
                        outcome: Err(err),
                    });
                    continue;
                }
            };

            if debug_mode {
                descriptor.edit_before_run = true;
            }

            info!("dispatching '{}' in {mode} mode", descriptor.specification_name);
            let handed_off = self.engine.execute(descriptor, mode).await;
            if let Err(err) = &handed_off {
                warn!("engine refused '{}': {err}", node.name());
            }
            outcomes.push(DispatchOutcome {
                specification: node.name().to_string(),
                outcome: handed_off,
            });
        }

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Icon, LocalModule, ModuleSettings};
    use crate::run::descriptor::RunDescriptor;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedRegistry(Vec<LocalModule>);

    impl ModuleRegistry for FixedRegistry {
        fn modules(&self) -> Vec<LocalModule> {
            self.0.clone()
        }
    }

    struct FixedSettings;

    impl SettingsStore for FixedSettings {
        fn settings_for(&self, _module_name: &str) -> ModuleSettings {
            ModuleSettings::default()
        }
    }

    struct FixedConnector {
        fail: bool,
    }

    #[async_trait]
    impl Connector for FixedConnector {
        async fn resolve_runner_entry_point(&self) -> Result<String> {
            if self.fail {
                Err(Error::runner_resolution("server unreachable"))
            } else {
                Ok("com.example.Runner".to_string())
            }
        }
    }

    #[derive(Default)]
    struct RecordingEngine {
        launches: Mutex<Vec<(String, ExecutorMode, bool)>>,
    }

    #[async_trait]
    impl ExecutionEngine for RecordingEngine {
        async fn execute(&self, descriptor: RunDescriptor, mode: ExecutorMode) -> Result<()> {
            self.launches.lock().unwrap().push((
                descriptor.specification_name.clone(),
                mode,
                descriptor.edit_before_run,
            ));
            Ok(())
        }
    }

    fn tree() -> (Arc<Node>, Arc<Node>, Vec<Arc<Node>>) {
        let repo = Node::repository("Demo", Icon::default(), "uid", "url", "cls");
        let module = Node::module("demo-core", Icon::default(), "demo-core", &repo);
        let specs = vec![
            Node::specification("First", Icon::default(), false, &module),
            Node::specification("Second", Icon::default(), false, &module),
        ];
        (repo, module, specs)
    }

    fn dispatcher(connector_fails: bool, engine: Arc<RecordingEngine>) -> Dispatcher {
        Dispatcher::new(
            Arc::new(FixedRegistry(vec![LocalModule::new("demo-core", vec![])])),
            Arc::new(FixedSettings),
            Arc::new(FixedConnector {
                fail: connector_fails,
            }),
            engine,
        )
    }

    #[test]
    fn enablement_rejects_empty_selection() {
        assert!(!is_enabled(&[]));
    }

    #[test]
    fn enablement_rejects_mixed_selection() {
        let (repo, module, specs) = tree();
        assert!(!is_enabled(&[Arc::clone(&repo)]));
        assert!(!is_enabled(&[
            Arc::clone(&specs[0]),
            Arc::clone(&module)
        ]));
    }

    #[test]
    fn enablement_accepts_all_specifications() {
        let (_repo, _module, specs) = tree();
        assert!(is_enabled(&specs));
    }

    #[tokio::test]
    async fn dispatches_sequentially_in_selection_order() {
        let (_repo, _module, specs) = tree();
        let engine = Arc::new(RecordingEngine::default());
        let outcomes = dispatcher(false, Arc::clone(&engine))
            .dispatch(&specs, false)
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].specification, "First");
        assert_eq!(outcomes[1].specification, "Second");
        assert!(outcomes.iter().all(|o| o.outcome.is_ok()));

        let launches = engine.launches.lock().unwrap();
        assert_eq!(launches[0].0, "First");
        assert_eq!(launches[1].0, "Second");
        assert!(launches.iter().all(|l| l.1 == ExecutorMode::Run));
    }

    #[tokio::test]
    async fn debug_mode_forces_edit_before_run() {
        let (_repo, _module, specs) = tree();
        let engine = Arc::new(RecordingEngine::default());
        dispatcher(false, Arc::clone(&engine))
            .dispatch(&specs[..1], true)
            .await
            .unwrap();

        let launches = engine.launches.lock().unwrap();
        assert_eq!(launches[0].1, ExecutorMode::Debug);
        assert!(launches[0].2);
    }

    #[tokio::test]
    async fn non_specification_nodes_are_skipped() {
        let (repo, module, specs) = tree();
        let engine = Arc::new(RecordingEngine::default());
        let selection = vec![Arc::clone(&repo), Arc::clone(&module), Arc::clone(&specs[0])];
        let outcomes = dispatcher(false, Arc::clone(&engine))
            .dispatch(&selection, false)
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(engine.launches.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn runner_resolution_failure_is_recorded_per_node() {
        let (_repo, _module, specs) = tree();
        let engine = Arc::new(RecordingEngine::default());
        let outcomes = dispatcher(true, Arc::clone(&engine))
            .dispatch(&specs, false)
            .await
            .unwrap();

        // Both nodes got their own cycle; both failed independently.
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes
            .iter()
            .all(|o| matches!(o.outcome, Err(Error::RunnerResolution(_)))));
        assert!(engine.launches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_tree_aborts_the_whole_dispatch() {
        let repo = Node::repository("Demo", Icon::default(), "uid", "url", "cls");
        let orphan = Node::specification("Orphan", Icon::default(), false, &repo);
        let engine = Arc::new(RecordingEngine::default());
        let err = dispatcher(false, Arc::clone(&engine))
            .dispatch(&[orphan], false)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MalformedTree { .. }));
        assert!(engine.launches.lock().unwrap().is_empty());
    }
}
