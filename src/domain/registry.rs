//! Locally-available build modules
//!
//! The embedding application enumerates its build modules; a run resolves
//! its module by exact name equality against a tree module node.

use std::path::PathBuf;

/// A build module known to the embedding application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalModule {
    /// Module name, matched exactly against the tree's module nodes
    pub name: String,
    /// Content roots of the module; run artifacts live under the first one
    pub content_roots: Vec<PathBuf>,
}

impl LocalModule {
    pub fn new(name: impl Into<String>, content_roots: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            content_roots,
        }
    }

    /// First content root, the anchor for the run artifact directory
    pub fn first_content_root(&self) -> Option<&PathBuf> {
        self.content_roots.first()
    }
}

/// Capability enumerating the locally-available build modules
pub trait ModuleRegistry: Send + Sync {
    /// All modules, in no particular order
    fn modules(&self) -> Vec<LocalModule>;

    /// The module whose name equals `name` exactly, if any
    ///
    /// No fuzzy matching: a tree module node that names a module absent
    /// from the registry simply resolves to `None`.
    fn find(&self, name: &str) -> Option<LocalModule> {
        self.modules().into_iter().find(|module| module.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRegistry(Vec<LocalModule>);

    impl ModuleRegistry for FixedRegistry {
        fn modules(&self) -> Vec<LocalModule> {
            self.0.clone()
        }
    }

    #[test]
    fn find_matches_exactly() {
        let registry = FixedRegistry(vec![
            LocalModule::new("demo-core", vec![PathBuf::from("/p/demo-core")]),
            LocalModule::new("demo", vec![PathBuf::from("/p/demo")]),
        ]);

        assert_eq!(registry.find("demo").unwrap().name, "demo");
        assert!(registry.find("demo-cor").is_none());
        assert!(registry.find("DEMO").is_none());
    }
}
