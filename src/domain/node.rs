//! Repository tree nodes
//!
//! The tree mirrors the remote repository hierarchy: repositories at the
//! top, modules beneath them, specifications beneath modules (possibly
//! nested). Nodes are identity-compared (`Arc::ptr_eq`); siblings may share
//! a display name. Each node holds a weak back-reference to its parent, so
//! the UI layer owning the tree controls the lifetime.

use std::fmt;
use std::sync::{Arc, Weak};

use crate::common::{Error, Result};

/// Opaque presentational handle attached to a node
///
/// Carried for the UI layer and never inspected by the core.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Icon(pub String);

/// Tag identifying a node's position in the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Repository,
    Module,
    Specification,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repository => write!(f, "repository"),
            Self::Module => write!(f, "module"),
            Self::Specification => write!(f, "specification"),
        }
    }
}

/// Per-kind payload of a node
#[derive(Debug, Clone)]
pub enum NodeData {
    /// A remote collection of versioned specifications
    Repository {
        /// Stable unique identifier of the repository
        uid: String,
        /// Base URL the repository serves specifications from
        base_test_url: String,
        /// Class name of the remote repository implementation
        type_class_name: String,
    },
    /// A build module the specifications beneath it run against
    Module {
        /// Name of the locally-available build module, matched exactly
        module_name: String,
    },
    /// An executable acceptance-test document
    Specification {
        /// Run against the latest revision instead of a pinned one
        using_current_version: bool,
    },
}

/// A node of the repository view tree
#[derive(Debug)]
pub struct Node {
    name: String,
    icon: Icon,
    parent: Option<Weak<Node>>,
    data: NodeData,
}

impl Node {
    /// Create a repository node at the top of the hierarchy
    pub fn repository(
        name: impl Into<String>,
        icon: Icon,
        uid: impl Into<String>,
        base_test_url: impl Into<String>,
        type_class_name: impl Into<String>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            icon,
            parent: None,
            data: NodeData::Repository {
                uid: uid.into(),
                base_test_url: base_test_url.into(),
                type_class_name: type_class_name.into(),
            },
        })
    }

    /// Create a module node beneath `parent`
    pub fn module(
        name: impl Into<String>,
        icon: Icon,
        module_name: impl Into<String>,
        parent: &Arc<Node>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            icon,
            parent: Some(Arc::downgrade(parent)),
            data: NodeData::Module {
                module_name: module_name.into(),
            },
        })
    }

    /// Create a specification node beneath `parent`
    pub fn specification(
        name: impl Into<String>,
        icon: Icon,
        using_current_version: bool,
        parent: &Arc<Node>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            icon,
            parent: Some(Arc::downgrade(parent)),
            data: NodeData::Specification {
                using_current_version,
            },
        })
    }

    /// Display name of the node
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Presentational handle, opaque to the core
    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// The node's kind tag, derived from its payload
    pub fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Repository { .. } => NodeKind::Repository,
            NodeData::Module { .. } => NodeKind::Module,
            NodeData::Specification { .. } => NodeKind::Specification,
        }
    }

    /// Per-kind payload
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    /// Owning parent, `None` for the root or when the tree was dropped
    pub fn parent(&self) -> Option<Arc<Node>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    /// Repository uid, when this is a repository node
    pub fn uid(&self) -> Option<&str> {
        match &self.data {
            NodeData::Repository { uid, .. } => Some(uid),
            _ => None,
        }
    }

    /// Repository base URL, when this is a repository node
    pub fn base_test_url(&self) -> Option<&str> {
        match &self.data {
            NodeData::Repository { base_test_url, .. } => Some(base_test_url),
            _ => None,
        }
    }

    /// Remote repository implementation class, when this is a repository node
    pub fn type_class_name(&self) -> Option<&str> {
        match &self.data {
            NodeData::Repository {
                type_class_name, ..
            } => Some(type_class_name),
            _ => None,
        }
    }

    /// Local build module name, when this is a module node
    pub fn module_name(&self) -> Option<&str> {
        match &self.data {
            NodeData::Module { module_name } => Some(module_name),
            _ => None,
        }
    }

    /// Current-version flag, when this is a specification node
    pub fn using_current_version(&self) -> Option<bool> {
        match self.data {
            NodeData::Specification {
                using_current_version,
            } => Some(using_current_version),
            _ => None,
        }
    }

    /// Nearest node of the requested kind, starting from this node and
    /// walking `parent` links upward
    ///
    /// Returns `None` when the walk reaches the root without a match.
    pub fn ancestor(self: &Arc<Self>, kind: NodeKind) -> Option<Arc<Node>> {
        let mut current = Arc::clone(self);
        loop {
            if current.kind() == kind {
                return Some(current);
            }
            current = current.parent()?;
        }
    }

    /// Like [`ancestor`](Self::ancestor), but a missing ancestor is a
    /// malformed tree: every specification sits beneath exactly one module
    /// and one repository, so absence is a data-integrity error that must
    /// abort the dispatch.
    pub fn require_ancestor(self: &Arc<Self>, kind: NodeKind) -> Result<Arc<Node>> {
        self.ancestor(kind)
            .ok_or_else(|| Error::malformed_tree(&self.name, kind))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind())
    }
}
