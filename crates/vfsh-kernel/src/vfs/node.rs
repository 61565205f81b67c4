//! Tree nodes.
//!
//! Directories own their children outright: no parent pointers, no shared
//! nodes. Anything that needs "where am I" carries a segment list instead.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// Name of the root directory.
pub const ROOT_NAME: &str = "/";

/// Display permissions for directories.
pub const DIR_PERMISSIONS: &str = "drwxr-xr-x";

/// Display permissions for files.
pub const FILE_PERMISSIONS: &str = "-rw-r--r--";

/// File or directory payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File { content: String },
    Directory { children: BTreeMap<String, Node> },
}

/// One entry in the virtual filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) modified_at: DateTime<Utc>,
}

impl Node {
    /// Create a node stamped with the current time.
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            kind,
            created_at: now,
            modified_at: now,
        }
    }

    /// Create a file node.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(
            name,
            NodeKind::File {
                content: content.into(),
            },
        )
    }

    /// Create an empty directory node.
    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(
            name,
            NodeKind::Directory {
                children: BTreeMap::new(),
            },
        )
    }

    /// Create the root directory.
    pub fn root() -> Self {
        Self::directory(ROOT_NAME)
    }

    /// Rebuild a node with explicit timestamps (used when restoring state).
    pub(crate) fn restored(
        name: String,
        kind: NodeKind,
        created_at: DateTime<Utc>,
        modified_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            kind,
            created_at,
            modified_at,
        }
    }

    /// Builder-style child insertion, for seed trees.
    ///
    /// A no-op on files. Replaces an existing child of the same name.
    pub fn with_child(mut self, child: Node) -> Self {
        if let NodeKind::Directory { children } = &mut self.kind {
            children.insert(child.name.clone(), child);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// File content, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Children, `None` for files.
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match &mut self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().and_then(|c| c.get(name))
    }

    /// `drwxr-xr-x` or `-rw-r--r--`.
    pub fn permissions(&self) -> &'static str {
        if self.is_dir() {
            DIR_PERMISSIONS
        } else {
            FILE_PERMISSIONS
        }
    }

    /// Content length in bytes (0 for directories).
    pub fn size(&self) -> usize {
        self.content().map_or(0, str::len)
    }

    pub(crate) fn touch(&mut self) {
        self.modified_at = Utc::now();
    }

    /// Children sorted directories-first, then by name.
    pub fn sorted_children(&self) -> Vec<&Node> {
        let mut children: Vec<&Node> = self
            .children()
            .map(|c| c.values().collect())
            .unwrap_or_default();
        children.sort_by(|a, b| b.is_dir().cmp(&a.is_dir()).then_with(|| a.name.cmp(&b.name)));
        children
    }
}

/// True if `name` can label a non-root node.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && name != "." && name != ".."
}
