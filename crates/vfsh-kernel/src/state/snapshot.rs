//! Serialized form of a [`VirtualFs`].
//!
//! ```json
//! {
//!   "version": 1,
//!   "root": {
//!     "name": "/", "type": "directory", "permissions": "drwxr-xr-x",
//!     "createdAt": "2026-01-01T00:00:00.123456789Z",
//!     "modifiedAt": "2026-01-01T00:00:00.123456789Z",
//!     "children": [{ "key": "home", "value": { ... } }]
//!   },
//!   "currentPath": ["home", "user"]
//! }
//! ```
//!
//! Children are a list of key/value pairs so that the format never depends
//! on map ordering. Anything structurally impossible in the in-memory model
//! is rejected on restore rather than patched up.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vfs::{is_valid_name, Node, NodeKind, VirtualFs, ROOT_NAME};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Why a stored snapshot could not be restored.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
    #[error("corrupt snapshot at {path}: {reason}")]
    Corrupt { path: String, reason: String },
}

/// Node type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoredType {
    File,
    Directory,
}

/// One node as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredNode {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: StoredType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Informational; recomputed from the type on restore.
    #[serde(default)]
    pub permissions: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<StoredChild>>,
}

/// A `{key, value}` child entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredChild {
    pub key: String,
    pub value: StoredNode,
}

/// The persisted form of a whole filesystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    pub root: StoredNode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_path: Option<Vec<String>>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

impl From<&Node> for StoredNode {
    fn from(node: &Node) -> Self {
        let (node_type, content, children) = match node.kind() {
            NodeKind::File { content } => (StoredType::File, Some(content.clone()), None),
            NodeKind::Directory { children } => (
                StoredType::Directory,
                None,
                Some(
                    children
                        .iter()
                        .map(|(key, child)| StoredChild {
                            key: key.clone(),
                            value: child.into(),
                        })
                        .collect(),
                ),
            ),
        };
        Self {
            name: node.name().to_string(),
            node_type,
            content,
            permissions: node.permissions().to_string(),
            created_at: node.created_at(),
            modified_at: node.modified_at(),
            children,
        }
    }
}

impl From<&VirtualFs> for Snapshot {
    fn from(fs: &VirtualFs) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            root: fs.root().into(),
            current_path: Some(fs.cwd().to_vec()),
        }
    }
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild the filesystem.
    ///
    /// A missing current path means `home`; a dangling one is cut back to
    /// its deepest existing directory.
    pub fn restore(self, home: Vec<String>) -> Result<VirtualFs, SnapshotError> {
        if self.version > SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(self.version));
        }
        if self.root.node_type != StoredType::Directory {
            return Err(corrupt("/", "root is not a directory"));
        }
        let root = self.root.into_node("")?;
        let cwd = self.current_path.unwrap_or_else(|| home.clone());
        VirtualFs::new(root, cwd, home).map_err(|e| corrupt("/", e.to_string()))
    }
}

impl StoredNode {
    /// `path` is the parent's display path prefix ("" for the root).
    fn into_node(self, parent: &str) -> Result<Node, SnapshotError> {
        let is_root = parent.is_empty();
        let here = if is_root {
            ROOT_NAME.to_string()
        } else {
            format!("{}/{}", parent.trim_end_matches('/'), self.name)
        };
        if !is_root && !is_valid_name(&self.name) {
            return Err(corrupt(&here, format!("invalid name {:?}", self.name)));
        }

        let kind = match self.node_type {
            StoredType::File => {
                if self.children.is_some() {
                    return Err(corrupt(&here, "file has children"));
                }
                NodeKind::File {
                    content: self.content.unwrap_or_default(),
                }
            }
            StoredType::Directory => {
                if self.content.is_some() {
                    return Err(corrupt(&here, "directory has content"));
                }
                let mut children = std::collections::BTreeMap::new();
                for StoredChild { key, value } in self.children.unwrap_or_default() {
                    if key != value.name {
                        return Err(corrupt(
                            &here,
                            format!("child key {key:?} does not match name {:?}", value.name),
                        ));
                    }
                    if children.contains_key(&key) {
                        return Err(corrupt(&here, format!("duplicate child {key:?}")));
                    }
                    let child = value.into_node(&here)?;
                    children.insert(key, child);
                }
                NodeKind::Directory { children }
            }
        };

        let name = if is_root { ROOT_NAME.to_string() } else { self.name };
        Ok(Node::restored(name, kind, self.created_at, self.modified_at))
    }
}

fn corrupt(path: &str, reason: impl Into<String>) -> SnapshotError {
    SnapshotError::Corrupt {
        path: path.to_string(),
        reason: reason.into(),
    }
}
