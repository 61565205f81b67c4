//! vfsh-kernel: an in-memory filesystem with a command shell on top.
//!
//! This crate provides:
//!
//! - **VFS**: the node tree, path resolution and filesystem operations
//! - **State**: the storage port, JSON snapshots and ordered background saves
//! - **Tools**: the `Tool` trait, registry and builtin commands
//! - **Session**: command history and autocompletion
//! - **Kernel**: dispatch of input lines, tying the above together
//! - **Config** and **Paths**: TOML configuration and XDG locations

pub mod config;
pub mod kernel;
pub mod paths;
pub mod seed;
pub mod session;
pub mod state;
pub mod tools;
pub mod vfs;

pub use config::{RouteConfig, ShellConfig};
pub use kernel::{parse, Kernel, KernelConfig, Route};
pub use seed::{DefaultSeed, SeedProvider};
pub use session::{Completion, HistoryDirection, Session};
pub use state::{FileStorage, MemoryStorage, Persister, Storage, StorageError};
pub use vfs::{FsError, FsResult, Node, NodeKind, VirtualFs};

// Output types, so embedders need only this crate.
pub use vfsh_types::{Content, EntryType, Output, OutputKind, OutputNode, Sentinel};
