//! Virtual filesystem for vfsh.
//!
//! The whole tree lives in memory as owned [`Node`]s:
//!
//! ```text
//! /
//! └── home/
//!     └── user/            # default home and working directory
//!         ├── documents/
//!         ├── projects/
//!         ├── README.md
//!         └── welcome.txt
//! ```
//!
//! [`VirtualFs`] is the only way to change it. Paths are resolved textually
//! (see [`path::resolve`]) before the tree is consulted.

mod error;
mod fs;
mod node;
pub mod path;

pub use error::{FsError, FsResult};
pub use fs::VirtualFs;
pub use node::{is_valid_name, Node, NodeKind, DIR_PERMISSIONS, FILE_PERMISSIONS, ROOT_NAME};
