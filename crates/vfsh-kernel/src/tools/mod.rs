//! Tool system for vfsh.
//!
//! Every command is a tool. The registry is closed over at kernel start:
//! builtins plus one navigation tool per configured route.
//!
//! # Architecture
//!
//! ```text
//! ToolRegistry
//! ├── Builtins (ls, cd, cat, ...)
//! ├── Route tools (home, about, contact, ...)
//! └── Hidden tools (sudo)
//! ```

mod builtin;
mod context;
mod registry;
#[cfg(test)]
pub(crate) mod testing;
mod traits;

pub use builtin::{register_builtins, THEMES};
pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::{Example, Tool, ToolArgs, ToolSchema};
