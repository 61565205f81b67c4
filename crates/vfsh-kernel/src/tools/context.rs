//! Execution context for tools.

use crate::kernel::KernelConfig;
use crate::seed::SeedProvider;
use crate::session::Session;
use crate::tools::ToolRegistry;
use crate::vfs::VirtualFs;

/// Everything a tool may read or change while it runs.
///
/// Borrowed from the kernel for the duration of one command.
pub struct ExecContext<'a> {
    /// The filesystem. Tools mutate it directly; the kernel persists after.
    pub fs: &'a mut VirtualFs,
    /// Session history (read-only to tools).
    pub session: &'a Session,
    /// Registry, for `help`.
    pub tools: &'a ToolRegistry,
    /// Seed, for `reset`.
    pub seed: &'a dyn SeedProvider,
    /// Kernel configuration (routes, user name).
    pub config: &'a KernelConfig,
}

impl<'a> ExecContext<'a> {
    pub fn new(
        fs: &'a mut VirtualFs,
        session: &'a Session,
        tools: &'a ToolRegistry,
        seed: &'a dyn SeedProvider,
        config: &'a KernelConfig,
    ) -> Self {
        Self {
            fs,
            session,
            tools,
            seed,
            config,
        }
    }
}
