//! Test harness for running a single tool against a seeded filesystem.

use vfsh_types::Output;

use super::{register_builtins, ExecContext, Tool, ToolArgs, ToolRegistry};
use crate::kernel::KernelConfig;
use crate::seed::{DefaultSeed, SeedProvider};
use crate::session::Session;
use crate::vfs::VirtualFs;

/// Owns everything an [`ExecContext`] borrows.
pub struct Harness {
    pub fs: VirtualFs,
    pub session: Session,
    pub tools: ToolRegistry,
    pub seed: DefaultSeed,
    pub config: KernelConfig,
}

impl Harness {
    /// Default seed (`/home/user`, cwd at home) and all builtins.
    pub fn new() -> Self {
        let config = KernelConfig::isolated();
        let seed = DefaultSeed::new(config.user.as_str());
        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools, &config);
        Self {
            fs: seed.seed(),
            session: Session::new(config.history_limit),
            tools,
            seed,
            config,
        }
    }

    pub fn run(&mut self, tool: &dyn Tool, args: &[&str]) -> Output {
        let args: ToolArgs = args.iter().copied().collect();
        let mut ctx = ExecContext::new(
            &mut self.fs,
            &self.session,
            &self.tools,
            &self.seed,
            &self.config,
        );
        tool.execute(&args, &mut ctx)
    }
}
