//! sudo: There is no superuser here.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Hidden tool: never listed or completed, still dispatchable.
pub struct Sudo;

impl Tool for Sudo {
    fn name(&self) -> &str {
        "sudo"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("sudo", "Execute a command as superuser").hidden()
    }

    fn execute(&self, args: &ToolArgs, _ctx: &mut ExecContext<'_>) -> Output {
        if args.raw().join(" ").starts_with("rm -rf /") {
            Output::warning("Nice try! This filesystem lives in memory and has no root to burn.")
        } else {
            Output::error("sudo: permission denied. This incident will be reported.")
        }
    }
}
