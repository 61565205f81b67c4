//! reset: Restore the filesystem to its seed state.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Reset tool: discard every change and start from a fresh seed tree.
pub struct Reset;

impl Tool for Reset {
    fn name(&self) -> &str {
        "reset"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("reset", "Reset the filesystem to its initial state").usage("reset")
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        ctx.fs.replace(ctx.seed.seed());
        Output::success("Filesystem reset to initial state")
    }
}
