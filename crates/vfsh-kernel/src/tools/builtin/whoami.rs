//! whoami: Print the current user name.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

pub struct Whoami;

impl Tool for Whoami {
    fn name(&self) -> &str {
        "whoami"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("whoami", "Print the current user name")
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        Output::info(ctx.config.user.clone())
    }
}
