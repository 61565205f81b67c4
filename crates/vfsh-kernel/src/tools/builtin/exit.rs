//! exit: Say goodbye; the host decides what leaving means.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

pub struct Exit;

impl Tool for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("exit", "Exit the terminal")
            .alias("quit")
            .alias("bye")
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        Output::info(format!(
            "Goodbye from {}! Your files will be here next time.",
            ctx.config.name
        ))
    }
}
