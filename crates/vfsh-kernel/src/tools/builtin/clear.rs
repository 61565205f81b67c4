//! clear: Ask the host to clear the screen.

use vfsh_types::{Output, Sentinel};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

pub struct Clear;

impl Tool for Clear {
    fn name(&self) -> &str {
        "clear"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("clear", "Clear the terminal screen").alias("cls")
    }

    fn execute(&self, _args: &ToolArgs, _ctx: &mut ExecContext<'_>) -> Output {
        Output::system(Sentinel::ClearScreen)
    }
}
