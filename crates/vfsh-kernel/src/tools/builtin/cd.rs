//! cd: Change the working directory.

use vfsh_types::{Output, Sentinel};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Cd tool: change directory. Emits the new path for the host's prompt.
pub struct Cd;

impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change directory")
            .usage("cd <directory>")
            .example("Go home", "cd")
            .example("Go up one level", "cd ..")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        let target = match args.raw() {
            [] => "~",
            [target] => target.as_str(),
            _ => return Output::error("cd: too many arguments"),
        };

        match ctx.fs.change_directory(target) {
            Ok(path) => Output::system(Sentinel::ChangeDirectory(path)),
            Err(e) => Output::error(format!("cd: {target}: {e}")),
        }
    }
}
