//! rm: Remove files and directories.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::FsError;

/// Rm tool: remove files and directories.
pub struct Rm;

impl Tool for Rm {
    fn name(&self) -> &str {
        "rm"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rm", "Remove files or directories")
            .usage("rm [-r] [-f] <path>...")
            .example("Remove a file", "rm temp.txt")
            .example("Remove directory recursively", "rm -rf build")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        if let Some(err) = args.reject_unknown("rm", &["r", "R", "f", "recursive", "force"]) {
            return err;
        }
        let paths = args.positional();
        if paths.is_empty() {
            return Output::error("rm: missing operand");
        }

        let recursive = args.has_flag("r") || args.has_flag("R") || args.has_flag("recursive");
        let force = args.has_flag("f") || args.has_flag("force");

        let mut errors = Vec::new();
        for path in paths {
            let needs_recursive = match ctx.fs.lookup(path) {
                None if force => continue,
                None => {
                    errors.push(format!("rm: cannot remove '{path}': {}", FsError::NotFound));
                    continue;
                }
                Some(node) => node.children().is_some_and(|c| !c.is_empty()),
            };
            if needs_recursive && !recursive {
                errors.push(format!("rm: cannot remove '{path}': {}", FsError::IsADirectory));
                continue;
            }
            if let Err(e) = ctx.fs.delete_node(path) {
                errors.push(format!("rm: cannot remove '{path}': {e}"));
            }
        }

        if errors.is_empty() {
            Output::empty()
        } else {
            Output::error(errors.join("\n"))
        }
    }
}
