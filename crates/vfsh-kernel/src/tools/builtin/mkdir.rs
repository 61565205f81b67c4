//! mkdir: Create directories.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::{path, FsError, FsResult, VirtualFs};

/// Mkdir tool: create directories.
pub struct Mkdir;

impl Tool for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mkdir", "Create a directory")
            .usage("mkdir [-p] <directory>...")
            .example("Create a directory", "mkdir notes")
            .example("Create with parents", "mkdir -p a/b/c")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        if let Some(err) = args.reject_unknown("mkdir", &["p", "parents"]) {
            return err;
        }
        let dirs = args.positional();
        if dirs.is_empty() {
            return Output::error("mkdir: missing operand");
        }
        let parents = args.has_flag("p") || args.has_flag("parents");

        let mut errors = Vec::new();
        for dir in dirs {
            let result = if parents {
                create_all(ctx.fs, dir)
            } else {
                ctx.fs.create_directory(dir)
            };
            if let Err(e) = result {
                errors.push(format!("mkdir: cannot create directory '{dir}': {e}"));
            }
        }

        if errors.is_empty() {
            Output::empty()
        } else {
            Output::error(errors.join("\n"))
        }
    }
}

/// Create `raw` and any missing parents. Existing directories are fine.
fn create_all(fs: &mut VirtualFs, raw: &str) -> FsResult<()> {
    let segments = fs.resolve(raw);
    for depth in 1..=segments.len() {
        let prefix = path::display(&segments[..depth]);
        match fs.lookup(&prefix) {
            Some(node) if node.is_dir() => continue,
            Some(_) => return Err(FsError::NotADirectory),
            None => fs.create_directory(&prefix)?,
        }
    }
    Ok(())
}
