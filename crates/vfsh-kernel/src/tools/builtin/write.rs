//! write: Write text to a file.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Write tool: create or overwrite a file with the given text.
pub struct Write;

impl Tool for Write {
    fn name(&self) -> &str {
        "write"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("write", "Write text to a file")
            .usage("write <file> <text>...")
            .example("Create or replace a file", "write notes.txt remember the milk")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        let (path, words) = match args.raw() {
            [] => return Output::error("write: missing file operand"),
            [path, words @ ..] => (path.as_str(), words),
        };
        let text = words.join(" ");
        let bytes = text.len();

        let result = if ctx.fs.exists(path) {
            ctx.fs.write_file(path, text)
        } else {
            ctx.fs.create_file(path, text)
        };
        match result {
            Ok(()) => Output::success(format!("Wrote {bytes} bytes to {path}")),
            Err(e) => Output::error(format!("write: {path}: {e}")),
        }
    }
}
