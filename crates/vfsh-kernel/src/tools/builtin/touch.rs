//! touch: Create empty files or update timestamps.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Touch tool: create files, or bump the modification time of existing ones.
pub struct Touch;

impl Tool for Touch {
    fn name(&self) -> &str {
        "touch"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("touch", "Create an empty file")
            .usage("touch <file> [file2]...")
            .example("Create empty file", "touch newfile.txt")
            .example("Update timestamp", "touch README.md")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        let files = args.positional();
        if files.is_empty() {
            return Output::error("touch: missing file operand");
        }

        let mut errors = Vec::new();
        for file in files {
            let result = if ctx.fs.exists(file) {
                ctx.fs.touch(file)
            } else {
                ctx.fs.create_file(file, "")
            };
            if let Err(e) = result {
                errors.push(format!("touch: cannot touch '{file}': {e}"));
            }
        }

        if errors.is_empty() {
            Output::empty()
        } else {
            Output::error(errors.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::Harness;

    #[test]
    fn test_touch_create_new() {
        let mut h = Harness::new();
        let out = h.run(&Touch, &["a.txt", "documents/b.txt"]);
        assert!(!out.is_error());
        assert_eq!(h.fs.read_file("a.txt"), Ok(""));
        assert_eq!(h.fs.read_file("documents/b.txt"), Ok(""));
    }

    #[test]
    fn test_touch_existing_keeps_content() {
        let mut h = Harness::new();
        let before = h.fs.lookup("README.md").unwrap().modified_at();
        assert!(!h.run(&Touch, &["README.md"]).is_error());
        let node = h.fs.lookup("README.md").unwrap();
        assert!(node.content().unwrap().contains("vfsh"));
        assert!(node.modified_at() >= before);
    }

    #[test]
    fn test_touch_errors() {
        let mut h = Harness::new();
        assert_eq!(h.run(&Touch, &[]).text(), "touch: missing file operand");
        assert_eq!(
            h.run(&Touch, &["nope/a.txt"]).text(),
            "touch: cannot touch 'nope/a.txt': No such file or directory"
        );
    }
}
