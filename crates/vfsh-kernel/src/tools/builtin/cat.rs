//! cat: Print file contents.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Cat tool: print one or more files.
pub struct Cat;

impl Tool for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cat", "Display file contents")
            .usage("cat <file> [file2] [file3]...")
            .example("Show a file", "cat README.md")
            .example("Several files with headers", "cat a.txt b.txt")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        let files = args.raw();
        if files.is_empty() {
            return Output::error("cat: missing file operand");
        }

        let with_headers = files.len() > 1;
        let mut sections = Vec::with_capacity(files.len());
        let mut failures = 0;
        for file in files {
            match ctx.fs.read_file(file) {
                Ok(content) if with_headers => sections.push(format!("==> {file} <==\n{content}\n")),
                Ok(content) => sections.push(content.to_string()),
                Err(e) => {
                    failures += 1;
                    sections.push(format!("cat: {file}: {e}"));
                }
            }
        }

        let text = sections.join("\n");
        if failures == files.len() {
            Output::error(text)
        } else {
            Output::info(text).with_animate()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::Harness;

    #[test]
    fn test_cat_single() {
        let mut h = Harness::new();
        h.fs.create_file("notes.txt", "line1\nline2").unwrap();
        let out = h.run(&Cat, &["notes.txt"]);
        assert_eq!(out.text(), "line1\nline2");
        assert!(out.animate);
    }

    #[test]
    fn test_cat_multiple_with_headers() {
        let mut h = Harness::new();
        h.fs.create_file("a", "A").unwrap();
        h.fs.create_file("b", "B").unwrap();
        let out = h.run(&Cat, &["a", "b"]);
        assert_eq!(out.text(), "==> a <==\nA\n\n==> b <==\nB\n");
    }

    #[test]
    fn test_cat_errors() {
        let mut h = Harness::new();
        assert_eq!(h.run(&Cat, &[]).text(), "cat: missing file operand");
        let out = h.run(&Cat, &["nope"]);
        assert!(out.is_error());
        assert_eq!(out.text(), "cat: nope: No such file or directory");
        assert_eq!(h.run(&Cat, &["documents"]).text(), "cat: documents: Is a directory");
    }

    #[test]
    fn test_cat_partial_failure_is_not_an_error() {
        let mut h = Harness::new();
        h.fs.create_file("a", "A").unwrap();
        let out = h.run(&Cat, &["a", "missing"]);
        assert!(!out.is_error());
        assert!(out.text().ends_with("cat: missing: No such file or directory"));
    }
}
