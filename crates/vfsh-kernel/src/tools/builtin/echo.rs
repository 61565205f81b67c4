//! echo: Print text, or redirect it into a file.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::{FsError, VirtualFs};

/// Echo tool: print arguments, with `>` and `>>` redirection.
pub struct Echo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Redirect {
    Overwrite,
    Append,
}

impl Tool for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("echo", "Display text or write it to a file")
            .usage("echo <text> [> file | >> file]")
            .example("Print", "echo hello world")
            .example("Overwrite a file", "echo hi > notes.txt")
            .example("Append a line", "echo more >> notes.txt")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        let raw = args.raw();
        let redirect = raw.iter().enumerate().find_map(|(i, a)| match a.as_str() {
            ">" => Some((i, Redirect::Overwrite)),
            ">>" => Some((i, Redirect::Append)),
            _ => None,
        });

        let Some((at, mode)) = redirect else {
            return Output::info(raw.join(" "));
        };
        let op = &raw[at];
        let Some(target) = raw.get(at + 1) else {
            return Output::error(format!(
                "echo: syntax error: expected a file name after '{op}'"
            ));
        };

        // words after the target still belong to the text, as in sh
        let text = raw[..at]
            .iter()
            .chain(&raw[at + 2..])
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");

        match redirect_into(ctx.fs, target, &text, mode) {
            Ok(()) => Output::empty(),
            Err(e) => Output::error(format!("echo: {target}: {e}")),
        }
    }
}

fn redirect_into(fs: &mut VirtualFs, target: &str, text: &str, mode: Redirect) -> Result<(), FsError> {
    let existing = match fs.read_file(target) {
        Ok(content) => Some(content.is_empty()),
        Err(FsError::NotFound) => None,
        Err(e) => return Err(e),
    };

    match (existing, mode) {
        (None, _) => fs.create_file(target, text),
        (Some(_), Redirect::Overwrite) => fs.write_file(target, text),
        (Some(true), Redirect::Append) => fs.append_file(target, text),
        (Some(false), Redirect::Append) => fs.append_file(target, &format!("\n{text}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::Harness;

    #[test]
    fn test_echo_prints() {
        let mut h = Harness::new();
        let out = h.run(&Echo, &["hello", "world"]);
        assert_eq!(out.text(), "hello world");
        assert!(!out.animate);
        assert!(h.run(&Echo, &[]).is_empty());
    }

    #[test]
    fn test_echo_overwrite_creates_then_replaces() {
        let mut h = Harness::new();
        assert!(h.run(&Echo, &["one", ">", "f.txt"]).is_empty());
        assert_eq!(h.fs.read_file("f.txt"), Ok("one"));
        h.run(&Echo, &["two", ">", "f.txt"]);
        assert_eq!(h.fs.read_file("f.txt"), Ok("two"));
    }

    #[test]
    fn test_echo_append() {
        let mut h = Harness::new();
        h.run(&Echo, &["first", ">>", "log.txt"]);
        h.run(&Echo, &["second", "line", ">>", "log.txt"]);
        assert_eq!(h.fs.read_file("log.txt"), Ok("first\nsecond line"));
    }

    #[test]
    fn test_echo_redirect_errors() {
        let mut h = Harness::new();
        assert!(h.run(&Echo, &["x", ">"]).is_error());
        assert_eq!(
            h.run(&Echo, &["x", ">", "documents"]).text(),
            "echo: documents: Is a directory"
        );
        assert_eq!(
            h.run(&Echo, &["x", ">", "nope/f.txt"]).text(),
            "echo: nope/f.txt: No such file or directory"
        );
    }
}
