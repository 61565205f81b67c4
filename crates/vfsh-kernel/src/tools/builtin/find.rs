//! find: Search for files by name.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Find tool: list files whose names match a `*` pattern.
pub struct Find;

impl Tool for Find {
    fn name(&self) -> &str {
        "find"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("find", "Find files by name pattern")
            .usage("find <pattern> [directory]")
            .example("Markdown files below here", "find *.md")
            .example("Search from the root", "find notes /")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        let (pattern, dir) = match args.raw() {
            [] => return Output::error("find: missing pattern"),
            [pattern] => (pattern.as_str(), None),
            [pattern, dir] => (pattern.as_str(), Some(dir.as_str())),
            _ => return Output::error("find: too many arguments"),
        };

        match ctx.fs.find_files(pattern, dir) {
            Ok(found) if found.is_empty() => {
                let shown = dir.map_or_else(|| ctx.fs.current_path(), str::to_string);
                Output::info(format!("No files matching '{pattern}' found in {shown}"))
            }
            Ok(found) => Output::info(found.join("\n")),
            Err(e) => Output::error(format!("find: '{}': {e}", dir.unwrap_or(pattern))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::Harness;

    #[test]
    fn test_find_glob() {
        let mut h = Harness::new();
        h.fs.create_file("documents/todo.txt", "").unwrap();
        let out = h.run(&Find, &["*.txt"]);
        assert_eq!(
            out.text(),
            "/home/user/documents/todo.txt\n/home/user/welcome.txt"
        );
    }

    #[test]
    fn test_find_case_insensitive_from_root() {
        let mut h = Harness::new();
        assert_eq!(h.run(&Find, &["readme", "/"]).text(), "/home/user/README.md");
    }

    #[test]
    fn test_find_no_match() {
        let mut h = Harness::new();
        let out = h.run(&Find, &["*.rs"]);
        assert!(!out.is_error());
        assert_eq!(out.text(), "No files matching '*.rs' found in /home/user");
    }

    #[test]
    fn test_find_errors() {
        let mut h = Harness::new();
        assert_eq!(h.run(&Find, &[]).text(), "find: missing pattern");
        assert_eq!(
            h.run(&Find, &["x", "/nope"]).text(),
            "find: '/nope': No such file or directory"
        );
        assert_eq!(
            h.run(&Find, &["readme", "README.md"]).text(),
            "find: 'README.md': Not a directory"
        );
    }
}
