//! wc: Count lines, words and characters.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Wc tool: line, word and character counts per file.
pub struct Wc;

impl Tool for Wc {
    fn name(&self) -> &str {
        "wc"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("wc", "Word, line, character, and byte count")
            .usage("wc [-l|-w|-c] <file>...")
            .example("All counts", "wc README.md")
            .example("Lines only", "wc -l README.md")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        if let Some(err) = args.reject_unknown("wc", &["l", "w", "c"]) {
            return err;
        }
        let files = args.positional();
        if files.is_empty() {
            return Output::error("wc: missing file operand");
        }

        let mut lines = Vec::with_capacity(files.len());
        let mut failures = 0;
        for file in &files {
            match ctx.fs.read_file(file) {
                Ok(content) => {
                    let counts = Counts::of(content);
                    let shown = if args.has_flag("l") {
                        counts.lines.to_string()
                    } else if args.has_flag("w") {
                        counts.words.to_string()
                    } else if args.has_flag("c") {
                        counts.chars.to_string()
                    } else {
                        format!("{} {} {}", counts.lines, counts.words, counts.chars)
                    };
                    lines.push(format!("{shown} {file}"));
                }
                Err(e) => {
                    failures += 1;
                    lines.push(format!("wc: {file}: {e}"));
                }
            }
        }

        let text = lines.join("\n");
        if failures == files.len() {
            Output::error(text)
        } else {
            Output::info(text)
        }
    }
}

/// Counts for one file.
///
/// Lines are newline-separated pieces, so `"a\nb"` has 2 and the empty
/// file has 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Counts {
    lines: usize,
    words: usize,
    chars: usize,
}

impl Counts {
    fn of(content: &str) -> Self {
        Self {
            lines: content.split('\n').count(),
            words: content.split_whitespace().count(),
            chars: content.chars().count(),
        }
    }
}
