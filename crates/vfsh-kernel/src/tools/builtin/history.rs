//! history: Show the session's command history.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// History tool: numbered list of submitted lines, oldest first.
pub struct History;

impl Tool for History {
    fn name(&self) -> &str {
        "history"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("history", "Show command history").usage("history")
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        let lines: Vec<String> = ctx
            .session
            .history()
            .enumerate()
            .map(|(i, line)| format!("{:>4}  {line}", i + 1))
            .collect();
        if lines.is_empty() {
            Output::info("No commands in history")
        } else {
            Output::info(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::Harness;

    #[test]
    fn test_history_numbered() {
        let mut h = Harness::new();
        h.session.add_to_history("ls");
        h.session.add_to_history("cd documents");
        assert_eq!(h.run(&History, &[]).text(), "   1  ls\n   2  cd documents");
    }

    #[test]
    fn test_history_empty() {
        let mut h = Harness::new();
        assert_eq!(h.run(&History, &[]).text(), "No commands in history");
    }
}
