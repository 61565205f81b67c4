//! help: List commands or describe one.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Help tool: list visible commands, or show one command in detail.
pub struct Help;

impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("help", "Display available commands")
            .usage("help [command]")
            .example("List commands", "help")
            .example("Describe one command", "help ls")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        match args.first() {
            None => Output::info(overview(ctx)),
            Some(topic) => match ctx.tools.schema(&topic.to_lowercase()) {
                Some(schema) => Output::info(describe(schema)),
                None => Output::error(format!(
                    "help: no help for '{topic}'. Type 'help' for available commands."
                )),
            },
        }
    }
}

fn overview(ctx: &ExecContext<'_>) -> String {
    let list = ctx
        .tools
        .schemas()
        .filter(|s| !s.hidden)
        .map(|s| format!("  {:<15} {}", s.name, s.description))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Available commands:\n\n{list}\n\n\
         Type 'help <command>' for more information about a specific command."
    )
}

fn describe(schema: &ToolSchema) -> String {
    let mut lines = vec![format!("{} - {}", schema.name, schema.description)];
    if let Some(usage) = &schema.usage {
        lines.push(format!("Usage: {usage}"));
    }
    if !schema.aliases.is_empty() {
        lines.push(format!("Aliases: {}", schema.aliases.join(", ")));
    }
    if !schema.examples.is_empty() {
        lines.push("Examples:".to_string());
        let width = schema.examples.iter().map(|e| e.code.len()).max().unwrap_or(0);
        for example in &schema.examples {
            lines.push(format!("  {:<width$}  # {}", example.code, example.description));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::Harness;

    #[test]
    fn test_help_lists_visible_commands() {
        let mut h = Harness::new();
        let out = h.run(&Help, &[]);
        let text = out.text();
        assert!(text.starts_with("Available commands:"));
        assert!(text.contains("  ls              List directory contents"));
        assert!(text.contains("help <command>"));
        assert!(!text.contains("sudo"));
    }

    #[test]
    fn test_help_describes_command() {
        let mut h = Harness::new();
        let text = h.run(&Help, &["ls"]).text();
        assert!(text.starts_with("ls - List directory contents"));
        assert!(text.contains("Usage: ls"));
        assert!(text.contains("Aliases: ll, dir"));
    }

    #[test]
    fn test_help_accepts_aliases() {
        let mut h = Harness::new();
        assert!(h.run(&Help, &["cls"]).text().starts_with("clear - "));
    }

    #[test]
    fn test_help_unknown_command() {
        let mut h = Harness::new();
        let out = h.run(&Help, &["frobnicate"]);
        assert!(out.is_error());
        assert!(out.text().contains("frobnicate"));
    }
}
