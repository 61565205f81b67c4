//! ls: List directory contents.

use vfsh_types::{EntryType, Output, OutputNode};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::Node;

/// Ls tool: list directory contents.
pub struct Ls;

impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ls", "List directory contents")
            .usage("ls [directory] [-l for detailed view]")
            .alias("ll")
            .alias("dir")
            .example("List current directory", "ls")
            .example("Long format", "ls -l documents")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        if let Some(err) = args.reject_unknown("ls", &["l", "long"]) {
            return err;
        }
        let long = args.has_flag("l") || args.has_flag("long");
        let target = args.first();

        // a file lists as itself, under the name it was given
        if let Some(given) = target {
            if let Some(file) = ctx.fs.lookup(given).filter(|n| n.is_file()) {
                return Output::nodes(vec![entry(file, given, long)]);
            }
        }

        let entries = match ctx.fs.list_directory(target) {
            Ok(entries) => entries,
            Err(e) => {
                let shown = target.unwrap_or(".");
                return Output::error(format!("ls: cannot access '{shown}': {e}"));
            }
        };

        Output::nodes(
            entries
                .into_iter()
                .map(|node| entry(node, node.name(), long))
                .collect(),
        )
    }
}

fn entry(node: &Node, shown: &str, long: bool) -> OutputNode {
    let entry_type = if node.is_dir() {
        EntryType::Directory
    } else {
        EntryType::File
    };
    let out = OutputNode::new(shown).with_entry_type(entry_type);
    if !long {
        return out;
    }

    let size = if node.is_dir() {
        "-".to_string()
    } else {
        node.size().to_string()
    };
    out.with_cells(vec![
        node.permissions().to_string(),
        format!("{size:>8}"),
        node.modified_at().format("%Y-%m-%d %H:%M").to_string(),
    ])
}
