//! tree: Display a directory tree.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Tree tool: box-drawing view of a subtree.
pub struct Tree;

impl Tool for Tree {
    fn name(&self) -> &str {
        "tree"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("tree", "Display directory tree structure")
            .usage("tree [directory]")
            .example("Tree of the current directory", "tree")
            .example("Whole filesystem", "tree /")
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        let target = args.first();
        match ctx.fs.generate_tree(target) {
            Ok(lines) => Output::info(lines.join("\n")),
            Err(e) => {
                let shown = target.map_or_else(|| ctx.fs.current_path(), str::to_string);
                Output::error(format!("tree: {shown}: {e}"))
            }
        }
    }
}
