//! pwd: Print working directory.

use vfsh_types::Output;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Pwd tool: print current working directory.
pub struct Pwd;

impl Tool for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("pwd", "Print working directory")
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output {
        Output::info(ctx.fs.current_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::Harness;

    #[test]
    fn test_pwd() {
        let mut h = Harness::new();
        assert_eq!(h.run(&Pwd, &[]).text(), "/home/user");
        h.fs.change_directory("/").unwrap();
        assert_eq!(h.run(&Pwd, &[]).text(), "/");
    }
}
