//! Route commands: ask the host to show another page.

use vfsh_types::{Output, Sentinel};

use crate::kernel::Route;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// One tool per configured [`Route`], emitting a `Navigate` sentinel.
pub struct Navigate {
    route: Route,
}

impl Navigate {
    pub fn new(route: Route) -> Self {
        Self { route }
    }
}

impl Tool for Navigate {
    fn name(&self) -> &str {
        &self.route.name
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(self.route.name.as_str(), self.route.description.as_str())
            .usage(self.route.name.as_str())
    }

    fn execute(&self, _args: &ToolArgs, _ctx: &mut ExecContext<'_>) -> Output {
        Output::system(Sentinel::Navigate(self.route.path.clone()))
    }
}
