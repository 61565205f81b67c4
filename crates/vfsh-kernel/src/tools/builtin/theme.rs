//! theme: Ask the host to switch color theme.

use vfsh_types::{Output, Sentinel};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Themes a host is expected to understand.
pub const THEMES: &[&str] = &["dark", "light", "matrix"];

/// Theme tool: `theme` toggles, `theme <name>` selects.
pub struct Theme;

impl Tool for Theme {
    fn name(&self) -> &str {
        "theme"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("theme", "Change terminal theme")
            .usage("theme [dark|light|matrix]")
            .example("Toggle between dark and light", "theme")
            .example("Pick a theme", "theme matrix")
    }

    fn execute(&self, args: &ToolArgs, _ctx: &mut ExecContext<'_>) -> Output {
        let Some(requested) = args.first() else {
            return Output::system(Sentinel::Theme("toggle".to_string()));
        };
        let name = requested.to_lowercase();
        if THEMES.contains(&name.as_str()) {
            Output::system(Sentinel::Theme(name))
        } else {
            Output::error(format!(
                "Invalid theme: {requested}. Available themes: {}",
                THEMES.join(", ")
            ))
        }
    }
}
