//! Built-in tools for vfsh.
//!
//! Registration order is the order `help` lists them in.

mod cat;
mod cd;
mod clear;
mod echo;
mod exit;
mod find;
mod help;
mod history;
mod ls;
mod matrix;
mod mkdir;
mod navigate;
mod pwd;
mod reset;
mod rm;
mod sudo;
mod theme;
mod touch;
mod tree;
mod wc;
mod whoami;
mod write;

pub use theme::THEMES;

use super::ToolRegistry;
use crate::kernel::KernelConfig;

/// Register all built-in tools with the registry, plus one route command
/// per entry in `config.routes`.
pub fn register_builtins(registry: &mut ToolRegistry, config: &KernelConfig) {
    registry.register(help::Help);
    registry.register(ls::Ls);
    registry.register(cd::Cd);
    registry.register(pwd::Pwd);
    registry.register(whoami::Whoami);
    registry.register(cat::Cat);
    registry.register(echo::Echo);
    registry.register(write::Write);
    registry.register(touch::Touch);
    registry.register(mkdir::Mkdir);
    registry.register(rm::Rm);
    registry.register(tree::Tree);
    registry.register(find::Find);
    registry.register(wc::Wc);
    registry.register(clear::Clear);
    registry.register(history::History);
    registry.register(reset::Reset);
    for route in &config.routes {
        registry.register(navigate::Navigate::new(route.clone()));
    }
    registry.register(theme::Theme);
    registry.register(matrix::Matrix);
    registry.register(exit::Exit);
    registry.register(sudo::Sudo);
}
