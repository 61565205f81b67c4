//! Core tool traits and types.

use vfsh_types::Output;

use super::context::ExecContext;

/// A usage example shown by `help <command>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub description: String,
    pub code: String,
}

/// Schema describing a tool's interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSchema {
    /// Tool name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Synopsis, e.g. `cat <file> [file2]...`.
    pub usage: Option<String>,
    /// Alternative names the dispatcher accepts.
    pub aliases: Vec<String>,
    /// Left out of `help` and completion, but still runs when typed.
    pub hidden: bool,
    /// Usage examples.
    pub examples: Vec<Example>,
}

impl ToolSchema {
    /// Create a new tool schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usage: None,
            aliases: Vec::new(),
            hidden: false,
            examples: Vec::new(),
        }
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Add a usage example.
    pub fn example(mut self, description: impl Into<String>, code: impl Into<String>) -> Self {
        self.examples.push(Example {
            description: description.into(),
            code: code.into(),
        });
        self
    }
}

/// Whitespace-split arguments, minus the command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    args: Vec<String>,
}

impl ToolArgs {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Every argument, flags included.
    pub fn raw(&self) -> &[String] {
        &self.args
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Arguments that are not flags. A lone `-` counts as positional.
    pub fn positional(&self) -> Vec<&str> {
        self.args
            .iter()
            .map(String::as_str)
            .filter(|a| !is_flag(a))
            .collect()
    }

    /// First positional argument.
    pub fn first(&self) -> Option<&str> {
        self.args.iter().map(String::as_str).find(|a| !is_flag(a))
    }

    /// Check for a flag.
    ///
    /// Single-character names match short flags, including clusters, so
    /// `has_flag("r")` is true for `-r` and `-rf`. Longer names match
    /// `--name`.
    pub fn has_flag(&self, name: &str) -> bool {
        let mut chars = name.chars();
        let short = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };

        self.args.iter().any(|arg| match arg.strip_prefix("--") {
            Some(long) => long == name,
            None => match (short, arg.strip_prefix('-')) {
                (Some(c), Some(cluster)) => !cluster.is_empty() && cluster.contains(c),
                _ => false,
            },
        })
    }

    /// Flags that are not in `known` (single characters, or long names).
    pub fn unknown_flags(&self, known: &[&str]) -> Vec<String> {
        let mut unknown = Vec::new();
        for arg in self.args.iter().filter(|a| is_flag(a)) {
            match arg.strip_prefix("--") {
                Some(long) => {
                    if !known.contains(&long) {
                        unknown.push(arg.clone());
                    }
                }
                None => {
                    for c in arg.chars().skip(1) {
                        let mut buf = [0u8; 4];
                        if !known.contains(&&*c.encode_utf8(&mut buf)) {
                            unknown.push(format!("-{c}"));
                        }
                    }
                }
            }
        }
        unknown
    }

    /// Error output naming the first flag not in `known`, if any.
    pub fn reject_unknown(&self, command: &str, known: &[&str]) -> Option<Output> {
        let flag = self.unknown_flags(known).into_iter().next()?;
        let message = match flag.strip_prefix("--") {
            Some(_) => format!("{command}: unrecognized option '{flag}'"),
            None => format!("{command}: invalid option -- '{}'", &flag[1..]),
        };
        Some(Output::error(message))
    }
}

impl<S: Into<String>> FromIterator<S> for ToolArgs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

fn is_flag(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-')
}

/// A command the shell can run.
///
/// Execution is synchronous: tools only touch in-memory state through the
/// context, and the kernel persists afterwards.
pub trait Tool: Send + Sync {
    /// The tool's name (used for lookup).
    fn name(&self) -> &str;

    /// Get the tool's schema.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments and context.
    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> Output;
}
