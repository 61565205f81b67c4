//! Tool registry: name and alias lookup.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use super::traits::{Tool, ToolSchema};

struct Entry {
    tool: Arc<dyn Tool>,
    schema: ToolSchema,
}

/// Registered tools, in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    entries: Vec<Entry>,
    by_name: HashMap<String, usize>,
    aliases: HashMap<String, usize>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.by_name.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its name and its schema's aliases.
    ///
    /// Re-registering a name replaces the earlier tool. An alias that
    /// collides with a tool name or an existing alias is ignored.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        let schema = tool.schema();
        let entry = Entry {
            tool: Arc::new(tool),
            schema,
        };
        let name = entry.tool.name().to_string();

        let index = match self.by_name.get(&name) {
            Some(&index) => {
                warn!(%name, "command registered twice, replacing the earlier one");
                self.entries[index] = entry;
                self.aliases.retain(|_, i| *i != index);
                index
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };
        self.by_name.insert(name, index);

        for alias in &self.entries[index].schema.aliases {
            if self.by_name.contains_key(alias) || self.aliases.contains_key(alias) {
                warn!(%alias, "alias shadows another command, ignored");
                continue;
            }
            self.aliases.insert(alias.clone(), index);
        }
    }

    /// Look up a tool by exact name, then by alias.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.index_of(name).map(|i| self.entries[i].tool.as_ref())
    }

    /// Schema for a name or alias.
    pub fn schema(&self, name: &str) -> Option<&ToolSchema> {
        self.index_of(name).map(|i| &self.entries[i].schema)
    }

    /// All schemas in registration order (hidden ones included).
    pub fn schemas(&self) -> impl Iterator<Item = &ToolSchema> {
        self.entries.iter().map(|e| &e.schema)
    }

    /// Names and aliases offered for completion; hidden tools contribute
    /// neither.
    pub fn completion_candidates(&self) -> impl Iterator<Item = &str> {
        self.schemas()
            .filter(|s| !s.hidden)
            .flat_map(|s| std::iter::once(&s.name).chain(s.aliases.iter()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name
            .get(name)
            .or_else(|| self.aliases.get(name))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{ExecContext, ToolArgs};
    use vfsh_types::Output;

    struct Fake {
        name: &'static str,
        aliases: &'static [&'static str],
        hidden: bool,
    }

    impl Tool for Fake {
        fn name(&self) -> &str {
            self.name
        }

        fn schema(&self) -> ToolSchema {
            let mut schema = ToolSchema::new(self.name, "fake");
            for alias in self.aliases {
                schema = schema.alias(*alias);
            }
            if self.hidden {
                schema = schema.hidden();
            }
            schema
        }

        fn execute(&self, _args: &ToolArgs, _ctx: &mut ExecContext<'_>) -> Output {
            Output::info(self.name)
        }
    }

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(Fake { name: "ls", aliases: &["ll", "dir"], hidden: false });
        registry.register(Fake { name: "sudo", aliases: &["su"], hidden: true });
        registry.register(Fake { name: "dir", aliases: &[], hidden: false });
        registry
    }

    #[test]
    fn lookup_by_name_then_alias() {
        let registry = registry();
        assert_eq!(registry.get("ls").map(|t| t.name()), Some("ls"));
        assert_eq!(registry.get("ll").map(|t| t.name()), Some("ls"));
        // a real command wins over an alias
        assert_eq!(registry.get("dir").map(|t| t.name()), Some("dir"));
        assert!(registry.get("LS").is_none());
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn hidden_tools_are_not_offered() {
        let registry = registry();
        let candidates: Vec<_> = registry.completion_candidates().collect();
        assert!(candidates.contains(&"ll"));
        assert!(!candidates.contains(&"sudo"));
        assert!(!candidates.contains(&"su"));
        assert!(registry.get("su").is_some());
    }

    #[test]
    fn reregistering_replaces() {
        let mut registry = registry();
        registry.register(Fake { name: "ls", aliases: &["list"], hidden: false });
        assert_eq!(registry.len(), 3);
        assert!(registry.get("ll").is_none());
        assert_eq!(registry.get("list").map(|t| t.name()), Some("ls"));
    }
}
