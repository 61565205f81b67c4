//! The Kernel, the heart of vfsh.
//!
//! The Kernel owns and coordinates all core components:
//! - The virtual filesystem (tree + working directory)
//! - Tool registry (builtins and route commands)
//! - Session (history recall)
//! - Persister (ordered background saves)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        Kernel                        │
//! │  ┌─────────────┐  ┌──────────────┐  ┌─────────────┐  │
//! │  │  VirtualFs  │  │ ToolRegistry │  │   Session   │  │
//! │  │ (tree, cwd) │  │  (builtins,  │  │  (history)  │  │
//! │  │             │  │   routes)    │  │             │  │
//! │  └─────────────┘  └──────────────┘  └─────────────┘  │
//! │  ┌─────────────────────────────┐  ┌───────────────┐  │
//! │  │  Persister → Storage        │  │ SeedProvider  │  │
//! │  └─────────────────────────────┘  └───────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::debug;
use vfsh_types::Output;

use crate::seed::{home_owner, DefaultSeed, SeedProvider, DEFAULT_USER};
use crate::session::{self, Completion, HistoryDirection, Session, DEFAULT_HISTORY_LIMIT};
use crate::state::{self, MemoryStorage, Persister, Storage};
use crate::tools::{register_builtins, ExecContext, ToolArgs, ToolRegistry, ToolSchema};
use crate::vfs::VirtualFs;

/// Storage key the filesystem blob lives under by default.
pub const DEFAULT_STORAGE_KEY: &str = "vfsh-filesystem";

/// A page the host can be asked to show. Becomes a command named `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    pub path: String,
    pub description: String,
}

impl Route {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            description: description.into(),
        }
    }
}

/// `home`, `about` and `contact`.
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new("home", "/", "Navigate to home page"),
        Route::new("about", "/about", "Navigate to about page"),
        Route::new("contact", "/contact", "Navigate to contact page"),
    ]
}

/// Configuration for kernel initialization.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Name of this kernel (shown in prompts and farewells).
    pub name: String,

    /// User whose home directory the default seed creates.
    pub user: String,

    /// Key the filesystem is persisted under.
    pub storage_key: String,

    /// Maximum number of history entries kept.
    pub history_limit: usize,

    /// Navigation commands to register.
    pub routes: Vec<Route>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            name: "vfsh".to_string(),
            user: DEFAULT_USER.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            routes: default_routes(),
        }
    }
}

impl KernelConfig {
    /// Create a kernel config with the given name.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Config for tests and throwaway kernels.
    pub fn isolated() -> Self {
        Self {
            name: "isolated".to_string(),
            storage_key: "vfsh-isolated".to_string(),
            ..Self::default()
        }
    }

    /// Set the home directory owner. Invalid directory names become
    /// [`DEFAULT_USER`].
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = home_owner(user);
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Replace all routes.
    pub fn with_routes(mut self, routes: Vec<Route>) -> Self {
        self.routes = routes;
        self
    }

    /// Add one route.
    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }
}

/// Split a line into command and arguments on whitespace.
///
/// Returns `None` for blank input. No quoting or escaping.
pub fn parse(line: &str) -> Option<(String, Vec<String>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_string();
    Some((command, words.map(str::to_string).collect()))
}

/// The Kernel: executes vfsh command lines.
///
/// Execution is synchronous. Every command that changes the filesystem is
/// followed by a queued save; call [`Kernel::flush`] to wait for it.
pub struct Kernel {
    config: KernelConfig,
    fs: VirtualFs,
    session: Session,
    tools: ToolRegistry,
    seed: Arc<dyn SeedProvider>,
    persister: Persister,
}

impl Kernel {
    /// Load persisted state (or the seed) and start the writer task.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn open(
        config: KernelConfig,
        storage: Arc<dyn Storage>,
        seed: Arc<dyn SeedProvider>,
    ) -> Self {
        let fs = state::load(storage.as_ref(), &config.storage_key, seed.as_ref()).await;
        let persister = Persister::spawn(storage, config.storage_key.clone());

        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools, &config);
        debug!(name = %config.name, tools = tools.len(), "kernel ready");

        Self {
            session: Session::new(config.history_limit),
            config,
            fs,
            tools,
            seed,
            persister,
        }
    }

    /// A kernel over fresh in-memory storage and the default seed.
    pub async fn transient(config: KernelConfig) -> Self {
        let seed = Arc::new(DefaultSeed::new(config.user.as_str()));
        Self::open(config, Arc::new(MemoryStorage::new()), seed).await
    }

    /// Run one input line.
    ///
    /// The line is recorded in history, dispatched by its (lowercased)
    /// command name or alias, and the filesystem is saved if the command
    /// changed it.
    #[tracing::instrument(level = "info", skip(self), fields(input_len = line.len()))]
    pub fn execute(&mut self, line: &str) -> Output {
        self.session.add_to_history(line);

        let Some((command, args)) = parse(line) else {
            return Output::empty();
        };
        let name = command.to_lowercase();
        let Some(tool) = self.tools.get(&name) else {
            debug!(command = %command, "unknown command");
            return Output::error(format!(
                "Command not found: {command}. Type 'help' for available commands."
            ));
        };
        debug!(command = %name, argc = args.len(), "dispatch");

        let before = self.fs.revision();
        let args = ToolArgs::new(args);
        let mut ctx = ExecContext::new(
            &mut self.fs,
            &self.session,
            &self.tools,
            self.seed.as_ref(),
            &self.config,
        );
        let output = tool.execute(&args, &mut ctx);

        if self.fs.revision() != before {
            self.persister.save(&self.fs);
        }
        output
    }

    /// Complete a command name from registered, non-hidden names and aliases.
    pub fn autocomplete(&self, partial: &str) -> Completion {
        session::autocomplete(self.tools.completion_candidates(), partial)
    }

    /// Step through history; see [`Session::navigate_history`].
    pub fn navigate_history(&mut self, direction: HistoryDirection) -> Option<String> {
        self.session.navigate_history(direction)
    }

    /// Wait until every save queued so far has been written.
    pub async fn flush(&self) {
        self.persister.flush().await;
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current working directory as an absolute path.
    pub fn cwd(&self) -> String {
        self.fs.current_path()
    }

    /// Schemas of all registered tools, in registration order.
    pub fn tool_schemas(&self) -> Vec<ToolSchema> {
        self.tools.schemas().cloned().collect()
    }
}

impl std::fmt::Debug for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel")
            .field("name", &self.config.name)
            .field("cwd", &self.fs.current_path())
            .field("tools", &self.tools.len())
            .finish_non_exhaustive()
    }
}
