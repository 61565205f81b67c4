//! vfsh REPL: an interactive terminal for the vfsh shell.
//!
//! This REPL provides an interactive interface to the vfsh kernel.
//! It handles:
//! - Command execution via the Kernel
//! - Rendering of outputs and host sentinels
//! - Command-name completion and line history via rustyline

pub mod format;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use tokio::runtime::Runtime;

use vfsh_kernel::vfs::path;
use vfsh_kernel::{parse, DefaultSeed, Kernel, KernelConfig, SeedProvider, Storage};

use crate::format::OutputContext;

/// Command names that end the interactive loop once they have run.
const EXIT_COMMANDS: &[&str] = &["exit", "quit", "bye"];

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Keep reading; print the text if any.
    Continue(Option<String>),
    /// Print the farewell, then leave.
    Exit(String),
}

/// REPL state: the kernel plus the runtime it persists on.
pub struct Repl {
    kernel: Kernel,
    runtime: Runtime,
    context: OutputContext,
    last_failed: bool,
}

impl Repl {
    /// Open a kernel over `storage` with the default seed.
    pub fn new(config: KernelConfig, storage: Arc<dyn Storage>) -> Result<Self> {
        let seed = Arc::new(DefaultSeed::new(config.user.as_str()));
        Self::with_seed(config, storage, seed)
    }

    /// Open a kernel over `storage` with a custom initial filesystem.
    pub fn with_seed(
        config: KernelConfig,
        storage: Arc<dyn Storage>,
        seed: Arc<dyn SeedProvider>,
    ) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let kernel = runtime.block_on(Kernel::open(config, storage, seed));

        Ok(Self {
            kernel,
            runtime,
            context: format::detect_context(),
            last_failed: false,
        })
    }

    /// Override the detected output context.
    pub fn with_context(mut self, context: OutputContext) -> Self {
        self.context = context;
        self
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> Step {
        let output = self.kernel.execute(line);
        self.last_failed = output.is_error();
        let rendered = format::format_output(&output, self.context);

        let exiting = !output.is_error()
            && parse(line).is_some_and(|(command, _)| {
                EXIT_COMMANDS.contains(&command.to_lowercase().as_str())
            });
        if exiting {
            return Step::Exit(rendered);
        }

        if rendered.is_empty() {
            Step::Continue(None)
        } else {
            Step::Continue(Some(rendered))
        }
    }

    /// Whether the most recent line produced an error.
    pub fn last_failed(&self) -> bool {
        self.last_failed
    }

    /// Prompt showing user, shell name and working directory (`~` for home).
    pub fn prompt(&self) -> String {
        let config = self.kernel.config();
        let cwd = self.kernel.cwd();
        let home = path::display(self.kernel.fs().home());
        let shown = match cwd.strip_prefix(&home) {
            Some(rest) if home != "/" && (rest.is_empty() || rest.starts_with('/')) => {
                format!("~{rest}")
            }
            _ => cwd,
        };
        format!("{}@{}:{}$ ", config.user, config.name, shown)
    }

    /// Wait for queued saves to reach storage.
    pub fn flush(&self) {
        self.runtime.block_on(self.kernel.flush());
    }
}

/// rustyline helper: completes the command word through the kernel.
struct ReplHelper {
    repl: Repl,
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];
        let start = before.len() - before.trim_start().len();
        let partial = &before[start..];
        // Only the command word is completed.
        if partial.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let completion = self.repl.kernel.autocomplete(partial);
        let candidates = completion
            .completions
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;
}

impl Highlighter for ReplHelper {}

impl Validator for ReplHelper {}

impl Helper for ReplHelper {}

/// Save REPL history to disk.
fn save_history(rl: &mut Editor<ReplHelper, DefaultHistory>, path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!("Failed to create history directory: {}", e);
        }
    }
    if let Err(e) = rl.save_history(path) {
        tracing::warn!("Failed to save history: {}", e);
    }
}

/// Run the interactive loop until `exit`, Ctrl-D or a terminal error.
pub fn run(repl: Repl, history_path: &Path) -> Result<()> {
    println!("{} v{}", repl.kernel.name(), env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for available commands, 'exit' to leave.");

    let mut rl: Editor<ReplHelper, DefaultHistory> =
        Editor::new().context("Failed to create editor")?;
    rl.set_helper(Some(ReplHelper { repl }));

    if let Err(e) = rl.load_history(history_path) {
        // Only log if it's not a "file not found" error (expected on first run)
        let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound);
        if !is_not_found {
            tracing::warn!("Failed to load history: {}", e);
        }
    }
    println!();

    loop {
        let Some(helper) = rl.helper() else {
            break;
        };
        let prompt = helper.repl.prompt();

        match rl.readline(&prompt) {
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::warn!("Failed to add history entry: {}", e);
                }
                let Some(helper) = rl.helper_mut() else {
                    break;
                };

                match helper.repl.process_line(&line) {
                    Step::Continue(Some(output)) => println!("{output}"),
                    Step::Continue(None) => {}
                    Step::Exit(farewell) => {
                        println!("{farewell}");
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    save_history(&mut rl, history_path);
    if let Some(helper) = rl.helper() {
        helper.repl.flush();
    }
    Ok(())
}
