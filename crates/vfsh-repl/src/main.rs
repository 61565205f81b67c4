//! vfsh CLI entry point.
//!
//! Usage:
//!   vfsh                      # Interactive REPL
//!   vfsh -c <command>         # Execute command and exit

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vfsh_kernel::{paths, FileStorage, KernelConfig, ShellConfig};
use vfsh_repl::{Repl, Step};

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        None => {
            let repl = open_repl()?;
            vfsh_repl::run(repl, &paths::history_path())?;
            Ok(ExitCode::SUCCESS)
        }

        Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!(
                "vfsh {} ({} {})",
                env!("CARGO_PKG_VERSION"),
                env!("VFSH_GIT_HASH"),
                env!("VFSH_BUILD_DATE")
            );
            Ok(ExitCode::SUCCESS)
        }

        Some("-c") => {
            let cmd = args.get(2).context("-c requires a command argument")?;
            run_command(cmd)
        }

        Some(unknown) => {
            eprintln!("Unknown option: {unknown}");
            eprintln!("Run 'vfsh --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_help() {
    println!(
        r#"vfsh v{}

Usage:
  vfsh                         Interactive REPL
  vfsh -c <command>            Execute command and exit

Options:
  -c <command>                 Execute command string and exit
  -h, --help                   Show this help
  -V, --version                Show version

Files:
  {}    configuration
  {}    saved filesystem

Examples:
  vfsh                         # Start interactive REPL
  vfsh -c 'tree /'             # Show the whole filesystem
"#,
        env!("CARGO_PKG_VERSION"),
        paths::config_path().display(),
        paths::state_dir().display(),
    );
}

/// Load configuration and open the kernel over the on-disk state.
fn open_repl() -> Result<Repl> {
    let config: KernelConfig = ShellConfig::load()?.into();
    let storage = Arc::new(FileStorage::new(paths::state_dir()));
    Repl::new(config, storage)
}

/// Execute a command string and exit.
fn run_command(cmd: &str) -> Result<ExitCode> {
    let mut repl = open_repl()?;
    match repl.process_line(cmd) {
        Step::Continue(Some(output)) | Step::Exit(output) => println!("{output}"),
        Step::Continue(None) => {}
    }
    repl.flush();

    if repl.last_failed() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
