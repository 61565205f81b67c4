//! Output formatting for the REPL.
//!
//! Turns a kernel [`Output`] into terminal text:
//!
//! - **Interactive** → columns, colors, sentinels as short notices
//! - **Piped** → plain text, one listing entry per line

use std::io::IsTerminal;

use owo_colors::OwoColorize;
use vfsh_types::{Content, EntryType, Output, OutputKind, OutputNode, Sentinel};

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Who is reading the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputContext {
    /// A human at a terminal.
    Interactive,
    /// Another program, or a file.
    Piped,
}

/// Detect the output context based on terminal state.
pub fn detect_context() -> OutputContext {
    if std::io::stdout().is_terminal() {
        OutputContext::Interactive
    } else {
        OutputContext::Piped
    }
}

/// Format an Output for display in the given context.
pub fn format_output(output: &Output, context: OutputContext) -> String {
    let color = context == OutputContext::Interactive && colors_enabled();
    match &output.content {
        Content::Text(text) => paint(text, output.kind, color),
        Content::Nodes(nodes) => match context {
            OutputContext::Interactive => format_nodes_interactive(nodes, color),
            OutputContext::Piped => format_nodes_piped(nodes),
        },
        Content::Sentinel(sentinel) => format_sentinel(sentinel, color),
    }
}

fn colors_enabled() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    !std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false)
}

/// Color text by output kind.
fn paint(text: &str, kind: OutputKind, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match kind {
        OutputKind::Error => text.red().to_string(),
        OutputKind::Warning => text.yellow().to_string(),
        OutputKind::Success => text.green().to_string(),
        OutputKind::Info | OutputKind::System => text.to_string(),
    }
}

fn format_sentinel(sentinel: &Sentinel, color: bool) -> String {
    let notice = match sentinel {
        Sentinel::ClearScreen => return CLEAR_SCREEN.to_string(),
        // The prompt already shows the new directory.
        Sentinel::ChangeDirectory(_) => return String::new(),
        Sentinel::Navigate(route) => format!("→ {route}"),
        Sentinel::Theme(name) if name == "toggle" => "theme toggled".to_string(),
        Sentinel::Theme(name) => format!("theme: {name}"),
        Sentinel::Matrix(effect) if effect == "stop" => "matrix stopped".to_string(),
        Sentinel::Matrix(effect) => {
            let mode = effect.split(';').next().unwrap_or(effect);
            format!("matrix: {mode}")
        }
    };
    if color {
        notice.cyan().to_string()
    } else {
        notice
    }
}

/// One entry per line; long listings keep their cells.
fn format_nodes_piped(nodes: &[OutputNode]) -> String {
    nodes
        .iter()
        .map(|node| {
            let mut line = node.cells.join(" ");
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&node.display_name());
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_nodes_interactive(nodes: &[OutputNode], color: bool) -> String {
    if nodes.iter().any(|n| !n.cells.is_empty()) {
        return format_rows_aligned(nodes, color);
    }

    // Get terminal width, default to 80 if unavailable
    let term_width = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80);
    format_columns(nodes, term_width, color)
}

/// Format names in multiple columns like `ls` does.
fn format_columns(nodes: &[OutputNode], term_width: usize, color: bool) -> String {
    let names: Vec<String> = nodes.iter().map(OutputNode::display_name).collect();
    let max_len = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);
    let col_width = max_len + 2;
    let num_cols = (term_width / col_width).max(1);

    let mut lines = Vec::new();
    for (row_nodes, row_names) in nodes.chunks(num_cols).zip(names.chunks(num_cols)) {
        let mut line = String::new();
        for (i, (node, name)) in row_nodes.iter().zip(row_names).enumerate() {
            line.push_str(&colorize_entry(name, node.entry_type, color));
            if i + 1 < row_names.len() {
                let padding = col_width.saturating_sub(name.chars().count());
                line.push_str(&" ".repeat(padding));
            }
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Format rows with aligned columns (for `ls -l`).
fn format_rows_aligned(nodes: &[OutputNode], color: bool) -> String {
    let num_cols = nodes.iter().map(|n| n.cells.len()).max().unwrap_or(0);
    let mut col_widths = vec![0; num_cols];
    for node in nodes {
        for (i, cell) in node.cells.iter().enumerate() {
            col_widths[i] = col_widths[i].max(cell.chars().count());
        }
    }

    nodes
        .iter()
        .map(|node| {
            let mut line = String::new();
            for (i, width) in col_widths.iter().enumerate() {
                let cell = node.cells.get(i).map(String::as_str).unwrap_or("");
                line.push_str(&format!("{cell:<width$}  "));
            }
            line.push_str(&colorize_entry(&node.display_name(), node.entry_type, color));
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colorize an entry based on its type.
fn colorize_entry(name: &str, entry_type: EntryType, color: bool) -> String {
    if !color {
        return name.to_string();
    }
    match entry_type {
        EntryType::Directory => name.blue().bold().to_string(),
        EntryType::File | EntryType::Text => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<OutputNode> {
        vec![
            OutputNode::new("docs").with_entry_type(EntryType::Directory),
            OutputNode::new("a.txt"),
            OutputNode::new("b.txt"),
        ]
    }

    #[test]
    fn test_text_is_unchanged_when_piped() {
        let output = Output::error("cat: x: No such file or directory");
        assert_eq!(
            format_output(&output, OutputContext::Piped),
            "cat: x: No such file or directory"
        );
    }

    #[test]
    fn test_paint_by_kind() {
        assert_eq!(paint("ok", OutputKind::Info, true), "ok");
        assert_ne!(paint("bad", OutputKind::Error, true), "bad");
        assert!(paint("bad", OutputKind::Error, true).contains("bad"));
        assert_eq!(paint("bad", OutputKind::Error, false), "bad");
    }

    #[test]
    fn test_nodes_piped_one_per_line() {
        let output = Output::nodes(listing());
        assert_eq!(
            format_output(&output, OutputContext::Piped),
            "docs/\na.txt\nb.txt"
        );
    }

    #[test]
    fn test_format_columns_wraps() {
        // Widest name is "docs/" (5), so each column is 7 wide.
        assert_eq!(format_columns(&listing(), 80, false), "docs/  a.txt  b.txt");
        assert_eq!(format_columns(&listing(), 14, false), "docs/  a.txt\nb.txt");
        assert_eq!(format_columns(&listing(), 3, false), "docs/\na.txt\nb.txt");
    }

    #[test]
    fn test_rows_aligned() {
        let nodes = vec![
            OutputNode::new("docs")
                .with_entry_type(EntryType::Directory)
                .with_cells(vec!["drwxr-xr-x".into(), "-".into()]),
            OutputNode::new("a.txt").with_cells(vec!["-rw-r--r--".into(), "12345".into()]),
        ];
        assert_eq!(
            format_rows_aligned(&nodes, false),
            "drwxr-xr-x  -      docs/\n-rw-r--r--  12345  a.txt"
        );
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(format_sentinel(&Sentinel::ClearScreen, false), CLEAR_SCREEN);
        assert_eq!(
            format_sentinel(&Sentinel::ChangeDirectory("/home".into()), false),
            ""
        );
        assert_eq!(
            format_sentinel(&Sentinel::Navigate("/about".into()), false),
            "→ /about"
        );
        assert_eq!(
            format_sentinel(&Sentinel::Theme("toggle".into()), false),
            "theme toggled"
        );
        assert_eq!(
            format_sentinel(&Sentinel::Theme("matrix".into()), false),
            "theme: matrix"
        );
        assert_eq!(
            format_sentinel(
                &Sentinel::Matrix("neo;duration=5000;intensity=high".into()),
                false
            ),
            "matrix: neo"
        );
        assert_eq!(
            format_sentinel(&Sentinel::Matrix("stop".into()), false),
            "matrix stopped"
        );
    }
}
