//! Command output model.
//!
//! Every command produces exactly one `Output`. The shell core never renders
//! anything itself; hosts (the REPL, a web terminal, a test harness) decide
//! how each `Content` variant and `OutputKind` is drawn.

use serde::{Deserialize, Serialize};

use crate::sentinel::Sentinel;

/// Severity / purpose of an output, used by hosts for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Regular command output.
    #[default]
    Info,
    /// A confirmation that something worked.
    Success,
    /// The command failed; `content` says why.
    Error,
    /// The command ran but something deserves attention.
    Warning,
    /// Machine-readable instruction for the host (see [`Sentinel`]).
    System,
}

/// Entry type for rendering hints (colors, icons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Generic text content.
    #[default]
    Text,
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

/// One row of a structured listing.
///
/// `cells` carries extra columns (permissions, size, date for `ls -l`) and
/// is empty for plain listings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputNode {
    /// Primary identifier (file name).
    pub name: String,
    /// Rendering hint.
    pub entry_type: EntryType,
    /// Additional columns, rendered before the name.
    pub cells: Vec<String>,
}

impl OutputNode {
    /// Create a new node with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the entry type for rendering hints.
    pub fn with_entry_type(mut self, entry_type: EntryType) -> Self {
        self.entry_type = entry_type;
        self
    }

    /// Set additional columns for tabular output.
    pub fn with_cells(mut self, cells: Vec<String>) -> Self {
        self.cells = cells;
        self
    }

    /// Name with a trailing `/` for directories.
    pub fn display_name(&self) -> String {
        match self.entry_type {
            EntryType::Directory => format!("{}/", self.name),
            _ => self.name.clone(),
        }
    }
}

/// The payload of an [`Output`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Content {
    /// Plain (or rich, see [`Output::rich`]) text.
    Text(String),
    /// A structured listing the host may lay out in columns or a table.
    Nodes(Vec<OutputNode>),
    /// An instruction for the host application.
    Sentinel(Sentinel),
}

impl Content {
    /// Canonical plain-text rendering.
    ///
    /// - Text: as-is
    /// - Nodes without cells: names separated by two spaces
    /// - Nodes with cells: one line per node, cells then name
    /// - Sentinel: its wire form
    pub fn to_canonical_string(&self) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Nodes(nodes) => {
                if nodes.iter().any(|n| !n.cells.is_empty()) {
                    nodes
                        .iter()
                        .map(|n| {
                            let mut line = n.cells.join(" ");
                            if !line.is_empty() {
                                line.push(' ');
                            }
                            line.push_str(&n.display_name());
                            line
                        })
                        .collect::<Vec<_>>()
                        .join("\n")
                } else {
                    nodes
                        .iter()
                        .map(OutputNode::display_name)
                        .collect::<Vec<_>>()
                        .join("  ")
                }
            }
            Content::Sentinel(sentinel) => sentinel.to_string(),
        }
    }
}

/// The result of dispatching one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// What to show (or do).
    pub content: Content,
    /// How to present it.
    pub kind: OutputKind,
    /// Content is markup the host may render richly.
    #[serde(default)]
    pub rich: bool,
    /// Host may reveal the content progressively.
    #[serde(default)]
    pub animate: bool,
}

impl Output {
    fn new(content: Content, kind: OutputKind) -> Self {
        Self {
            content,
            kind,
            rich: false,
            animate: false,
        }
    }

    /// Informational text output.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Content::Text(text.into()), OutputKind::Info)
    }

    /// Success text output.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Content::Text(text.into()), OutputKind::Success)
    }

    /// Error text output.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Content::Text(text.into()), OutputKind::Error)
    }

    /// Warning text output.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Content::Text(text.into()), OutputKind::Warning)
    }

    /// A host instruction.
    pub fn system(sentinel: Sentinel) -> Self {
        Self::new(Content::Sentinel(sentinel), OutputKind::System)
    }

    /// A structured listing.
    pub fn nodes(nodes: Vec<OutputNode>) -> Self {
        Self::new(Content::Nodes(nodes), OutputKind::Info)
    }

    /// Empty no-op output (blank input, silent commands).
    pub fn empty() -> Self {
        Self::info("")
    }

    /// Mark the content as rich text.
    pub fn with_rich(mut self) -> Self {
        self.rich = true;
        self
    }

    /// Ask the host to animate the output.
    pub fn with_animate(mut self) -> Self {
        self.animate = true;
        self
    }

    /// True for error outputs.
    pub fn is_error(&self) -> bool {
        self.kind == OutputKind::Error
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        match &self.content {
            Content::Text(text) => text.is_empty(),
            Content::Nodes(nodes) => nodes.is_empty(),
            Content::Sentinel(_) => false,
        }
    }

    /// The sentinel payload, if this is a system output.
    pub fn as_sentinel(&self) -> Option<&Sentinel> {
        match &self.content {
            Content::Sentinel(sentinel) => Some(sentinel),
            _ => None,
        }
    }

    /// Plain-text rendering of the content.
    pub fn text(&self) -> String {
        self.content.to_canonical_string()
    }
}
