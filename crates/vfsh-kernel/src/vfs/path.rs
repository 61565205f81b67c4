//! Path resolution.
//!
//! Paths are resolved to *segment lists*: the names from the root down, with
//! the root itself being the empty list. Resolution is purely textual; it
//! never consults the tree, so `lookup` is a separate step.

use super::node::Node;

/// Resolve `raw` against `current`, expanding `~` to `home`.
///
/// - `/a/b` is absolute.
/// - `~` and `~/rest` start from `home`.
/// - Anything else starts from `current`.
///
/// Empty segments and `.` are skipped, `..` pops (stopping at the root).
pub fn resolve(current: &[String], raw: &str, home: &[String]) -> Vec<String> {
    let (mut segments, rest) = if let Some(rest) = raw.strip_prefix('/') {
        (Vec::new(), rest)
    } else if raw == "~" {
        (home.to_vec(), "")
    } else if let Some(rest) = raw.strip_prefix("~/") {
        (home.to_vec(), rest)
    } else {
        (current.to_vec(), raw)
    };

    for part in rest.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            name => segments.push(name.to_string()),
        }
    }
    segments
}

/// Render a segment list as an absolute path string.
pub fn display(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// Parse an absolute path string into segments (no `..` handling needed
/// for paths produced by [`display`]).
pub fn segments_of(path: &str) -> Vec<String> {
    resolve(&[], path, &[])
}

/// Walk `segments` down from `root`.
///
/// Returns `None` on a missing segment or when a file is hit before the
/// path is exhausted. The empty list yields `root`.
pub fn lookup<'a>(root: &'a Node, segments: &[String]) -> Option<&'a Node> {
    segments
        .iter()
        .try_fold(root, |node, segment| node.child(segment))
}

/// Mutable variant of [`lookup`].
pub(crate) fn lookup_mut<'a>(root: &'a mut Node, segments: &[String]) -> Option<&'a mut Node> {
    let mut node = root;
    for segment in segments {
        node = node.children_mut()?.get_mut(segment)?;
    }
    Some(node)
}
