//! Per-session state: command history and completion.

use std::collections::VecDeque;

/// Default number of history entries kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Direction for history recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Towards older entries.
    Up,
    /// Towards newer entries, ending at the empty prompt.
    Down,
}

/// Submitted lines plus a recall cursor.
///
/// The cursor ranges over `0..=len`; `len` is the empty prompt below the
/// newest entry, which is where every submission leaves it.
#[derive(Debug, Clone)]
pub struct Session {
    history: VecDeque<String>,
    cursor: usize,
    limit: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl Session {
    pub fn new(limit: usize) -> Self {
        Self {
            history: VecDeque::new(),
            cursor: 0,
            limit,
        }
    }

    /// Record a submitted line. Blank lines are ignored; the oldest entries
    /// are evicted beyond the limit.
    pub fn add_to_history(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        self.history.push_back(line.to_string());
        while self.history.len() > self.limit {
            self.history.pop_front();
        }
        self.cursor = self.history.len();
    }

    /// Move the recall cursor and return the line to show.
    ///
    /// `Up` stops at the oldest entry and keeps returning it. `Down` past the
    /// newest entry yields the empty prompt once, then `None`.
    pub fn navigate_history(&mut self, direction: HistoryDirection) -> Option<String> {
        match direction {
            HistoryDirection::Up => {
                if self.history.is_empty() {
                    return None;
                }
                self.cursor = self.cursor.saturating_sub(1);
                self.history.get(self.cursor).cloned()
            }
            HistoryDirection::Down => {
                if self.cursor >= self.history.len() {
                    return None;
                }
                self.cursor += 1;
                Some(self.history.get(self.cursor).cloned().unwrap_or_default())
            }
        }
    }

    /// Entries, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.cursor = 0;
    }
}

/// Result of completing a partial command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Every candidate starting with the input, sorted.
    pub completions: Vec<String>,
    /// Longest prefix shared by all completions; the input itself when
    /// nothing matched.
    pub common_prefix: String,
}

/// Complete `partial` against `candidates` (case-sensitive).
pub fn autocomplete<'a>(candidates: impl IntoIterator<Item = &'a str>, partial: &str) -> Completion {
    let mut completions: Vec<String> = candidates
        .into_iter()
        .filter(|c| c.starts_with(partial))
        .map(str::to_string)
        .collect();
    completions.sort();
    completions.dedup();

    let common_prefix = match completions.split_first() {
        None => partial.to_string(),
        Some((first, rest)) => rest
            .iter()
            .fold(first.clone(), |prefix, next| shared_prefix(&prefix, next).to_string()),
    };

    Completion {
        completions,
        common_prefix,
    }
}

fn shared_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map_or_else(|| a.len().min(b.len()), |((i, _), _)| i);
    &a[..end]
}
