//! Host instructions carried by `system` outputs.
//!
//! The shell core only emits intent; the embedding application performs the
//! effect. Each sentinel has a stable string wire form so hosts written in
//! other languages can match on it:
//!
//! | Sentinel | Wire form |
//! |----------|-----------|
//! | `ClearScreen` | `CLEAR_TERMINAL` |
//! | `ChangeDirectory("/home/user")` | `CHANGE_DIRECTORY:/home/user` |
//! | `Navigate("/about")` | `NAVIGATE:/about` |
//! | `Theme("dark")` | `THEME:dark` |
//! | `Matrix("stop")` | `MATRIX:stop` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CLEAR: &str = "CLEAR_TERMINAL";
const CHANGE_DIRECTORY: &str = "CHANGE_DIRECTORY:";
const NAVIGATE: &str = "NAVIGATE:";
const THEME: &str = "THEME:";
const MATRIX: &str = "MATRIX:";

/// A machine-readable instruction for the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Sentinel {
    /// Clear the terminal screen.
    ClearScreen,
    /// The working directory changed to this absolute path.
    ChangeDirectory(String),
    /// Route the host application to this page.
    Navigate(String),
    /// Switch theme (`toggle` when no name was given).
    Theme(String),
    /// Start (`mode;duration=ms;intensity=level`) or `stop` the matrix rain effect.
    Matrix(String),
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentinel::ClearScreen => f.write_str(CLEAR),
            Sentinel::ChangeDirectory(path) => write!(f, "{CHANGE_DIRECTORY}{path}"),
            Sentinel::Navigate(route) => write!(f, "{NAVIGATE}{route}"),
            Sentinel::Theme(name) => write!(f, "{THEME}{name}"),
            Sentinel::Matrix(effect) => write!(f, "{MATRIX}{effect}"),
        }
    }
}

/// Error for strings that are not a known sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sentinel: {0}")]
pub struct UnknownSentinel(pub String);

impl FromStr for Sentinel {
    type Err = UnknownSentinel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == CLEAR {
            return Ok(Sentinel::ClearScreen);
        }
        if let Some(path) = s.strip_prefix(CHANGE_DIRECTORY) {
            return Ok(Sentinel::ChangeDirectory(path.to_string()));
        }
        if let Some(route) = s.strip_prefix(NAVIGATE) {
            return Ok(Sentinel::Navigate(route.to_string()));
        }
        if let Some(name) = s.strip_prefix(THEME) {
            return Ok(Sentinel::Theme(name.to_string()));
        }
        if let Some(effect) = s.strip_prefix(MATRIX) {
            return Ok(Sentinel::Matrix(effect.to_string()));
        }
        Err(UnknownSentinel(s.to_string()))
    }
}

impl From<Sentinel> for String {
    fn from(sentinel: Sentinel) -> Self {
        sentinel.to_string()
    }
}

impl TryFrom<String> for Sentinel {
    type Error = UnknownSentinel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
