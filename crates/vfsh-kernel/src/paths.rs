//! XDG Base Directory paths for vfsh.
//!
//! | Purpose | XDG Variable | vfsh path |
//! |---------|--------------|-----------|
//! | Data | `$XDG_DATA_HOME` | `~/.local/share/vfsh` |
//! | Config | `$XDG_CONFIG_HOME` | `~/.config/vfsh` |
//!
//! The persisted filesystem lives in [`state_dir`]; the REPL's line
//! history in [`history_path`].

use std::path::PathBuf;

use directories::BaseDirs;

const APP: &str = "vfsh";

/// The user's home directory: `$HOME`, or `/tmp` if unset.
pub fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

/// `$XDG_DATA_HOME` or `~/.local/share`.
pub fn xdg_data_home() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| home_dir().join(".local").join("share"))
}

/// `$XDG_CONFIG_HOME` or `~/.config`.
pub fn xdg_config_home() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| home_dir().join(".config"))
}

/// Persistent vfsh data.
pub fn data_dir() -> PathBuf {
    xdg_data_home().join(APP)
}

/// Directory handed to `FileStorage`.
pub fn state_dir() -> PathBuf {
    data_dir().join("state")
}

/// REPL line history.
pub fn history_path() -> PathBuf {
    data_dir().join("history.txt")
}

pub fn config_dir() -> PathBuf {
    xdg_config_home().join(APP)
}

/// `config.toml` inside [`config_dir`].
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}
