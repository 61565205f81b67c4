//! Initial filesystem contents.
//!
//! The seed is used on first start, whenever persisted state cannot be
//! restored, and by `reset`. Embedders swap in their own tree by
//! implementing [`SeedProvider`].

use tracing::warn;

use crate::vfs::{is_valid_name, Node, VirtualFs};

/// Owner of the home directory when none (or an unusable one) is given.
pub const DEFAULT_USER: &str = "user";

/// `user` if it can name a directory, otherwise [`DEFAULT_USER`].
pub fn home_owner(user: impl Into<String>) -> String {
    let user = user.into();
    if is_valid_name(&user) {
        user
    } else {
        warn!(user = %user, "not a valid directory name, using {DEFAULT_USER}");
        DEFAULT_USER.to_string()
    }
}

/// Builds the filesystem a fresh session starts from.
pub trait SeedProvider: Send + Sync {
    /// A brand-new filesystem. Called again for every reset.
    fn seed(&self) -> VirtualFs;
}

const README: &str = "# Welcome to vfsh\n\nType `help` for a list of available commands.";

const WELCOME: &str = "Welcome to vfsh!\n\n\
This is an in-memory shell with:\n\
- A persistent virtual file system\n\
- Command history and tab completion\n\
- Multiple themes\n\
\n\
Enjoy exploring!";

/// `/home/<user>` with a couple of starter files.
#[derive(Debug, Clone)]
pub struct DefaultSeed {
    user: String,
}

impl DefaultSeed {
    /// Seed for `user`. Names that cannot label a directory fall back to
    /// [`DEFAULT_USER`], so the tree always survives a save and reload.
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: home_owner(user),
        }
    }

    /// Segments of the home directory this seed creates.
    pub fn home(&self) -> Vec<String> {
        vec!["home".to_string(), self.user.clone()]
    }
}

impl Default for DefaultSeed {
    fn default() -> Self {
        Self::new(DEFAULT_USER)
    }
}

impl SeedProvider for DefaultSeed {
    fn seed(&self) -> VirtualFs {
        let user = Node::directory(self.user.as_str())
            .with_child(Node::directory("documents"))
            .with_child(Node::directory("projects"))
            .with_child(Node::file("README.md", README))
            .with_child(Node::file("welcome.txt", WELCOME));
        let home = self.home();
        VirtualFs::with_tree([Node::directory("home").with_child(user)], home.clone(), home)
    }
}
