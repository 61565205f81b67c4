//! The filesystem aggregate: one tree, one working directory.
//!
//! Every mutating operation validates completely before touching the tree,
//! so a failed call leaves everything exactly as it was. Successful
//! mutations bump [`VirtualFs::revision`], which the kernel watches to know
//! when to persist.

use regex::{Regex, RegexBuilder};

use super::error::{FsError, FsResult};
use super::node::{is_valid_name, Node, NodeKind};
use super::path;

/// In-memory filesystem with a current directory and a home for `~`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFs {
    root: Node,
    cwd: Vec<String>,
    home: Vec<String>,
    revision: u64,
}

impl VirtualFs {
    /// Assemble a filesystem from a tree.
    ///
    /// `cwd` is clamped to its deepest prefix that is an existing directory,
    /// so the working directory always resolves.
    pub fn new(root: Node, cwd: Vec<String>, home: Vec<String>) -> FsResult<Self> {
        if !root.is_dir() {
            return Err(FsError::invalid("root must be a directory"));
        }
        let cwd = deepest_directory(&root, &cwd);
        Ok(Self {
            root,
            cwd,
            home,
            revision: 0,
        })
    }

    /// Build a filesystem whose root holds `top_level`.
    pub fn with_tree(
        top_level: impl IntoIterator<Item = Node>,
        cwd: Vec<String>,
        home: Vec<String>,
    ) -> Self {
        let root = top_level
            .into_iter()
            .fold(Node::root(), |root, child| root.with_child(child));
        let cwd = deepest_directory(&root, &cwd);
        Self {
            root,
            cwd,
            home,
            revision: 0,
        }
    }

    /// Resolve a raw path against the working directory.
    pub fn resolve(&self, raw: &str) -> Vec<String> {
        path::resolve(&self.cwd, raw, &self.home)
    }

    /// Look up a raw path.
    pub fn lookup(&self, raw: &str) -> Option<&Node> {
        path::lookup(&self.root, &self.resolve(raw))
    }

    pub fn exists(&self, raw: &str) -> bool {
        self.lookup(raw).is_some()
    }

    /// Absolute path of the working directory.
    pub fn current_path(&self) -> String {
        path::display(&self.cwd)
    }

    pub fn cwd(&self) -> &[String] {
        &self.cwd
    }

    pub fn home(&self) -> &[String] {
        &self.home
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Count of committed mutations since this value was built.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swap in a different tree (used by `reset`), counting it as a mutation.
    pub fn replace(&mut self, fresh: VirtualFs) {
        let revision = self.revision + 1;
        *self = fresh;
        self.revision = revision;
    }

    /// Create a file. The parent must exist and the name must be free.
    pub fn create_file(&mut self, raw: &str, content: impl Into<String>) -> FsResult<()> {
        let content = content.into();
        self.insert(raw, |name| Node::file(name, content))
    }

    /// Create an empty directory. Parents are not created.
    pub fn create_directory(&mut self, raw: &str) -> FsResult<()> {
        self.insert(raw, Node::directory)
    }

    /// Remove a node and everything below it.
    ///
    /// The root, the working directory and its ancestors cannot be removed.
    pub fn delete_node(&mut self, raw: &str) -> FsResult<()> {
        let segments = self.resolve(raw);
        let Some((name, parent)) = segments.split_last() else {
            return Err(FsError::invalid("cannot remove root directory"));
        };
        if path::lookup(&self.root, &segments).is_none() {
            return Err(FsError::NotFound);
        }
        if self.cwd.starts_with(&segments) {
            return Err(FsError::invalid(
                "cannot remove the current directory or one of its parents",
            ));
        }

        let dir = dir_mut(&mut self.root, parent)?;
        dir.children_mut()
            .and_then(|children| children.remove(name))
            .ok_or(FsError::NotFound)?;
        dir.touch();
        self.commit();
        Ok(())
    }

    /// Replace the content of an existing file.
    pub fn write_file(&mut self, raw: &str, content: impl Into<String>) -> FsResult<()> {
        let content = content.into();
        self.edit_file(raw, |existing| *existing = content)
    }

    /// Append to an existing file verbatim.
    pub fn append_file(&mut self, raw: &str, content: &str) -> FsResult<()> {
        self.edit_file(raw, |existing| existing.push_str(content))
    }

    /// Bump the modification time of an existing node.
    pub fn touch(&mut self, raw: &str) -> FsResult<()> {
        let segments = self.resolve(raw);
        let node = path::lookup_mut(&mut self.root, &segments).ok_or(FsError::NotFound)?;
        node.touch();
        self.commit();
        Ok(())
    }

    /// Read a file's content.
    pub fn read_file(&self, raw: &str) -> FsResult<&str> {
        let node = self.lookup(raw).ok_or(FsError::NotFound)?;
        node.content().ok_or(FsError::IsADirectory)
    }

    /// Direct children of a directory (the working directory by default),
    /// directories first, then by name.
    pub fn list_directory(&self, raw: Option<&str>) -> FsResult<Vec<&Node>> {
        let node = self.target(raw)?;
        if !node.is_dir() {
            return Err(FsError::NotADirectory);
        }
        Ok(node.sorted_children())
    }

    /// Change the working directory. Returns the new absolute path.
    pub fn change_directory(&mut self, raw: &str) -> FsResult<String> {
        let segments = self.resolve(raw);
        let node = path::lookup(&self.root, &segments).ok_or(FsError::NotFound)?;
        if !node.is_dir() {
            return Err(FsError::NotADirectory);
        }
        self.cwd = segments;
        self.commit();
        Ok(self.current_path())
    }

    /// Box-drawing rendering of a subtree, one entry per line.
    pub fn generate_tree(&self, raw: Option<&str>) -> FsResult<Vec<String>> {
        let node = self.target(raw)?;
        let mut lines = Vec::new();
        render_tree(node, "", true, &mut lines);
        Ok(lines)
    }

    /// Absolute paths of files below the directory `raw` whose name matches
    /// `pattern`.
    ///
    /// `*` matches any run of characters; everything else is literal.
    /// Matching is case-insensitive and may hit anywhere in the name.
    pub fn find_files(&self, pattern: &str, raw: Option<&str>) -> FsResult<Vec<String>> {
        let regex = name_pattern(pattern)?;
        let mut segments = match raw {
            Some(raw) => self.resolve(raw),
            None => self.cwd.clone(),
        };
        let start = path::lookup(&self.root, &segments).ok_or(FsError::NotFound)?;
        if !start.is_dir() {
            return Err(FsError::NotADirectory);
        }
        let mut found = Vec::new();
        collect_matches(start, &mut segments, &regex, &mut found);
        Ok(found)
    }

    fn commit(&mut self) {
        self.revision += 1;
    }

    fn target(&self, raw: Option<&str>) -> FsResult<&Node> {
        let node = match raw {
            Some(raw) => self.lookup(raw),
            None => path::lookup(&self.root, &self.cwd),
        };
        node.ok_or(FsError::NotFound)
    }

    fn insert(&mut self, raw: &str, make: impl FnOnce(String) -> Node) -> FsResult<()> {
        let segments = self.resolve(raw);
        let Some((name, parent)) = segments.split_last() else {
            return Err(FsError::invalid("cannot create the root directory"));
        };
        if !is_valid_name(name) {
            return Err(FsError::invalid(format!("invalid name '{name}'")));
        }

        let dir = dir_mut(&mut self.root, parent)?;
        let children = dir.children_mut().ok_or(FsError::NotADirectory)?;
        if children.contains_key(name) {
            return Err(FsError::AlreadyExists);
        }
        children.insert(name.clone(), make(name.clone()));
        dir.touch();
        self.commit();
        Ok(())
    }

    fn edit_file(&mut self, raw: &str, edit: impl FnOnce(&mut String)) -> FsResult<()> {
        let segments = self.resolve(raw);
        let node = path::lookup_mut(&mut self.root, &segments).ok_or(FsError::NotFound)?;
        match &mut node.kind {
            NodeKind::File { content } => edit(content),
            NodeKind::Directory { .. } => return Err(FsError::IsADirectory),
        }
        node.touch();
        self.commit();
        Ok(())
    }
}

/// Walk to a directory, distinguishing a missing segment from a file in the way.
fn dir_mut<'a>(root: &'a mut Node, segments: &[String]) -> FsResult<&'a mut Node> {
    let mut node = root;
    for segment in segments {
        let children = node.children_mut().ok_or(FsError::NotADirectory)?;
        node = children.get_mut(segment).ok_or(FsError::NotFound)?;
    }
    if node.is_dir() {
        Ok(node)
    } else {
        Err(FsError::NotADirectory)
    }
}

fn deepest_directory(root: &Node, segments: &[String]) -> Vec<String> {
    let mut node = root;
    let mut reached = Vec::new();
    for segment in segments {
        match node.child(segment) {
            Some(child) if child.is_dir() => {
                reached.push(segment.clone());
                node = child;
            }
            _ => break,
        }
    }
    reached
}

fn render_tree(node: &Node, prefix: &str, is_last: bool, lines: &mut Vec<String>) {
    let connector = if is_last { "└── " } else { "├── " };
    let slash = if node.is_dir() && !node.name().ends_with('/') {
        "/"
    } else {
        ""
    };
    lines.push(format!("{prefix}{connector}{}{slash}", node.name()));

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    let children = node.sorted_children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        render_tree(child, &child_prefix, i + 1 == count, lines);
    }
}

fn name_pattern(pattern: &str) -> FsResult<Regex> {
    let source = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map_err(|e| FsError::invalid(format!("invalid pattern: {e}")))
}

fn collect_matches(node: &Node, segments: &mut Vec<String>, regex: &Regex, found: &mut Vec<String>) {
    match node.kind() {
        NodeKind::File { .. } => {
            if regex.is_match(node.name()) {
                found.push(path::display(segments));
            }
        }
        NodeKind::Directory { children } => {
            for (name, child) in children {
                segments.push(name.clone());
                collect_matches(child, segments, regex, found);
                segments.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> VirtualFs {
        let root = Node::root().with_child(
            Node::directory("home").with_child(
                Node::directory("user")
                    .with_child(Node::directory("documents"))
                    .with_child(Node::directory("projects"))
                    .with_child(Node::file("README.md", "# hello"))
                    .with_child(Node::file("welcome.txt", "hi there")),
            ),
        );
        let home = segs(&["home", "user"]);
        VirtualFs::new(root, home.clone(), home).unwrap()
    }

    #[test]
    fn new_clamps_dangling_cwd() {
        let root = Node::root().with_child(Node::directory("tmp"));
        let fs = VirtualFs::new(root, segs(&["tmp", "gone", "deeper"]), vec![]).unwrap();
        assert_eq!(fs.current_path(), "/tmp");
    }

    #[test]
    fn new_rejects_file_root() {
        let err = VirtualFs::new(Node::file("/", ""), vec![], vec![]).unwrap_err();
        assert!(matches!(err, FsError::InvalidOperation(_)));
    }

    #[test]
    fn create_and_read_file() {
        let mut fs = sample();
        fs.create_file("notes.txt", "hello").unwrap();
        assert_eq!(fs.read_file("/home/user/notes.txt"), Ok("hello"));
        assert_eq!(fs.revision(), 1);
    }

    #[test]
    fn create_reports_collisions_and_missing_parents() {
        let mut fs = sample();
        assert_eq!(fs.create_file("README.md", ""), Err(FsError::AlreadyExists));
        assert_eq!(fs.create_directory("documents"), Err(FsError::AlreadyExists));
        assert_eq!(fs.create_file("nope/a.txt", ""), Err(FsError::NotFound));
        assert_eq!(fs.create_file("README.md/a.txt", ""), Err(FsError::NotADirectory));
        assert!(matches!(fs.create_directory("/"), Err(FsError::InvalidOperation(_))));
        assert_eq!(fs.revision(), 0);
    }

    #[test]
    fn create_touches_parent() {
        let mut fs = sample();
        let before = fs.lookup("~").unwrap().modified_at();
        fs.create_directory("~/src").unwrap();
        assert!(fs.lookup("~").unwrap().modified_at() >= before);
        assert!(fs.lookup("~/src").unwrap().is_dir());
    }

    #[test]
    fn delete_then_lookup() {
        let mut fs = sample();
        fs.create_file("documents/a.txt", "x").unwrap();
        fs.delete_node("documents").unwrap();
        assert!(!fs.exists("documents"));
        assert!(!fs.exists("documents/a.txt"));
    }

    #[test]
    fn delete_refuses_root_cwd_and_ancestors() {
        let mut fs = sample();
        fs.change_directory("documents").unwrap();
        for target in ["/", ".", "..", "/home"] {
            assert!(
                matches!(fs.delete_node(target), Err(FsError::InvalidOperation(_))),
                "{target} should be refused"
            );
        }
        assert_eq!(fs.delete_node("missing"), Err(FsError::NotFound));
        assert_eq!(fs.current_path(), "/home/user/documents");
    }

    #[test]
    fn write_and_append() {
        let mut fs = sample();
        fs.write_file("welcome.txt", "new").unwrap();
        fs.append_file("welcome.txt", "\nmore").unwrap();
        assert_eq!(fs.read_file("welcome.txt"), Ok("new\nmore"));
        assert_eq!(fs.write_file("documents", "x"), Err(FsError::IsADirectory));
        assert_eq!(fs.write_file("missing", "x"), Err(FsError::NotFound));
    }

    #[test]
    fn read_errors() {
        let fs = sample();
        assert_eq!(fs.read_file("documents"), Err(FsError::IsADirectory));
        assert_eq!(fs.read_file("nope.txt"), Err(FsError::NotFound));
    }

    #[test]
    fn list_directory_orders_and_validates() {
        let fs = sample();
        let names: Vec<_> = fs
            .list_directory(None)
            .unwrap()
            .iter()
            .map(|n| n.name().to_string())
            .collect();
        assert_eq!(names, ["documents", "projects", "README.md", "welcome.txt"]);
        assert!(fs.list_directory(Some("documents")).unwrap().is_empty());
        assert_eq!(fs.list_directory(Some("README.md")).unwrap_err(), FsError::NotADirectory);
        assert_eq!(fs.list_directory(Some("nope")).unwrap_err(), FsError::NotFound);
    }

    #[test]
    fn change_directory() {
        let mut fs = sample();
        assert_eq!(fs.change_directory("/home").unwrap(), "/home");
        assert_eq!(fs.change_directory("~/projects").unwrap(), "/home/user/projects");
        assert_eq!(fs.change_directory("/nope"), Err(FsError::NotFound));
        assert_eq!(fs.change_directory("../README.md"), Err(FsError::NotADirectory));
        assert_eq!(fs.current_path(), "/home/user/projects");
        assert_eq!(fs.revision(), 2);
    }

    #[test]
    fn tree_rendering() {
        let mut fs = sample();
        fs.create_file("documents/a.txt", "").unwrap();
        let lines = fs.generate_tree(None).unwrap();
        assert_eq!(
            lines,
            [
                "└── user/",
                "    ├── documents/",
                "    │   └── a.txt",
                "    ├── projects/",
                "    ├── README.md",
                "    └── welcome.txt",
            ]
        );
        assert_eq!(fs.generate_tree(Some("/home")).unwrap()[0], "└── home/");
        assert_eq!(fs.generate_tree(Some("/")).unwrap()[0], "└── /");
        assert_eq!(fs.generate_tree(Some("nope")), Err(FsError::NotFound));
    }

    #[test]
    fn find_is_unanchored_and_case_insensitive() {
        let mut fs = sample();
        fs.create_file("documents/notes.MD", "").unwrap();
        // children are visited in name order, and uppercase sorts first
        assert_eq!(
            fs.find_files("md", None).unwrap(),
            ["/home/user/README.md", "/home/user/documents/notes.MD"]
        );
        assert_eq!(fs.find_files("*.txt", Some("/")).unwrap(), ["/home/user/welcome.txt"]);
        // only files match, and regex metacharacters are literal
        assert!(fs.find_files("documents", None).unwrap().is_empty());
        assert!(fs.find_files("w.lcome", None).unwrap().is_empty());
        assert_eq!(fs.find_files("x", Some("/nope")), Err(FsError::NotFound));
        assert_eq!(
            fs.find_files("README", Some("README.md")),
            Err(FsError::NotADirectory)
        );
    }

    #[test]
    fn replace_counts_as_mutation() {
        let mut fs = sample();
        fs.create_file("x", "").unwrap();
        fs.replace(sample());
        assert!(!fs.exists("x"));
        assert_eq!(fs.revision(), 2);
    }
}
