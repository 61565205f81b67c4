//! End-to-end shell behavior through `Kernel::execute`.

use vfsh_kernel::{
    DefaultSeed, EntryType, FsError, HistoryDirection, Kernel, KernelConfig, NodeKind, OutputKind,
    SeedProvider, Sentinel,
};

async fn kernel() -> Kernel {
    Kernel::transient(KernelConfig::isolated()).await
}

// ============================================================================
// Filesystem scenarios
// ============================================================================

#[test]
fn test_create_read_list() {
    let mut fs = DefaultSeed::default().seed();
    assert_eq!(fs.create_directory("/home/user/docs"), Ok(()));
    assert_eq!(fs.create_file("/home/user/docs/a.txt", "hello"), Ok(()));
    assert_eq!(fs.read_file("/home/user/docs/a.txt"), Ok("hello"));

    let entries = fs.list_directory(Some("/home/user/docs")).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name(), "a.txt");
    assert!(matches!(entries[0].kind(), NodeKind::File { .. }));
}

#[test]
fn test_cd_into_and_back_out() {
    let mut fs = DefaultSeed::default().seed();
    fs.create_directory("/home/user/docs").unwrap();
    fs.change_directory("/home/user/docs").unwrap();
    assert_eq!(fs.current_path(), "/home/user/docs");
    fs.change_directory("..").unwrap();
    assert_eq!(fs.current_path(), "/home/user");
}

#[test]
fn test_duplicate_create_leaves_tree_unchanged() {
    let mut fs = DefaultSeed::default().seed();
    fs.create_file("notes.txt", "first").unwrap();
    let before = fs.root().clone();

    assert_eq!(fs.create_file("notes.txt", "second"), Err(FsError::AlreadyExists));
    assert_eq!(fs.create_directory("notes.txt"), Err(FsError::AlreadyExists));
    assert_eq!(fs.root(), &before);
}

#[test]
fn test_delete_then_lookup() {
    let mut fs = DefaultSeed::default().seed();
    let count = |fs: &vfsh_kernel::VirtualFs| fs.list_directory(None).unwrap().len();
    let before = count(&fs);

    fs.delete_node("welcome.txt").unwrap();
    assert!(fs.lookup("/home/user/welcome.txt").is_none());
    assert_eq!(count(&fs), before - 1);
}

#[test]
fn test_absolute_resolution_ignores_cwd() {
    let mut fs = DefaultSeed::default().seed();
    let from_home = fs.resolve("/home/user/documents");
    fs.change_directory("/").unwrap();
    assert_eq!(fs.resolve("/home/user/documents"), from_home);
}

// ============================================================================
// Dispatch scenarios
// ============================================================================

#[tokio::test]
async fn test_cat_missing_in_empty_directory() {
    let mut kernel = kernel().await;
    kernel.execute("cd documents");
    let out = kernel.execute("cat missing.txt");
    assert_eq!(out.kind, OutputKind::Error);
    assert!(out.text().contains("No such file or directory"));
}

#[tokio::test]
async fn test_unknown_command_hints_help() {
    let mut kernel = kernel().await;
    let out = kernel.execute("frobnicate");
    assert_eq!(out.kind, OutputKind::Error);
    assert!(out.text().contains("frobnicate"));
    assert!(out.text().contains("help"));
}

#[tokio::test]
async fn test_session_walkthrough() {
    let mut kernel = kernel().await;

    assert!(kernel.execute("mkdir projects/site").is_empty());
    assert_eq!(
        kernel.execute("cd projects/site").as_sentinel(),
        Some(&Sentinel::ChangeDirectory("/home/user/projects/site".into()))
    );
    kernel.execute("echo hello world > index.md");
    kernel.execute("echo second line >> index.md");
    assert_eq!(kernel.execute("cat index.md").text(), "hello world\nsecond line");
    assert_eq!(kernel.execute("wc -l index.md").text(), "2 index.md");

    let listing = kernel.execute("ls");
    assert_eq!(listing.text(), "index.md");

    kernel.execute("cd ~");
    assert_eq!(kernel.execute("pwd").text(), "/home/user");
    assert_eq!(
        kernel.execute("find index").text(),
        "/home/user/projects/site/index.md"
    );

    assert!(kernel.execute("rm projects").is_error());
    assert!(!kernel.execute("rm -rf projects").is_error());
    assert!(kernel.execute("ls projects").is_error());
}

#[tokio::test]
async fn test_ls_marks_directories() {
    let mut kernel = kernel().await;
    let out = kernel.execute("ll");
    assert_eq!(out.text(), "documents/  projects/  README.md  welcome.txt");
    let vfsh_kernel::Content::Nodes(nodes) = &out.content else {
        panic!("expected a node listing, got {out:?}");
    };
    assert_eq!(nodes[0].entry_type, EntryType::Directory);
    assert_eq!(nodes[2].entry_type, EntryType::File);
}

#[tokio::test]
async fn test_reset_discards_changes() {
    let mut kernel = kernel().await;
    kernel.execute("touch scratch.txt");
    kernel.execute("cd documents");
    kernel.execute("reset");
    assert_eq!(kernel.cwd(), "/home/user");
    assert!(!kernel.fs().exists("scratch.txt"));
}

#[tokio::test]
async fn test_help_hides_sudo() {
    let mut kernel = kernel().await;
    let help = kernel.execute("help").text();
    assert!(help.starts_with("Available commands:"));
    assert!(help.contains("  ls              List directory contents"));
    assert!(!help.contains("sudo"));
    assert!(!kernel.execute("sudo make me a sandwich").text().is_empty());
}

#[tokio::test]
async fn test_sentinels() {
    let mut kernel = kernel().await;
    assert_eq!(kernel.execute("cls").text(), "CLEAR_TERMINAL");
    assert_eq!(kernel.execute("home").text(), "NAVIGATE:/");
    assert_eq!(kernel.execute("contact").text(), "NAVIGATE:/contact");
    assert_eq!(kernel.execute("theme light").text(), "THEME:light");
    assert_eq!(kernel.execute("matrix stop").text(), "MATRIX:stop");
    assert_eq!(
        kernel.execute("neo code --intensity=low").as_sentinel(),
        Some(&Sentinel::Matrix("code;duration=5000;intensity=low".into()))
    );
}

#[tokio::test]
async fn test_whoami_reports_configured_user() {
    let mut kernel = Kernel::transient(KernelConfig::isolated().with_user("ada")).await;
    assert_eq!(kernel.execute("whoami").text(), "ada");
    assert_eq!(kernel.cwd(), "/home/ada");
}

#[tokio::test]
async fn test_invalid_option_changes_nothing() {
    let mut kernel = kernel().await;
    let out = kernel.execute("rm -x welcome.txt");
    assert_eq!(out.kind, OutputKind::Error);
    assert_eq!(out.text(), "rm: invalid option -- 'x'");
    assert!(kernel.fs().exists("welcome.txt"));

    assert!(kernel.execute("mkdir -z fresh").is_error());
    assert!(!kernel.fs().exists("fresh"));
}

// ============================================================================
// Session
// ============================================================================

#[tokio::test]
async fn test_history_boundaries() {
    let mut kernel = kernel().await;
    for line in ["a", "b", "c"] {
        kernel.execute(line);
    }

    let mut up = || kernel.navigate_history(HistoryDirection::Up);
    assert_eq!(up().as_deref(), Some("c"));
    assert_eq!(up().as_deref(), Some("b"));
    assert_eq!(up().as_deref(), Some("a"));
    assert_eq!(up().as_deref(), Some("a"));
    assert_eq!(
        kernel.navigate_history(HistoryDirection::Down).as_deref(),
        Some("b")
    );
}

#[tokio::test]
async fn test_autocomplete_from_registry() {
    let kernel = kernel().await;

    let all = kernel.autocomplete("h");
    assert_eq!(all.completions, ["help", "history", "home"]);
    assert_eq!(all.common_prefix, "h");

    let one = kernel.autocomplete("hi");
    assert_eq!(one.completions, ["history"]);
    assert_eq!(one.common_prefix, "history");

    assert!(kernel.autocomplete("su").completions.is_empty());
}
