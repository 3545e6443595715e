//! Edge case and error handling tests for lsr


use harness::{TestDir, run_lsr};

#[cfg(unix)]
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
#[cfg(unix)]
fn test_symlink_to_directory_is_not_recursed() {
    let dir = TestDir::new();
    dir.add_file("real/file.txt", "x");
    symlink(dir.path().join("real"), dir.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-R", "."]);
    assert!(success, "lsr should succeed with directory symlink");
    assert!(stdout.contains("real"), "should show real directory");
    // The link itself is listed, but never descended into
    assert_eq!(stdout.matches("file.txt").count(), 1, "{}", stdout);
}

#[test]
#[cfg(unix)]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("subdir/file.txt", "x");
    symlink("..", dir.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-R", "."]);
    assert!(success, "lsr should not hang on parent symlink");
    assert!(stdout.contains("subdir"), "should show subdir");
    assert!(stdout.contains("file.txt"), "should show file in subdir");
}

#[test]
#[cfg(unix)]
fn test_broken_symlink_is_listed() {
    let dir = TestDir::new();
    dir.add_file("real.txt", "x");
    symlink("nonexistent.txt", dir.path().join("broken"))
        .expect("Failed to create broken symlink");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &[]);
    assert!(success, "lsr should handle broken symlinks");
    assert!(stdout.contains("real.txt"), "should show real file");
    assert!(
        stdout.contains("broken"),
        "broken symlink is still an entry: {}",
        stdout
    );
}

#[test]
#[cfg(unix)]
fn test_self_referential_symlink() {
    let dir = TestDir::new();
    dir.add_file("file.txt", "x");
    symlink("selfref", dir.path().join("selfref"))
        .expect("Failed to create self-referential symlink");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-R", "."]);
    assert!(success, "lsr should handle self-referential symlinks");
    assert!(stdout.contains("file.txt"), "should show regular file");
}

#[test]
#[cfg(unix)]
fn test_symlink_long_format_shows_link_type() {
    let dir = TestDir::new();
    dir.add_file("target.txt", "x");
    symlink("target.txt", dir.path().join("link.txt"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-l"]);
    assert!(success);
    let link_line = stdout
        .lines()
        .find(|l| l.ends_with("link.txt"))
        .expect("link line present");
    assert!(link_line.starts_with('l'), "lstat type char: {}", link_line);
}

// ============================================================================
// Permission Error Handling
// ============================================================================

/// Permission-bit tests are meaningless for root, which bypasses them.
#[cfg(unix)]
fn running_as_root(dir: &TestDir) -> bool {
    use std::os::unix::fs::MetadataExt;
    let probe = dir.add_file(".uid_probe", "");
    fs::metadata(&probe).unwrap().uid() == 0
}

#[test]
#[cfg(unix)]
fn test_unreadable_directory_reports_and_continues() {
    let dir = TestDir::new();
    if running_as_root(&dir) {
        return;
    }
    dir.add_file("readable/file.txt", "x");

    let unreadable = dir.add_dir("unreadable");
    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");

    let (stdout, stderr, success) = run_lsr(dir.path(), &["unreadable", "readable"]);

    // Restore permissions for cleanup
    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    assert!(!success, "exit code must be non-zero");
    assert!(
        stderr.contains("cannot access 'unreadable'") && stderr.contains("Permission denied"),
        "stderr: {}",
        stderr
    );
    assert!(stdout.contains("file.txt"), "readable path listed: {}", stdout);
}

#[test]
#[cfg(unix)]
fn test_unreadable_subdirectory_does_not_abort_recursion() {
    let dir = TestDir::new();
    if running_as_root(&dir) {
        return;
    }
    dir.add_file("tree/ok/a.txt", "a");
    dir.add_file("tree/zz/b.txt", "b");

    let locked = dir.path().join("tree/locked");
    fs::create_dir(&locked).unwrap();
    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&locked, perms).unwrap();

    let (stdout, stderr, success) = run_lsr(dir.path(), &["-R", "tree"]);

    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&locked, perms).unwrap();

    assert!(!success);
    assert!(stderr.contains("Permission denied"), "{}", stderr);
    assert!(stdout.contains("a.txt"), "sibling before listed: {}", stdout);
    assert!(stdout.contains("b.txt"), "sibling after listed: {}", stdout);
}

// ============================================================================
// Unusual Names and Shapes
// ============================================================================

#[test]
fn test_names_with_spaces_and_unicode() {
    let dir = TestDir::new();
    dir.add_file("with space.txt", "x");
    dir.add_file("naïve.txt", "x");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("with space.txt"), "{}", stdout);
    assert!(stdout.contains("naïve.txt"), "{}", stdout);
}

#[test]
fn test_zero_byte_files_sort_last_by_size() {
    let dir = TestDir::new();
    dir.add_file_with_size("empty.txt", 0);
    dir.add_file_with_size("full.txt", 100);

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-S"]);
    assert!(success);
    assert_eq!(stdout, "full.txt\nempty.txt\n");
}

#[test]
fn test_deeply_nested_recursion() {
    let dir = TestDir::new();
    dir.add_file("a/b/c/d/e/leaf.txt", "x");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-R", "a"]);
    assert!(success);
    assert!(stdout.contains("leaf.txt"), "{}", stdout);
    assert_eq!(stdout.matches("e:").count(), 1, "{}", stdout);
}

#[test]
fn test_directory_containing_only_hidden_entries() {
    let dir = TestDir::new();
    dir.add_file(".one", "1");
    dir.add_file(".two", "2");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &[]);
    assert!(success);
    assert_eq!(stdout, "", "nothing visible without -a");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-a"]);
    assert!(success);
    assert_eq!(stdout, ".one\n.two\n");
}

#[test]
fn test_hidden_directory_recursed_with_all() {
    let dir = TestDir::new();
    dir.add_file(".config/settings.toml", "k = 1");

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-R", "-a", "."]);
    assert!(success);
    assert!(stdout.contains("settings.toml"), "{}", stdout);

    let (stdout, _stderr, success) = run_lsr(dir.path(), &["-R", "."]);
    assert!(success);
    assert!(
        !stdout.contains("settings.toml"),
        "hidden dirs are not descended into without -a: {}",
        stdout
    );
}

#[test]
fn test_all_operands_missing_still_nonzero_exit() {
    let dir = TestDir::new();

    let (stdout, stderr, success) = run_lsr(dir.path(), &["ghost1", "ghost2"]);
    assert!(!success);
    assert_eq!(stderr.matches("cannot access").count(), 2, "{}", stderr);
    assert_eq!(stdout, "");
}
