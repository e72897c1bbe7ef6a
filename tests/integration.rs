//! Integration tests for treecat


use harness::{TestDir, run_treecat, treecat_command};

#[test]
fn test_tree_and_contents_shown() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "alpha\n");
    dir.add_file("sub/b.txt", "beta\n");

    let (stdout, _stderr, success) = run_treecat(dir.path(), &["--native"]);
    assert!(success, "treecat should succeed");

    assert!(stdout.contains("--- Directory Tree for:"));
    assert!(stdout.contains("a.txt"), "tree should show a.txt");
    assert!(stdout.contains("sub/"), "tree should show the directory");

    assert!(stdout.contains("--- File Contents (Recursive) ---"));
    assert!(stdout.contains("--- a.txt ---"));
    assert!(stdout.contains("alpha"));
    assert!(stdout.contains("--- sub/b.txt ---"));
    assert!(stdout.contains("beta"));
    assert!(stdout.contains("--- End of Listing ---"));
}

#[test]
fn test_exclude_hides_on_both_axes() {
    let dir = TestDir::new();
    dir.add_file("main.rs", "fn main() {}\n");
    dir.add_file("debug.log", "log line\n");

    let (stdout, _stderr, success) = run_treecat(dir.path(), &["--native", "-e", "*.log"]);
    assert!(success);
    assert!(stdout.contains("main.rs"));
    assert!(
        !stdout.contains("debug.log"),
        "excluded file should be absent from tree and contents: {}",
        stdout
    );
}

#[test]
fn test_directory_exclude_prunes_tree_and_dump() {
    let dir = TestDir::new();
    dir.add_file("src/a.cpp", "int a;\n");
    dir.add_file("build/out.js", "var out;\n");

    let (stdout, _stderr, success) = run_treecat(dir.path(), &["--native", "-e", "build/"]);
    assert!(success);
    assert!(stdout.contains("a.cpp"));
    assert!(!stdout.contains("build"), "pruned directory: {}", stdout);
    assert!(!stdout.contains("var out;"));
}

#[test]
fn test_print_include_overrides_print_exclude() {
    // The end-to-end scenario: exclude build/, include build/main.js on
    // the print axis only. The directory is still traversed (list axis
    // is empty), and the included file's contents survive the exclusion.
    let dir = TestDir::new();
    dir.add_file("src/a.cpp", "int a;\n");
    dir.add_file("src/a.cpp.bak", "int a_old;\n");
    dir.add_file("build/out.js", "var out;\n");
    dir.add_file("build/main.js", "var main;\n");

    let (stdout, _stderr, success) = run_treecat(
        dir.path(),
        &["--native", "--pe", "build/", "--pi", "build/main.js"],
    );
    assert!(success);

    assert!(stdout.contains("--- src/a.cpp ---"));
    assert!(stdout.contains("--- src/a.cpp.bak ---"));
    assert!(stdout.contains("--- build/main.js ---"));
    assert!(stdout.contains("var main;"));
    assert!(!stdout.contains("--- build/out.js ---"));
    assert!(!stdout.contains("var out;"));

    // The print exclusion does not touch the tree.
    assert!(stdout.contains("build/"), "tree still lists build: {}", stdout);
}

#[test]
fn test_print_include_only_mode() {
    let dir = TestDir::new();
    dir.add_file("readme.md", "# readme\n");
    dir.add_file("notes.txt", "notes\n");

    let (stdout, _stderr, success) = run_treecat(dir.path(), &["--native", "--pi", "*.md"]);
    assert!(success);

    // Tree is unfiltered, contents are include-only.
    assert!(stdout.contains("notes.txt"));
    assert!(stdout.contains("--- readme.md ---"));
    assert!(stdout.contains("# readme"));
    assert!(!stdout.contains("--- notes.txt ---"));
}

#[test]
fn test_list_exclude_prunes_dump_traversal() {
    // Hiding a directory on the list axis stops the dump phase from
    // descending into it, even though the print axis would allow the
    // files inside.
    let dir = TestDir::new();
    dir.add_file("kept.txt", "kept\n");
    dir.add_file("secret/inner.txt", "hidden\n");

    let (stdout, _stderr, success) = run_treecat(
        dir.path(),
        &["--native", "--le", "secret/", "--pi", "*"],
    );
    assert!(success);
    assert!(stdout.contains("--- kept.txt ---"));
    assert!(!stdout.contains("secret"), "pruned subtree: {}", stdout);
    assert!(!stdout.contains("hidden"));
}

#[test]
fn test_legacy_trailing_patterns_are_print_includes() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "alpha\n");
    dir.add_file("b.md", "bravo\n");

    let (stdout, _stderr, success) = run_treecat(dir.path(), &["--native", ".", "*.txt"]);
    assert!(success);
    assert!(stdout.contains("--- a.txt ---"));
    assert!(!stdout.contains("--- b.md ---"));
    // The tree still lists everything.
    assert!(stdout.contains("b.md"));
}

#[test]
fn test_pattern_as_first_argument_defaults_to_cwd() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "alpha\n");
    dir.add_file("b.md", "bravo\n");

    let (stdout, _stderr, success) = run_treecat(dir.path(), &["--native", "*.txt"]);
    assert!(success);
    assert!(stdout.contains("--- a.txt ---"));
    assert!(!stdout.contains("--- b.md ---"));
}

#[test]
fn test_output_is_deterministic() {
    let dir = TestDir::new();
    dir.add_file("b.txt", "b\n");
    dir.add_file("a.txt", "a\n");
    dir.add_file("sub/c.txt", "c\n");

    let (first, _, _) = run_treecat(dir.path(), &["--native"]);
    let (second, _, _) = run_treecat(dir.path(), &["--native"]);
    assert_eq!(first, second);

    // Filename order within a directory.
    let a = first.find("--- a.txt ---").expect("a.txt dumped");
    let b = first.find("--- b.txt ---").expect("b.txt dumped");
    assert!(a < b, "files dump in filename order");
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "alpha\n");

    let (stdout, _stderr, success) = run_treecat(
        dir.path(),
        &["--native", "--config", "/nonexistent/treecat.toml"],
    );
    // An unreadable config warns and falls back to defaults.
    assert!(success);
    assert!(stdout.contains("alpha"));
}

#[cfg(unix)]
#[test]
fn test_config_file_command_is_used() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TestDir::new();
    let proj = dir.add_dir("proj");
    dir.add_file("proj/a.txt", "alpha\n");

    // A stand-in pager that tags its output.
    let tool = dir.add_file("fakecat.sh", "#!/bin/sh\necho FAKECAT\ncat \"$1\"\n");
    let mut perms = std::fs::metadata(&tool).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&tool, perms).unwrap();

    let config = dir.add_file(
        "treecat.toml",
        &format!("file_command = \"{}\"\n", tool.display()),
    );

    let (stdout, _stderr, success) = run_treecat(&proj, &["--config", config.to_str().unwrap()]);
    assert!(success);
    assert!(
        stdout.contains("FAKECAT"),
        "configured file command should print the marker: {}",
        stdout
    );
    assert!(stdout.contains("alpha"));
}

#[cfg(unix)]
#[test]
fn test_stdout_redirect_into_tree_is_skipped() {
    use std::fs::File;
    use std::process::Stdio;

    let dir = TestDir::new();
    dir.add_file("a.txt", "alpha\n");
    let out_path = dir.path().join("capture.txt");
    let out_file = File::create(&out_path).expect("create capture file");

    let output = treecat_command(dir.path(), &["--native"])
        .stdout(Stdio::from(out_file))
        .output()
        .expect("Failed to run treecat");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("I/O loop"),
        "self-output file should be skipped with a warning: {}",
        stderr
    );

    let captured = std::fs::read_to_string(&out_path).expect("read capture file");
    assert!(captured.contains("--- a.txt ---"));
    assert!(
        !captured.contains("--- capture.txt ---"),
        "the redirect target must not be dumped into itself"
    );
}
