/// End-to-end tests for a full recase invocation.
///
/// Arguments are parsed exactly as the binary parses them, the run goes
/// through pre-flight validation and the real background walker, and error
/// output is captured in a buffer instead of stderr.
use recase_cli::{run, RecaseArgs, RunOutcome};
use recase_core::{CaseRegistry, RecaseError};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn touch(path: &Path) {
    fs::write(path, b"").unwrap();
}

fn names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

/// Parse `args` (without the binary name), run, and return the outcome plus
/// everything written to the error stream.
fn invoke(args: &[&str]) -> (RunOutcome, String) {
    let args = RecaseArgs::try_parse_args(std::iter::once("recase").chain(args.iter().copied()))
        .expect("arguments should parse");
    let mut err_out = Vec::new();
    let outcome = run(&args, &CaseRegistry::builtin(), &mut err_out).unwrap();
    (outcome, String::from_utf8(err_out).unwrap())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn clean_run_exits_zero_and_is_silent() {
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("my_file.TXT"));
    touch(&tmp.path().join(".gitignore"));
    touch(&tmp.path().join("AnotherFile.tar.gz"));

    let dir = tmp.path().to_str().unwrap();
    let (outcome, stderr) = invoke(&["kebab", dir]);

    assert_eq!(outcome.exit_code(), 0);
    assert!(stderr.is_empty(), "unexpected stderr: {stderr}");
    let expected: BTreeSet<String> = ["my-file.TXT", ".gitignore", "another-file-tar.gz"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(names(tmp.path()), expected);
}

#[test]
fn unknown_case_lists_valid_names_and_touches_nothing() {
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("SomeFile.txt"));

    let dir = tmp.path().to_str().unwrap();
    let (outcome, stderr) = invoke(&["fancy", dir]);

    assert_eq!(outcome.exit_code(), 1);
    assert!(matches!(
        outcome,
        RunOutcome::Aborted(RecaseError::UnknownCase { .. })
    ));
    for name in ["lower", "upper", "camel", "pascal", "kebab", "snake", "train"] {
        assert!(stderr.contains(name), "stderr should list {name}: {stderr}");
    }
    assert!(tmp.path().join("SomeFile.txt").exists());
}

#[test]
fn missing_arguments_fail() {
    let (outcome, stderr) = invoke(&[]);
    assert_eq!(outcome.exit_code(), 1);
    assert!(stderr.contains("recase <case> <path>"));

    let (outcome, stderr) = invoke(&["snake"]);
    assert!(matches!(outcome, RunOutcome::Aborted(RecaseError::MissingPath)));
    assert!(stderr.contains("<path>"));
}

#[test]
fn nonexistent_path_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing");

    let (outcome, stderr) = invoke(&["snake", missing.to_str().unwrap()]);
    assert_eq!(outcome.exit_code(), 1);
    assert!(stderr.contains("cannot find path"));
}

#[test]
fn recursive_flag_controls_depth() {
    let tmp = TempDir::new().unwrap();
    let deep = tmp.path().join("a").join("b").join("c");
    fs::create_dir_all(&deep).unwrap();
    touch(&deep.join("DeepFile.txt"));
    let dir = tmp.path().to_str().unwrap();

    let (outcome, _) = invoke(&["snake", dir]);
    assert_eq!(outcome.exit_code(), 0);
    assert!(deep.join("DeepFile.txt").exists());

    let (outcome, _) = invoke(&["snake", dir, "--recursive", "--jobs", "2"]);
    assert_eq!(outcome.exit_code(), 0);
    assert!(deep.join("deep_file.txt").exists());
}

#[test]
fn first_dot_extension_rule() {
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("AnotherFile.tar.gz"));

    let dir = tmp.path().to_str().unwrap();
    let (outcome, _) = invoke(&["kebab", dir, "--extension", "first"]);

    assert_eq!(outcome.exit_code(), 0);
    assert!(tmp.path().join("another-file.tar.gz").exists());
}

#[cfg(unix)]
#[test]
fn per_entry_failure_is_reported_after_siblings_finish() {
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("GoodOne.txt"));
    touch(&tmp.path().join("GoodTwo.txt"));
    std::os::unix::fs::symlink(tmp.path().join("nowhere"), tmp.path().join("Dangling.txt"))
        .unwrap();

    let dir = tmp.path().to_str().unwrap();
    let (outcome, stderr) = invoke(&["kebab", dir]);

    assert_eq!(outcome.exit_code(), 1);
    assert!(tmp.path().join("good-one.txt").exists());
    assert!(tmp.path().join("good-two.txt").exists());
    assert!(stderr.contains("Dangling.txt"), "stderr: {stderr}");
    assert!(stderr.contains("1 of 3 entries failed"), "stderr: {stderr}");
    match outcome {
        RunOutcome::Completed(report) => assert_eq!(report.renamed_count(), 2),
        RunOutcome::Aborted(err) => panic!("run aborted: {err}"),
    }
}

#[cfg(unix)]
#[test]
fn unwritable_directory_fails_before_any_rename() {
    use std::os::unix::fs::PermissionsExt;

    // root bypasses permission bits entirely.
    if nix::unistd::geteuid().is_root() {
        return;
    }

    let tmp = TempDir::new().unwrap();
    let locked = tmp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    touch(&locked.join("SomeFile.txt"));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    let (outcome, stderr) = invoke(&["kebab", locked.to_str().unwrap()]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(outcome.exit_code(), 1);
    assert!(matches!(
        outcome,
        RunOutcome::Aborted(RecaseError::AccessDenied { .. })
    ));
    assert!(stderr.contains("cannot access directory"), "stderr: {stderr}");
    assert!(locked.join("SomeFile.txt").exists());
}
