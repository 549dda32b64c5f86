//! Release body integration tests

mod common;

use predicates::prelude::*;

const HEADER: &str = "# Zip Assets of Binaries\n\n\
                      This repository provides Windows executables as ZIP files.\n\n\
                      ## Available versions by binary type:\n";

#[test]
fn test_body_first_entry() {
    let workspace = common::TestWorkspace::with_registry();

    workspace
        .cmd()
        .args(["body", "buildifier", "7.3.1", "--date", "2024-09-01"])
        .assert()
        .success()
        .stdout(format!(
            "{HEADER}\n\n### Buildifier\n\
             - Buildifier 7.3.1 (buildifier-7.3.1-windows-amd64.zip, added on 2024-09-01)\n"
        ));
}

#[test]
fn test_body_defaults_to_today() {
    let workspace = common::TestWorkspace::with_registry();
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();

    workspace
        .cmd()
        .args(["body", "ninja", "1.12.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "(ninja-win-1.12.1.zip, added on {today})"
        )));
}

#[test]
fn test_body_merges_existing_lines() {
    let workspace = common::TestWorkspace::with_registry();
    workspace.write_file(
        "lines.txt",
        "- Ninja 1.11.1 (ninja-win-1.11.1.zip, added on 2023-01-01)\n\
         \n\
         - Buildifier 6.0.0 (buildifier-6.0.0-windows-amd64.zip, added on 2023-02-01)\n\
         - CMake 3.30.0 (cmake-3.30.0.zip, added on 2024-07-01)\n",
    );

    let output = workspace
        .cmd()
        .args([
            "body",
            "ninja",
            "1.12.1",
            "--date",
            "2024-05-12",
            "--existing",
            "lines.txt",
        ])
        .output()
        .expect("Failed to run binmirror");
    assert!(output.status.success());
    let body = String::from_utf8(output.stdout).expect("body should be UTF-8");

    assert!(body.contains(
        "### Ninja\n\
         - Ninja 1.12.1 (ninja-win-1.12.1.zip, added on 2024-05-12)\n\
         - Ninja 1.11.1 (ninja-win-1.11.1.zip, added on 2023-01-01)"
    ));
    assert!(body.contains(
        "### Buildifier\n- Buildifier 6.0.0 (buildifier-6.0.0-windows-amd64.zip, added on 2023-02-01)"
    ));
    assert!(!body.contains("CMake"));
    assert!(body.find("### Ninja") < body.find("### Buildifier"));
}

#[test]
fn test_body_round_trip_through_file() {
    let workspace = common::TestWorkspace::with_registry();

    workspace
        .cmd()
        .args([
            "body",
            "ninja",
            "1.11.1",
            "--date",
            "2023-01-01",
            "-o",
            "body.md",
        ])
        .assert()
        .success()
        .stdout("");
    assert!(workspace.file_exists("body.md"));

    workspace
        .cmd()
        .args([
            "body",
            "bazel_nojdk",
            "7.4.1",
            "--date",
            "2024-11-09",
            "--existing",
            "body.md",
            "--from-body",
            "-o",
            "body.md",
        ])
        .assert()
        .success();

    let body = workspace.read_file("body.md");
    assert_eq!(body.matches("# Zip Assets of Binaries").count(), 1);
    assert_eq!(body.matches("### Ninja").count(), 1);
    assert!(body.contains("- Ninja 1.11.1 (ninja-win-1.11.1.zip, added on 2023-01-01)"));
    assert!(body.contains(
        "### Bazel without JDK\n\
         - Bazel without JDK 7.4.1 (bazel_nojdk-7.4.1-windows-x86_64.zip, added on 2024-11-09)"
    ));
}

#[test]
fn test_body_existing_from_stdin() {
    let workspace = common::TestWorkspace::with_registry();
    let previous = format!(
        "{HEADER}\n\n### Buildifier\n\
         - Buildifier 7.3.1 (buildifier-7.3.1-windows-amd64.zip, added on 2024-09-01)\n"
    );

    workspace
        .cmd()
        .args([
            "body",
            "buildifier",
            "8.0.0",
            "--date",
            "2025-01-10",
            "--existing",
            "-",
            "--from-body",
        ])
        .write_stdin(previous)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "### Buildifier\n\
             - Buildifier 8.0.0 (buildifier-8.0.0-windows-amd64.zip, added on 2025-01-10)\n\
             - Buildifier 7.3.1 (buildifier-7.3.1-windows-amd64.zip, added on 2024-09-01)",
        ))
        .stdout(predicate::str::contains("### Buildifier").count(1));
}

#[test]
fn test_body_from_body_requires_existing() {
    let workspace = common::TestWorkspace::with_registry();

    workspace
        .cmd()
        .args(["body", "ninja", "1.12.1", "--from-body"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--existing"));
}
