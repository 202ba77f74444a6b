//! Integration Tests

extern crate assert_cli;
extern crate tempdir;

use std::env;
use std::fs;

use assert_cli::Assert;
use tempdir::TempDir;

fn smash() -> Assert {
    Assert::cargo_binary("smash")
}

fn write_script(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write script");
    path.to_str()
        .expect("script path should be valid Unicode")
        .to_string()
}

#[test]
fn test_simple_echo() {
    smash()
        .with_args(&["-c", "echo test"])
        .stdout()
        .is("test")
        .unwrap();
}

#[test]
fn test_command_not_found_is_recoverable() {
    smash()
        .with_args(&["-c", "definitely-not-a-command-xyz"])
        .stderr()
        .contains("command not found")
        .succeeds()
        .unwrap();
}

#[test]
fn test_missing_redirect_target_is_a_parse_error() {
    smash()
        .with_args(&["-c", "ls >"])
        .stderr()
        .contains("no target for redirection `>`")
        .succeeds()
        .unwrap();
}

#[test]
fn test_status_starts_at_zero() {
    smash()
        .with_args(&["-c", "status"])
        .stdout()
        .is("exit value 0")
        .unwrap();
}

#[test]
fn test_status_after_success_and_failure() {
    let dir = TempDir::new("smash-test").expect("failed to create temp dir");
    let script = write_script(&dir, "status.sh", "false\nstatus\ntrue\nstatus\n");
    smash()
        .with_args(&[&script])
        .stdout()
        .is("exit value 1\nexit value 0")
        .unwrap();
}

#[test]
fn test_output_redirection_creates_file() {
    let dir = TempDir::new("smash-test").expect("failed to create temp dir");
    let out_path = dir.path().join("out.txt");
    let script = write_script(
        &dir,
        "redirect.sh",
        &format!(
            "ls -l {} > {}\nstatus\n",
            dir.path().display(),
            out_path.display()
        ),
    );

    smash()
        .with_args(&[&script])
        .stdout()
        .is("exit value 0")
        .unwrap();

    let listing = fs::read_to_string(&out_path).expect("output file was not created");
    assert!(listing.contains("redirect.sh"));
}

#[test]
fn test_input_redirection() {
    let dir = TempDir::new("smash-test").expect("failed to create temp dir");
    let in_path = dir.path().join("in.txt");
    fs::write(&in_path, "one\ntwo\n").expect("failed to write input file");

    let command = format!("wc -l < {}", in_path.display());
    smash()
        .with_args(&["-c", command.as_str()])
        .stdout()
        .is("2")
        .unwrap();
}

#[test]
fn test_input_redirection_missing_file() {
    let dir = TempDir::new("smash-test").expect("failed to create temp dir");
    let script = write_script(
        &dir,
        "badredirect.sh",
        "cat < /definitely/not/here.txt\nstatus\n",
    );

    smash()
        .with_args(&[&script])
        .stdout()
        .contains("exit value 1")
        .stderr()
        .contains("/definitely/not/here.txt: no such file or directory")
        .succeeds()
        .unwrap();
}

#[test]
fn test_background_job_is_announced_and_reaped() {
    let dir = TempDir::new("smash-test").expect("failed to create temp dir");
    let script = write_script(&dir, "background.sh", "sleep 0 &\nsleep 1\nstatus\n");

    smash()
        .with_args(&[&script])
        .stdout()
        .contains("background pid is")
        .stdout()
        .contains("is done: exit value 0")
        .unwrap();
}

#[test]
fn test_exit_kills_outstanding_background_jobs() {
    let dir = TempDir::new("smash-test").expect("failed to create temp dir");
    let script = write_script(&dir, "exit.sh", "sleep 30 &\nexit\n");

    smash()
        .with_args(&[&script])
        .stdout()
        .contains("background pid is")
        .succeeds()
        .unwrap();
}

#[test]
fn test_exit_stops_the_script() {
    let dir = TempDir::new("smash-test").expect("failed to create temp dir");
    let script = write_script(&dir, "early_exit.sh", "echo first\nexit\necho second\n");

    smash()
        .with_args(&[&script])
        .stdout()
        .contains("first")
        .stdout()
        .doesnt_contain("second")
        .succeeds()
        .unwrap();
}

#[test]
fn test_comments_and_blank_lines_produce_no_output() {
    let dir = TempDir::new("smash-test").expect("failed to create temp dir");
    let script = write_script(
        &dir,
        "comments.sh",
        "# this line is a comment\n\n   \nstatus\n",
    );

    smash()
        .with_args(&[&script])
        .stdout()
        .is("exit value 0")
        .unwrap();
}

#[test]
fn test_cd_changes_directory_for_later_commands() {
    let dir = TempDir::new("smash-test").expect("failed to create temp dir");
    let script = write_script(
        &dir,
        "cd.sh",
        &format!("cd {}\nls > out.txt\nstatus\n", dir.path().display()),
    );

    smash()
        .with_args(&[&script])
        .stdout()
        .is("exit value 0")
        .unwrap();

    // out.txt is relative, so it only appears here if cd took effect
    assert!(dir.path().join("out.txt").exists());
}

#[test]
fn test_cd_failure_is_reported_and_recovered() {
    smash()
        .with_args(&["-c", "cd /definitely/not/a/dir"])
        .stderr()
        .contains("cd: /definitely/not/a/dir")
        .succeeds()
        .unwrap();
}

#[test]
fn test_cd_defaults_to_home() {
    // only meaningful when the environment provides a home directory
    if env::var_os("HOME").is_none() {
        return;
    }

    smash().with_args(&["-c", "cd"]).succeeds().unwrap();
}

#[test]
fn test_version_flag() {
    smash()
        .with_args(&["--version"])
        .stdout()
        .contains("smash version")
        .unwrap();
}
