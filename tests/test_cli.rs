//! End-to-end tests running the `mrh` binary
#![cfg(unix)]

mod common;

use anyhow::Result;
use common::{TestWorkspace, TestWorkspaceBuilder};
use std::process::{Command, Output};

fn mrh(workspace: &TestWorkspace, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_mrh"))
        .args(args)
        .current_dir(workspace.path())
        .env_remove("MRH_LOG")
        .output()?;
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn mixed_workspace() -> Result<TestWorkspace> {
    TestWorkspaceBuilder::new()
        .with_repo("repoA")
        .with_repo("repoB")
        .with_dir("notes")
        .with_file("repoA", "status", "0")
        .with_file("repoB", "status", "1")
        .with_file("notes", "status", "1")
        .build()
}

#[test]
fn test_only_failing_repository_is_reported() -> Result<()> {
    let workspace = mixed_workspace()?;
    let output = mrh(
        &workspace,
        &["cmd", "free", "exit $(cat status)", "--pool-size", "2", "--no-notify"],
    )?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1), "stdout: {out}");
    assert_eq!(out.matches("[FAILED]").count(), 1);
    assert!(out.contains("[FAILED] repoB"));
    assert!(!out.contains("repoA"));
    assert!(!out.contains("notes"));
    assert!(out.contains("1 succeeded • 1 failed"));
    Ok(())
}

#[test]
fn test_all_successful_run_exits_zero() -> Result<()> {
    let workspace = mixed_workspace()?;
    let output = mrh(
        &workspace,
        &["cmd", "free", "true", "--filter", "repoA", "--no-notify"],
    )?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout(&output).contains("[FAILED]"));
    Ok(())
}

#[test]
fn test_verbose_shows_successful_output() -> Result<()> {
    let workspace = mixed_workspace()?;
    let output = mrh(
        &workspace,
        &["cmd", "free", "echo hi", "-v", "--no-notify"],
    )?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("[SUCCESS] repoA"));
    assert!(out.contains("[SUCCESS] repoB"));
    assert!(out.contains("Stdout: hi"));
    Ok(())
}

#[test]
fn test_all_flag_includes_plain_directories() -> Result<()> {
    let workspace = mixed_workspace()?;
    let output = mrh(
        &workspace,
        &["cmd", "free", "exit $(cat status)", "--all", "--no-notify"],
    )?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("[FAILED] notes"));
    assert!(out.contains("[FAILED] repoB"));
    Ok(())
}

#[test]
fn test_list_respects_repository_marker() -> Result<()> {
    let workspace = mixed_workspace()?;

    let output = mrh(&workspace, &["list"])?;
    assert_eq!(output.status.code(), Some(0));
    let expected = format!(
        "{}\n{}\n",
        workspace.child("repoA").display(),
        workspace.child("repoB").display()
    );
    assert_eq!(stdout(&output), expected);

    let output = mrh(&workspace, &["list", "--all"])?;
    let listed = stdout(&output);
    assert_eq!(listed.lines().count(), 3);
    assert!(listed.contains("notes"));
    Ok(())
}

#[test]
fn test_filter_restricts_targets() -> Result<()> {
    let workspace = TestWorkspaceBuilder::new()
        .with_repo("api-users")
        .with_repo("api-orders")
        .with_repo("web")
        .build()?;

    let output = mrh(&workspace, &["list", "--filter", "api-*"])?;
    let listed = stdout(&output);

    assert_eq!(listed.lines().count(), 2);
    assert!(!listed.contains("web"));
    Ok(())
}

#[test]
fn test_filter_before_subcommand() -> Result<()> {
    let workspace = TestWorkspaceBuilder::new()
        .with_repo("api")
        .with_repo("web")
        .build()?;

    let output = mrh(
        &workspace,
        &["--filter", "web", "cmd", "free", "touch ran", "--no-notify"],
    )?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(workspace.read("web", "ran").is_some());
    assert!(workspace.read("api", "ran").is_none());
    Ok(())
}

#[test]
fn test_config_file_is_applied() -> Result<()> {
    let workspace = TestWorkspaceBuilder::new()
        .with_repo("api")
        .with_repo("web")
        .with_config(r#"{"filter": ["web"], "no_notify": true}"#)
        .build()?;

    let output = mrh(&workspace, &["list"])?;
    let listed = stdout(&output);

    assert_eq!(listed.lines().count(), 1);
    assert!(listed.contains("web"));
    Ok(())
}

#[test]
fn test_malformed_config_exits_with_two() -> Result<()> {
    let workspace = TestWorkspaceBuilder::new()
        .with_repo("api")
        .with_config("{ \"filter\": [")
        .build()?;

    let output = mrh(&workspace, &["cmd", "free", "touch ran", "--no-notify"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Configuration error"));
    assert!(workspace.read("api", "ran").is_none());
    Ok(())
}

#[test]
fn test_missing_explicit_config_exits_with_two() -> Result<()> {
    let workspace = TestWorkspaceBuilder::new().with_repo("api").build()?;

    let output = mrh(&workspace, &["list", "--cfg", "missing.json"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("missing.json"));
    Ok(())
}

#[test]
fn test_no_targets_exits_zero() -> Result<()> {
    let workspace = TestWorkspaceBuilder::new().with_dir("plain").build()?;

    let output = mrh(&workspace, &["git", "fetch", "--no-notify"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains(mrh::core::NO_TARGETS_MESSAGE));
    Ok(())
}

#[test]
fn test_completions_are_generated() -> Result<()> {
    let workspace = TestWorkspaceBuilder::new().build()?;

    let output = mrh(&workspace, &["completions", "bash"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("mrh"));
    Ok(())
}
