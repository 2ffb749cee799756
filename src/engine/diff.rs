//! Changed-path discovery
//!
//! Determines which repository paths count as "changed" for one evaluation.
//! Strategies run in priority order and the first usable answer wins:
//! CI event replay, staged changes, working-tree changes, last-commit diff,
//! empty. Version-control queries degrade on any failure; they never abort
//! the evaluation.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tracing::debug;

/// Snapshot of the CI environment consulted by the collector
///
/// Captured once per invocation so tests can inject fixtures instead of
/// mutating process-global state.
#[derive(Debug, Clone, Default)]
pub struct CiContext {
    /// `GITHUB_EVENT_NAME`
    pub event_name: Option<String>,
    /// `GITHUB_EVENT_PATH`
    pub event_path: Option<PathBuf>,
    /// `GITHUB_SHA`
    pub head_sha: Option<String>,
}

impl CiContext {
    /// Capture the CI variables from the process environment
    pub fn from_env() -> Self {
        Self {
            event_name: env::var("GITHUB_EVENT_NAME").ok(),
            event_path: env::var("GITHUB_EVENT_PATH").ok().map(PathBuf::from),
            head_sha: env::var("GITHUB_SHA").ok(),
        }
    }

    /// A context with no CI signal; the collector goes straight to the
    /// local strategies
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// Collect the changed paths for this evaluation
pub fn collect_changed_paths(repo_root: &Path, ci: &CiContext) -> Vec<String> {
    if let Some(paths) = ci_event_paths(repo_root, ci) {
        debug!(count = paths.len(), "changed paths resolved from CI event");
        return paths;
    }

    if let Some(out) = git_stdout(repo_root, &["diff", "--cached", "--name-only"]) {
        debug!("changed paths resolved from staged changes");
        return split_paths(&out);
    }

    if let Some(out) = git_stdout(repo_root, &["diff", "--name-only"]) {
        debug!("changed paths resolved from working tree");
        return split_paths(&out);
    }

    if let Some(paths) = last_commit_paths(repo_root) {
        debug!("changed paths resolved from last commit");
        return paths;
    }

    debug!("no changed paths detected by any strategy");
    Vec::new()
}

/// Replay the CI event payload
///
/// `None` falls through to the local strategies. A `Some` result is
/// authoritative even when empty: once both revisions resolve, a failed or
/// empty diff means "no changes", not "try something else".
fn ci_event_paths(repo_root: &Path, ci: &CiContext) -> Option<Vec<String>> {
    let event_path = ci.event_path.as_ref()?;
    let content = fs::read_to_string(event_path).ok()?;
    let payload: Value = serde_json::from_str(&content).ok()?;
    let event_name = ci.event_name.as_deref().unwrap_or("");

    let (base, head) = match event_name {
        "pull_request" => (
            sha_at(&payload, &["pull_request", "base", "sha"]),
            sha_at(&payload, &["pull_request", "head", "sha"]),
        ),
        "push" => {
            // An all-zero "before" means the commit range is unknowable
            // (new branch, force push); abandon the strategy entirely.
            let before = sha_at(&payload, &["before"]).filter(|sha| !is_zero_sha(sha));
            let after = sha_at(&payload, &["after"])
                .or_else(|| ci.head_sha.clone().filter(|sha| !sha.is_empty()));
            (before, after)
        }
        _ => (None, None),
    };

    let base = base?;
    let head = head?;
    let range = format!("{}..{}", base, head);
    match git_stdout(repo_root, &["diff", "--name-only", &range]) {
        Some(out) => Some(split_paths(&out)),
        None => Some(Vec::new()),
    }
}

/// CI marks an unknowable base revision with an all-zero identifier
fn is_zero_sha(sha: &str) -> bool {
    !sha.is_empty() && sha.chars().all(|c| c == '0')
}

fn sha_at(payload: &Value, path: &[&str]) -> Option<String> {
    let mut current = payload;
    for key in path {
        current = current.get(key)?;
    }
    current
        .as_str()
        .map(str::to_string)
        .filter(|sha| !sha.is_empty())
}

/// Diff the current commit against its parent, when one exists
fn last_commit_paths(repo_root: &Path) -> Option<Vec<String>> {
    let base = git_stdout(repo_root, &["rev-parse", "--verify", "HEAD^"])?;
    let head = git_stdout(repo_root, &["rev-parse", "HEAD"])?;
    let range = format!("{}..{}", base, head);
    let out = git_stdout(repo_root, &["diff", "--name-only", &range])?;
    Some(split_paths(&out))
}

/// Run a git query and return trimmed stdout
///
/// Any failure (missing binary, non-zero exit, empty output) collapses to
/// `None` so the caller can fall back to the next strategy.
fn git_stdout(repo_root: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Split diff output into trimmed, non-empty path lines
fn split_paths(out: &str) -> Vec<String> {
    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
