//! Network operations through the `git` command line

use std::path::Path;
use std::process::Command;

use anyhow::Context;

/// Run `git` in `workdir`, returning trimmed stdout
///
/// # Errors
///
/// Returns an error carrying git's stderr when the command exits non-zero.
pub fn run_git(workdir: &Path, args: &[&str]) -> anyhow::Result<String> {
    let cmdline = args.join(" ");
    log::debug!("git {cmdline}");

    let output = Command::new("git")
        .current_dir(workdir)
        .args(args)
        .output()
        .with_context(|| format!("failed to run git {cmdline}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("git {cmdline}: {}", stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Refresh remote-tracking refs without touching the current branch
pub fn fetch(workdir: &Path) -> anyhow::Result<()> {
    run_git(workdir, &["fetch", "--prune"]).map(drop)
}

/// Fast-forward the current branch to its already-fetched upstream
///
/// Uses `merge --ff-only` so `pull.rebase`/`pull.ff` settings cannot turn it
/// into a merge or a rebase.
pub fn fast_forward(workdir: &Path) -> anyhow::Result<()> {
    run_git(workdir, &["merge", "--ff-only", "@{upstream}"]).map(drop)
}

/// Fetch a single branch, updating `refs/remotes/<remote>/<branch>`
pub fn fetch_branch(workdir: &Path, remote: &str, branch: &str) -> anyhow::Result<()> {
    run_git(workdir, &["fetch", remote, branch]).map(drop)
}

/// Point the current branch's upstream at `remote/branch`
pub fn set_upstream(workdir: &Path, remote: &str, branch: &str) -> anyhow::Result<()> {
    let upstream = format!("{remote}/{branch}");
    run_git(workdir, &["branch", "--set-upstream-to", &upstream]).map(drop)
}
