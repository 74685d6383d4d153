//! Revision queries against a local repository

use anyhow::Context;
use git2::{BranchType, ErrorCode, Oid, Repository, ResetType, StatusOptions};

use crate::core::models::Revision;

fn to_revision(oid: Oid) -> Revision {
    Revision::new(oid.to_string())
}

fn to_oid(revision: &Revision) -> anyhow::Result<Oid> {
    Oid::from_str(revision.as_str()).with_context(|| format!("invalid revision {revision}"))
}

/// Commit HEAD points at
///
/// # Errors
///
/// Returns an error if HEAD is unborn (no commits yet) or unreadable.
pub fn head_revision(repo: &Repository) -> anyhow::Result<Revision> {
    let commit = repo
        .head()
        .and_then(|head| head.peel_to_commit())
        .context("could not resolve HEAD (does the repository have any commits?)")?;
    Ok(to_revision(commit.id()))
}

/// Short name of the checked-out branch, `None` when HEAD is detached
pub fn current_branch(repo: &Repository) -> anyhow::Result<Option<String>> {
    if repo.head_detached()? {
        return Ok(None);
    }
    let head = repo.head().context("could not resolve HEAD")?;
    Ok(head.shorthand().map(str::to_string))
}

/// Commit the current branch's upstream points at
///
/// Detached HEAD, a branch with no upstream configured, or an upstream whose
/// remote-tracking ref does not exist all yield `None`.
pub fn upstream_revision(repo: &Repository) -> anyhow::Result<Option<Revision>> {
    let head = match repo.head() {
        Ok(head) => head,
        Err(e) if e.code() == ErrorCode::UnbornBranch => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    if !head.is_branch() {
        return Ok(None);
    }
    let Some(name) = head.shorthand() else {
        return Ok(None);
    };

    let branch = repo.find_branch(name, BranchType::Local)?;
    match branch.upstream() {
        Ok(upstream) => Ok(upstream.get().target().map(to_revision)),
        Err(e) if e.code() == ErrorCode::NotFound => {
            log::debug!("branch {name} has no upstream");
            Ok(None)
        },
        Err(e) => Err(e.into()),
    }
}

/// Best common ancestor of two commits, `None` for unrelated histories
pub fn merge_base(repo: &Repository, a: &Revision, b: &Revision) -> anyhow::Result<Option<Revision>> {
    match repo.merge_base(to_oid(a)?, to_oid(b)?) {
        Ok(oid) => Ok(Some(to_revision(oid))),
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Whether tracked files differ from HEAD (staged or not)
///
/// Untracked files are ignored: neither a pull nor a hard reset touches them.
pub fn has_tracked_changes(repo: &Repository) -> anyhow::Result<bool> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(false).include_ignored(false);
    let statuses = repo.statuses(Some(&mut opts))?;
    Ok(!statuses.is_empty())
}

/// Reset branch, index and working tree to `revision`
pub fn hard_reset(repo: &Repository, revision: &Revision) -> anyhow::Result<()> {
    let target = repo
        .find_object(to_oid(revision)?, None)
        .with_context(|| format!("revision {revision} not found locally"))?;
    repo.reset(&target, ResetType::Hard, None)?;
    log::debug!("reset to {}", revision.as_str());
    Ok(())
}
