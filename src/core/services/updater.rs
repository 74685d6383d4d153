//! Updater session - drive one update run from start to finish
//!
//! Strictly sequential: local-change check, remote refresh, classification,
//! confirmation, action, rebuild, optional reinstall. Every collaborator is a
//! port trait, so the whole sequence runs against mocks in tests.

use std::path::Path;

use crate::core::models::{
    Action, Confirmation, Outcome, ReconciliationState, Revision, RevisionTriple, StatusReport,
    UpdateReport, WorkingCopy,
};
use crate::core::ports::{Builder, Installer, Prompt, VersionControl};
use crate::core::services::reconciler::{classify, plan_action};
use crate::error::UpdateError;

/// Where to pull from when the branch has no upstream configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamDefaults {
    /// Remote name (e.g. `origin`)
    pub remote: String,
    /// Branch on that remote (e.g. `main`)
    pub branch: String,
}

impl Default for UpstreamDefaults {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            branch: "main".to_string(),
        }
    }
}

/// What the gate decided to do
enum Decision {
    Execute(Action),
    RebuildOnly,
    Stop(Outcome),
}

/// One update run over a set of collaborators
///
/// Holds no state between runs; everything is re-read from the repository.
pub struct Updater<'a, V, B, I, P>
where
    V: VersionControl + ?Sized,
    B: Builder + ?Sized,
    I: Installer + ?Sized,
    P: Prompt + ?Sized,
{
    vcs: &'a V,
    builder: &'a B,
    installer: &'a I,
    prompt: &'a mut P,
    defaults: UpstreamDefaults,
}

impl<V, B, I, P> std::fmt::Debug for Updater<'_, V, B, I, P>
where
    V: VersionControl + ?Sized,
    B: Builder + ?Sized,
    I: Installer + ?Sized,
    P: Prompt + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater").field("defaults", &self.defaults).finish_non_exhaustive()
    }
}

impl<'a, V, B, I, P> Updater<'a, V, B, I, P>
where
    V: VersionControl + ?Sized,
    B: Builder + ?Sized,
    I: Installer + ?Sized,
    P: Prompt + ?Sized,
{
    /// Assemble a session
    pub fn new(
        vcs: &'a V,
        builder: &'a B,
        installer: &'a I,
        prompt: &'a mut P,
        defaults: UpstreamDefaults,
    ) -> Self {
        Self { vcs, builder, installer, prompt, defaults }
    }

    /// Run the full update procedure on the working copy containing `path`
    pub fn run(&mut self, path: &Path) -> Result<UpdateReport, UpdateError> {
        let wc = open(self.vcs, path)?;
        let mut report = UpdateReport::begin(wc.root().to_path_buf());

        if self.vcs.has_local_changes(&wc).map_err(|e| UpdateError::vcs(&e))? {
            log::info!("working copy has uncommitted changes");
            let question = Confirmation::ProceedWithLocalChanges;
            if !self.confirm(&question)? {
                return Ok(report.finish(Outcome::Declined { at: question.tag() }));
            }
        }

        let (mut triple, _) = read_triple(self.vcs, &wc, true)?;
        let mut state = classify(&triple);
        let mut planned = plan_action(state);
        log::info!("{} -> {}", state.describe(), planned);
        log::debug!("local={:?} remote={:?} base={:?}", triple.local, triple.remote, triple.base);

        report.state = Some(state);
        report.planned = Some(planned);
        report.before = Some(triple.local.clone());

        if state == ReconciliationState::NoUpstream
            && self.vcs.current_branch(&wc).map_err(|e| UpdateError::vcs(&e))?.is_none()
        {
            return Err(UpdateError::DetachedHead { branch: self.defaults.branch.clone() });
        }

        let outcome = loop {
            match self.decide(state, planned, &triple)? {
                Decision::Stop(outcome) => {
                    report.after = Some(triple.local);
                    return Ok(report.finish(outcome));
                },
                Decision::RebuildOnly => break Outcome::Rebuilt,
                Decision::Execute(action) if action.mutates_working_copy() => {
                    self.execute(&wc, action, &triple)?;
                    report.executed = Some(action);
                    break Outcome::Updated;
                },
                Decision::Execute(action) => {
                    self.attach_default_upstream(&wc)?;
                    report.executed = Some(action);

                    (triple, _) = read_triple(self.vcs, &wc, false)?;
                    state = classify(&triple);
                    planned = plan_action(state);
                    log::info!("now tracking upstream: {} -> {}", state.describe(), planned);
                    if state == ReconciliationState::NoUpstream {
                        return Err(UpdateError::Vcs(format!(
                            "{}/{} is still not the upstream of the current branch",
                            self.defaults.remote, self.defaults.branch
                        )));
                    }
                },
            }
        };
        report.after = Some(self.vcs.local_revision(&wc).map_err(|e| UpdateError::vcs(&e))?);

        log::info!("rebuilding release artifact");
        self.builder.rebuild(&wc).map_err(|e| UpdateError::Build(format!("{e:#}")))?;
        report.built = true;

        if let Some(target) = self.installer.installed_binary()
            && self.confirm(&Confirmation::Reinstall { target })?
        {
            let installed =
                self.installer.install(&wc).map_err(|e| UpdateError::Install(format!("{e:#}")))?;
            log::info!("installed {}", installed.display());
            report.installed = Some(installed);
        }

        Ok(report.finish(outcome))
    }

    fn decide(
        &mut self,
        state: ReconciliationState,
        planned: Action,
        triple: &RevisionTriple,
    ) -> Result<Decision, UpdateError> {
        if planned == Action::None {
            return if self.confirm(&Confirmation::ForceRebuild)? {
                Ok(Decision::RebuildOnly)
            } else {
                Ok(Decision::Stop(Outcome::UpToDate))
            };
        }
        if !planned.requires_confirmation() {
            return Ok(Decision::Execute(planned));
        }

        let question = if planned.is_destructive() {
            Confirmation::ForceReset {
                state,
                local: triple.local.clone(),
                remote: upstream_of(triple)?.clone(),
            }
        } else {
            Confirmation::PullDefaultBranch {
                remote: self.defaults.remote.clone(),
                branch: self.defaults.branch.clone(),
            }
        };

        if self.confirm(&question)? {
            Ok(Decision::Execute(planned.on_consent()))
        } else {
            log::info!("declined; leaving working copy untouched");
            Ok(Decision::Stop(Outcome::Declined { at: question.tag() }))
        }
    }

    /// Fetch the default branch and make it the current branch's upstream
    ///
    /// HEAD is not moved here; the caller reclassifies against the new upstream.
    fn attach_default_upstream(&self, wc: &WorkingCopy) -> Result<(), UpdateError> {
        let UpstreamDefaults { remote, branch } = &self.defaults;
        log::info!("fetching {remote}/{branch}");
        self.vcs
            .fetch_branch(wc, remote, branch)
            .map_err(|e| UpdateError::Network(format!("{e:#}")))?;
        self.vcs.set_upstream(wc, remote, branch).map_err(|e| UpdateError::vcs(&e))
    }

    fn execute(
        &self,
        wc: &WorkingCopy,
        action: Action,
        triple: &RevisionTriple,
    ) -> Result<(), UpdateError> {
        log::info!("executing {action}");
        let result = match action {
            Action::FastForwardPull => self.vcs.fast_forward_pull(wc),
            Action::ForceResetToRemote => self.vcs.hard_reset(wc, upstream_of(triple)?),
            Action::None | Action::PullDefaultBranch | Action::ReportDivergence => Ok(()),
        };
        result.map_err(|e| UpdateError::vcs(&e))
    }

    fn confirm(&mut self, question: &Confirmation) -> Result<bool, UpdateError> {
        self.prompt.confirm(question).map_err(|e| UpdateError::Prompt(format!("{e:#}")))
    }
}

/// Classify the working copy containing `path` without prompting or mutating
///
/// With `fetch` set, remote metadata is refreshed first (when an upstream is
/// configured).
pub fn inspect<V>(vcs: &V, path: &Path, fetch: bool) -> Result<StatusReport, UpdateError>
where
    V: VersionControl + ?Sized,
{
    let wc = open(vcs, path)?;
    let dirty = vcs.has_local_changes(&wc).map_err(|e| UpdateError::vcs(&e))?;
    let (triple, fetched) = read_triple(vcs, &wc, fetch)?;
    let state = classify(&triple);

    Ok(StatusReport {
        workdir: wc.root().to_path_buf(),
        dirty,
        fetched,
        planned: plan_action(state),
        state,
        triple,
    })
}

fn open<V>(vcs: &V, path: &Path) -> Result<WorkingCopy, UpdateError>
where
    V: VersionControl + ?Sized,
{
    vcs.open(path).map_err(|e| {
        log::debug!("open {} failed: {e:#}", path.display());
        UpdateError::NotARepository { path: path.to_path_buf() }
    })
}

/// Build the triple, refreshing remote metadata only when an upstream exists
fn read_triple<V>(
    vcs: &V,
    wc: &WorkingCopy,
    fetch: bool,
) -> Result<(RevisionTriple, bool), UpdateError>
where
    V: VersionControl + ?Sized,
{
    let local = vcs.local_revision(wc).map_err(|e| UpdateError::vcs(&e))?;

    if vcs.upstream_revision(wc).map_err(|e| UpdateError::vcs(&e))?.is_none() {
        return Ok((RevisionTriple::local_only(local), false));
    }

    if fetch {
        log::info!("fetching upstream");
        vcs.fetch(wc).map_err(|e| UpdateError::Network(format!("{e:#}")))?;
    }

    // Re-read: the fetch may have moved (or pruned) the tracking reference.
    let Some(remote) = vcs.upstream_revision(wc).map_err(|e| UpdateError::vcs(&e))? else {
        return Ok((RevisionTriple::local_only(local), fetch));
    };
    let base = vcs.merge_base(wc, &local, &remote).map_err(|e| UpdateError::vcs(&e))?;

    Ok((RevisionTriple::new(local, Some(remote), base), fetch))
}

fn upstream_of(triple: &RevisionTriple) -> Result<&Revision, UpdateError> {
    triple
        .remote
        .as_ref()
        .ok_or_else(|| UpdateError::Vcs("no upstream revision to reset to".to_string()))
}
