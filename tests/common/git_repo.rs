//! Temporary git repositories for integration tests

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run git in `dir`, panicking with stderr on failure; returns trimmed stdout
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Configure git user for commits, and disable signing
fn configure_user(dir: &Path) {
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

/// Whether `dir` is inside some git checkout (e.g. TMPDIR under a repo)
pub fn inside_checkout(dir: &Path) -> bool {
    Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .current_dir(dir)
        .output()
        .is_ok_and(|o| o.status.success())
}

/// A bare upstream, a clone that publishes to it, and the clone under test
///
/// ```text
/// root/
/// ├── upstream.git/   # bare "remote"
/// ├── publisher/      # pushes new upstream commits
/// └── local/          # the working copy being updated
/// ```
pub struct Upstream {
    _root: TempDir,
    upstream: PathBuf,
    publisher: PathBuf,
    local: PathBuf,
}

impl Upstream {
    /// Create the three repositories with one shared commit on `main`
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        let upstream = root.path().join("upstream.git");
        let publisher = root.path().join("publisher");
        let local = root.path().join("local");

        std::fs::create_dir_all(&upstream).unwrap();
        git(&upstream, &["init", "--bare"]);
        git(&upstream, &["symbolic-ref", "HEAD", "refs/heads/main"]);

        std::fs::create_dir_all(&publisher).unwrap();
        git(&publisher, &["init"]);
        git(&publisher, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        configure_user(&publisher);
        std::fs::write(publisher.join("README.md"), "# rtimer\n").unwrap();
        git(&publisher, &["add", "README.md"]);
        git(&publisher, &["commit", "-m", "Initial commit"]);
        git(&publisher, &["remote", "add", "origin", upstream.to_str().unwrap()]);
        git(&publisher, &["push", "-u", "origin", "main"]);

        git(root.path(), &["clone", upstream.to_str().unwrap(), "local"]);
        configure_user(&local);

        Self { _root: root, upstream, publisher, local }
    }

    /// The working copy under test
    pub fn local(&self) -> &Path {
        &self.local
    }

    /// The bare upstream repository
    pub fn upstream(&self) -> &Path {
        &self.upstream
    }

    /// Commit a file in the publisher and push it upstream; returns the new head
    pub fn publish(&self, name: &str, content: &str) -> String {
        commit_file(&self.publisher, name, content);
        git(&self.publisher, &["push", "origin", "main"]);
        head(&self.publisher)
    }

    /// Commit a file in the local clone only; returns the new head
    pub fn commit_locally(&self, name: &str, content: &str) -> String {
        commit_file(&self.local, name, content);
        head(&self.local)
    }

    /// Head of the upstream branch
    pub fn upstream_head(&self) -> String {
        git(&self.upstream, &["rev-parse", "refs/heads/main"])
    }

    /// Head of the local clone
    pub fn local_head(&self) -> String {
        head(&self.local)
    }
}

impl Default for Upstream {
    fn default() -> Self {
        Self::new()
    }
}

/// Write, stage and commit a file
pub fn commit_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
    git(dir, &["add", name]);
    git(dir, &["commit", "-m", &format!("Update {name}")]);
}

/// Full hash of HEAD
pub fn head(dir: &Path) -> String {
    git(dir, &["rev-parse", "HEAD"])
}
