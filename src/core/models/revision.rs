//! Revision identifiers
//!
//! A [`Revision`] names a point in project history. Revisions are compared
//! for equality only; ancestry questions go through the version control port.

use serde::Serialize;

/// Number of characters shown when a revision is rendered for humans
const SHORT_LEN: usize = 7;

/// An opaque, immutable identifier for a point in history
///
/// Intentionally not `Ord`: two revisions relate only through ancestry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Revision(String);

impl Revision {
    /// Wrap a raw identifier (e.g. a full commit hash)
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The full identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for display
    #[must_use]
    pub fn short(&self) -> &str {
        self.0.get(..SHORT_LEN).unwrap_or(&self.0)
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short())
    }
}

/// The three revisions reconciliation looks at
///
/// Built fresh for every run from the repository and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevisionTriple {
    /// Current local revision (HEAD)
    pub local: Revision,
    /// Upstream tracking revision, absent when no upstream is configured
    pub remote: Option<Revision>,
    /// Common ancestor of local and remote, absent when none is computable
    pub base: Option<Revision>,
}

impl RevisionTriple {
    /// Build a triple
    #[must_use]
    pub const fn new(local: Revision, remote: Option<Revision>, base: Option<Revision>) -> Self {
        Self { local, remote, base }
    }

    /// A triple with no upstream at all
    #[must_use]
    pub const fn local_only(local: Revision) -> Self {
        Self::new(local, None, None)
    }
}
