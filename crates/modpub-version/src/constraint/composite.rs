//! CompositeConstraint - conjunction of constraints

use crate::Version;

use super::VersionConstraint;

/// Satisfied only when every child constraint is satisfied. Used for
/// space-separated combinations such as `>=1.12 <1.17`.
#[derive(Debug, Clone)]
pub struct CompositeConstraint {
    constraints: Vec<VersionConstraint>,
    original: String,
}

impl CompositeConstraint {
    pub fn new(constraints: Vec<VersionConstraint>, original: impl Into<String>) -> Self {
        CompositeConstraint {
            constraints,
            original: original.into(),
        }
    }

    pub(crate) fn satisfies(&self, version: &Version) -> bool {
        self.constraints.iter().all(|c| c.satisfies(version))
    }

    pub(crate) fn original(&self) -> &str {
        &self.original
    }

    pub(crate) fn versions(&self) -> Vec<String> {
        self.constraints.iter().flat_map(|c| c.versions()).collect()
    }

    /// Tightest floor: the highest of the children's lower bounds.
    pub(crate) fn low_version(&self) -> String {
        self.constraints
            .iter()
            .map(|c| c.low_version())
            .filter(|s| !s.is_empty())
            .map(|s| Version::parse(&s))
            .max()
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    /// Tightest ceiling: the lowest of the children's upper bounds.
    pub(crate) fn max_version(&self) -> String {
        self.constraints
            .iter()
            .map(|c| c.max_version())
            .filter(|s| !s.is_empty())
            .map(|s| Version::parse(&s))
            .min()
            .map(|v| v.to_string())
            .unwrap_or_default()
    }
}
