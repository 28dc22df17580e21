//! OrConstraint - union of alternatives

use crate::Version;

use super::VersionConstraint;

/// Satisfied when any child constraint is satisfied.
///
/// Bound aggregation is the mirror image of [`super::CompositeConstraint`]:
/// the union's floor is the lowest child floor and its ceiling the highest
/// child ceiling.
#[derive(Debug, Clone)]
pub struct OrConstraint {
    constraints: Vec<VersionConstraint>,
    original: String,
}

impl OrConstraint {
    pub fn new(constraints: Vec<VersionConstraint>, original: impl Into<String>) -> Self {
        OrConstraint {
            constraints,
            original: original.into(),
        }
    }

    pub(crate) fn satisfies(&self, version: &Version) -> bool {
        self.constraints.iter().any(|c| c.satisfies(version))
    }

    pub(crate) fn original(&self) -> &str {
        &self.original
    }

    pub(crate) fn versions(&self) -> Vec<String> {
        self.constraints.iter().flat_map(|c| c.versions()).collect()
    }

    pub(crate) fn low_version(&self) -> String {
        self.constraints
            .iter()
            .map(|c| c.low_version())
            .filter(|s| !s.is_empty())
            .map(|s| Version::parse(&s))
            .min()
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    pub(crate) fn max_version(&self) -> String {
        self.constraints
            .iter()
            .map(|c| c.max_version())
            .filter(|s| !s.is_empty())
            .map(|s| Version::parse(&s))
            .max()
            .map(|v| v.to_string())
            .unwrap_or_default()
    }
}
