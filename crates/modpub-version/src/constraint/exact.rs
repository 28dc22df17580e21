//! ExactConstraint - matches a single version

use crate::Version;

/// Satisfied only by a version structurally equal to the target.
#[derive(Debug, Clone)]
pub struct ExactConstraint {
    version: Version,
}

impl ExactConstraint {
    pub fn new(version_str: &str) -> Self {
        ExactConstraint {
            version: Version::parse(version_str),
        }
    }

    pub(crate) fn satisfies(&self, version: &Version) -> bool {
        self.version == *version
    }

    pub(crate) fn original(&self) -> &str {
        self.version.as_str()
    }

    pub(crate) fn versions(&self) -> Vec<String> {
        vec![self.version.to_string()]
    }

    pub(crate) fn low_version(&self) -> String {
        self.version.to_string()
    }

    pub(crate) fn max_version(&self) -> String {
        self.version.to_string()
    }
}
