//! CaretConstraint - same-major compatibility shorthand

use crate::Version;

/// `^X.Y.Z`: inclusive from the base version, exclusive below the next
/// major.
#[derive(Debug, Clone)]
pub struct CaretConstraint {
    base: Version,
    original: String,
}

impl CaretConstraint {
    /// `constraint_str` is the full `^`-prefixed constraint.
    pub fn new(constraint_str: &str) -> Self {
        CaretConstraint {
            base: Version::parse(&constraint_str[1..]),
            original: constraint_str.to_string(),
        }
    }

    fn upper(&self) -> Version {
        Version::new(self.base.major() + 1, 0, 0)
    }

    pub(crate) fn satisfies(&self, version: &Version) -> bool {
        *version >= self.base && *version < self.upper()
    }

    pub(crate) fn original(&self) -> &str {
        &self.original
    }

    pub(crate) fn versions(&self) -> Vec<String> {
        vec![format!(">={} <{}", self.base, self.upper())]
    }

    pub(crate) fn low_version(&self) -> String {
        self.base.to_string()
    }

    pub(crate) fn max_version(&self) -> String {
        self.upper().to_string()
    }
}
