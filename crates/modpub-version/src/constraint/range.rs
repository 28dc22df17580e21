//! RangeConstraint - interval with optional, independently inclusive endpoints

use std::cmp::Ordering;

use crate::Version;

/// An interval over versions. Either endpoint may be absent, in which case
/// that side is unconstrained.
#[derive(Debug, Clone)]
pub struct RangeConstraint {
    min: Option<Version>,
    max: Option<Version>,
    include_min: bool,
    include_max: bool,
    original: String,
}

impl RangeConstraint {
    pub fn new(
        min: Option<Version>,
        max: Option<Version>,
        include_min: bool,
        include_max: bool,
        original: impl Into<String>,
    ) -> Self {
        RangeConstraint {
            min,
            max,
            include_min,
            include_max,
            original: original.into(),
        }
    }

    pub(crate) fn satisfies(&self, version: &Version) -> bool {
        if let Some(min) = &self.min {
            match version.cmp(min) {
                Ordering::Less => return false,
                Ordering::Equal if !self.include_min => return false,
                _ => {}
            }
        }

        if let Some(max) = &self.max {
            match version.cmp(max) {
                Ordering::Greater => return false,
                Ordering::Equal if !self.include_max => return false,
                _ => {}
            }
        }

        true
    }

    pub(crate) fn original(&self) -> &str {
        &self.original
    }

    pub(crate) fn versions(&self) -> Vec<String> {
        let mut out = String::new();
        if let Some(min) = &self.min {
            out.push_str(if self.include_min { ">=" } else { ">" });
            out.push_str(min.as_str());
        }
        if let Some(max) = &self.max {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(if self.include_max { "<=" } else { "<" });
            out.push_str(max.as_str());
        }
        vec![out]
    }

    pub(crate) fn low_version(&self) -> String {
        self.min.as_ref().map(Version::to_string).unwrap_or_default()
    }

    pub(crate) fn max_version(&self) -> String {
        self.max.as_ref().map(Version::to_string).unwrap_or_default()
    }
}
