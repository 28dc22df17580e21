//! Constraint string parsing

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Version;

use super::{
    CaretConstraint, CompositeConstraint, ExactConstraint, OrConstraint, RangeConstraint,
    TildeConstraint, VersionConstraint,
};

/// The constraint string matched none of the known grammars.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unable to parse version constraint \"{0}\"")]
pub struct InvalidConstraint(pub String);

/// One version-like token: release / pre / rc, beta, week-dated snapshot,
/// or a generic word-dot-hyphen token, tried in that order.
const VERSION_PATTERN: &str =
    r"\d+\.\d+\.\d+(?:-(?:pre|rc)\d+)?|b\d+\.\d+\.\d+|\d{2}w\d{2}[a-z](?:_or_[a-z])?|[\w.-]+";

lazy_static! {
    static ref SIMPLE_VERSION_RE: Regex = Regex::new(r"^(\d+(?:\.\d+){1,2})$").unwrap();
    static ref EXACT_RE: Regex = Regex::new(&format!("^({})$", VERSION_PATTERN)).unwrap();
    static ref RANGE_RE: Regex =
        Regex::new(&format!("^({})-({})$", VERSION_PATTERN, VERSION_PATTERN)).unwrap();
    static ref EQUAL_RE: Regex = Regex::new(&format!("^=({})$", VERSION_PATTERN)).unwrap();
    static ref TILDE_RE: Regex = Regex::new(&format!("^~({})$", VERSION_PATTERN)).unwrap();
    static ref CARET_RE: Regex = Regex::new(&format!(r"^\^({})$", VERSION_PATTERN)).unwrap();
    static ref COMPARISON_RE: Regex =
        Regex::new(&format!(r"^(>=|<=|>|<)\s*({})$", VERSION_PATTERN)).unwrap();
    static ref MAVEN_RANGE_RE: Regex = Regex::new(r"^[\[(]([\w.,-]+)[\])]$").unwrap();
    static ref COMPOSITE_RE: Regex = Regex::new(r"^(.+?)\s+(.+)$").unwrap();
}

/// Turns a raw constraint string into the matching [`VersionConstraint`]
/// variant. Dispatch is ordered and first-match-wins; the order matters
/// because a bare dotted-numeric string is ambiguous between the exact
/// and generic-token grammars.
pub struct VersionConstraintParser;

impl VersionConstraintParser {
    pub fn parse(input: &str) -> Result<VersionConstraint, InvalidConstraint> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InvalidConstraint(input.to_string()));
        }

        // Simple version first (e.g. 1.12.2), before the broad token grammar
        if let Some(caps) = SIMPLE_VERSION_RE.captures(trimmed) {
            return Ok(VersionConstraint::Exact(ExactConstraint::new(&caps[1])));
        }

        if let Some(caps) = EQUAL_RE.captures(trimmed) {
            return Ok(VersionConstraint::Exact(ExactConstraint::new(&caps[1])));
        }

        if let Some(caps) = RANGE_RE.captures(trimmed) {
            let min = Version::parse(&caps[1]);
            let max = Version::parse(&caps[2]);
            return Ok(VersionConstraint::Range(RangeConstraint::new(
                Some(min),
                Some(max),
                true,
                true,
                trimmed,
            )));
        }

        if TILDE_RE.is_match(trimmed) {
            return Ok(VersionConstraint::Tilde(TildeConstraint::new(trimmed)));
        }

        if CARET_RE.is_match(trimmed) {
            return Ok(VersionConstraint::Caret(CaretConstraint::new(trimmed)));
        }

        if let Some(caps) = COMPARISON_RE.captures(trimmed) {
            return Self::parse_comparison(&caps[1], &caps[2], trimmed);
        }

        if let Some(caps) = MAVEN_RANGE_RE.captures(trimmed) {
            return Ok(Self::parse_maven_range(trimmed, &caps[1]));
        }

        // Two whitespace-separated sub-expressions combine as AND. A parse
        // failure in either half fails the whole constraint.
        if let Some(caps) = COMPOSITE_RE.captures(trimmed) {
            let first = Self::parse(&caps[1]).map_err(|_| InvalidConstraint(input.to_string()))?;
            let second = Self::parse(&caps[2]).map_err(|_| InvalidConstraint(input.to_string()))?;
            return Ok(VersionConstraint::Composite(CompositeConstraint::new(
                vec![first, second],
                trimmed,
            )));
        }

        // Generic version-token fallback
        if let Some(caps) = EXACT_RE.captures(trimmed) {
            return Ok(VersionConstraint::Exact(ExactConstraint::new(&caps[1])));
        }

        Err(InvalidConstraint(input.to_string()))
    }

    fn parse_comparison(
        operator: &str,
        version_str: &str,
        original: &str,
    ) -> Result<VersionConstraint, InvalidConstraint> {
        let version = Version::parse(version_str);
        let range = match operator {
            ">=" => RangeConstraint::new(Some(version), None, true, false, original),
            "<=" => RangeConstraint::new(None, Some(version), false, true, original),
            ">" => RangeConstraint::new(Some(version), None, false, false, original),
            "<" => RangeConstraint::new(None, Some(version), false, false, original),
            _ => return Err(InvalidConstraint(original.to_string())),
        };
        Ok(VersionConstraint::Range(range))
    }

    fn parse_maven_range(original: &str, content: &str) -> VersionConstraint {
        let include_min = original.starts_with('[');
        let include_max = original.ends_with(']');

        let parts: Vec<&str> = content.split(',').collect();
        match parts.len() {
            1 => {
                if original.ends_with(",)") {
                    let min = Version::parse(parts[0]);
                    VersionConstraint::Range(RangeConstraint::new(
                        Some(min),
                        None,
                        include_min,
                        false,
                        original,
                    ))
                } else {
                    VersionConstraint::Exact(ExactConstraint::new(parts[0]))
                }
            }
            2 => {
                let min = Version::parse(parts[0]);
                let max = if parts[1].is_empty() {
                    None
                } else {
                    Some(Version::parse(parts[1]))
                };
                VersionConstraint::Range(RangeConstraint::new(
                    Some(min),
                    max,
                    include_min,
                    include_max,
                    original,
                ))
            }
            _ => {
                let constraints = parts
                    .iter()
                    .filter(|p| !p.is_empty())
                    .map(|p| VersionConstraint::Exact(ExactConstraint::new(p)))
                    .collect();
                VersionConstraint::Or(OrConstraint::new(constraints, original))
            }
        }
    }
}
