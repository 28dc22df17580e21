//! Publish-time version selection
//!
//! Given the version range a mod declares in its metadata, work out which
//! catalog entries to pre-select in the publish dialog. A range that cannot
//! be understood is a data-quality issue, not a failure: selection simply
//! falls back to manual choice.

use modpub_version::{Version, VersionConstraint, VersionConstraintParser};

use crate::manifest::GameVersion;

/// Strip a leading `v`/`V` from a version or range string.
///
/// This is the boundary where display forms like `v1.16.5` are reduced to
/// the literal version text; `Version::parse` itself never does this.
pub fn strip_version_prefix(input: &str) -> &str {
    input
        .strip_prefix('v')
        .or_else(|| input.strip_prefix('V'))
        .unwrap_or(input)
}

/// Parse the version range declared in mod metadata, if possible.
///
/// Returns `None` for blank or unparseable input; the parse error is
/// logged at debug level and auto-selection is skipped, never aborted.
pub fn infer_constraint(range: &str) -> Option<VersionConstraint> {
    let range = strip_version_prefix(range.trim());
    if range.is_empty() {
        return None;
    }
    match VersionConstraintParser::parse(range) {
        Ok(constraint) => Some(constraint),
        Err(err) => {
            log::debug!("skipping version auto-selection: {err}");
            None
        }
    }
}

/// Filter a catalog down to the entries the constraint accepts.
pub fn compatible_versions<'a>(
    catalog: &'a [GameVersion],
    constraint: &VersionConstraint,
) -> Vec<&'a GameVersion> {
    catalog
        .iter()
        .filter(|entry| constraint.satisfies(&Version::parse(&entry.version)))
        .collect()
}

/// Catalog indices to pre-select for the constraint.
///
/// The constraint's low/max bounds are looked up verbatim in the catalog
/// (which lists newest versions first). Both found: the span between them.
/// One found: everything from the newest entry through it. Neither: just
/// the newest entry.
pub fn selection_span(catalog: &[GameVersion], constraint: &VersionConstraint) -> Vec<usize> {
    if catalog.is_empty() {
        return Vec::new();
    }

    let bounds = [constraint.low_version(), constraint.max_version()];
    let found: Vec<usize> = bounds
        .iter()
        .filter(|bound| !bound.is_empty())
        .filter_map(|bound| catalog.iter().position(|entry| &entry.version == bound))
        .collect();

    match found.as_slice() {
        [a, b] => {
            let (lo, hi) = (*a.min(b), *a.max(b));
            (lo..=hi).collect()
        }
        [a] => (0..=*a).collect(),
        _ => vec![0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ReleaseChannel;

    fn entry(version: &str) -> GameVersion {
        GameVersion {
            version: version.to_string(),
            channel: ReleaseChannel::Release,
            curseforge_id: -1,
            released: String::new(),
        }
    }

    fn catalog() -> Vec<GameVersion> {
        // Newest first, like the launcher manifest
        ["1.18.2", "1.18.1", "1.17.1", "1.17", "1.16.5", "1.16.4"]
            .iter()
            .map(|v| entry(v))
            .collect()
    }

    #[test]
    fn test_strip_version_prefix() {
        assert_eq!(strip_version_prefix("v1.16.5"), "1.16.5");
        assert_eq!(strip_version_prefix("V1.16.5"), "1.16.5");
        assert_eq!(strip_version_prefix("1.16.5"), "1.16.5");
        assert_eq!(strip_version_prefix("b1.7.3"), "b1.7.3");
    }

    #[test]
    fn test_infer_constraint() {
        assert!(infer_constraint(">=1.16 <1.18").is_some());
        assert!(infer_constraint("v1.16.5").is_some());
        assert!(infer_constraint("").is_none());
        assert!(infer_constraint("   ").is_none());
        assert!(infer_constraint("!!!not a constraint???").is_none());
    }

    #[test]
    fn test_compatible_versions() {
        let catalog = catalog();
        let constraint = infer_constraint(">=1.16.5 <=1.17.1").unwrap();
        let compatible = compatible_versions(&catalog, &constraint);
        let names: Vec<&str> = compatible.iter().map(|v| v.version.as_str()).collect();
        assert_eq!(names, vec!["1.17.1", "1.17", "1.16.5"]);
    }

    #[test]
    fn test_selection_span_both_bounds_found() {
        let catalog = catalog();
        let constraint = infer_constraint("1.16.5-1.17.1").unwrap();
        // low 1.16.5 at index 4, max 1.17.1 at index 2
        assert_eq!(selection_span(&catalog, &constraint), vec![2, 3, 4]);
    }

    #[test]
    fn test_selection_span_single_bound_extends_to_newest() {
        let catalog = catalog();
        let constraint = infer_constraint(">=1.16.5").unwrap();
        // Only the low bound exists in the catalog, at index 4
        assert_eq!(selection_span(&catalog, &constraint), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_selection_span_no_bound_found() {
        let catalog = catalog();
        let constraint = infer_constraint("1.12.2").unwrap();
        assert_eq!(selection_span(&catalog, &constraint), vec![0]);
    }

    #[test]
    fn test_selection_span_empty_catalog() {
        let constraint = infer_constraint("1.16.5").unwrap();
        assert!(selection_span(&[], &constraint).is_empty());
    }
}
