//! Game version parsing and ordering

use std::cmp::Ordering;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

/// The recognized version string dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionKind {
    /// `1.16.5`
    Release,
    /// `1.16.5-pre2`
    PreRelease,
    /// `1.16.5-rc1`
    ReleaseCandidate,
    /// `b1.7.3`
    Beta,
    /// `13w41a`, optionally with an `_or_x` alternate suffix
    Snapshot,
    /// Anything else; numeric prefix extracted best-effort
    Unknown,
}

impl VersionKind {
    /// Ranking used to break ties between versions with equal numeric parts.
    fn priority(self) -> u8 {
        match self {
            VersionKind::Unknown => 0,
            VersionKind::Beta => 1,
            VersionKind::Snapshot => 2,
            VersionKind::PreRelease => 3,
            VersionKind::ReleaseCandidate => 4,
            VersionKind::Release => 5,
        }
    }
}

lazy_static! {
    static ref RELEASE_RE: Regex = Regex::new(r"^(\d+)\.(\d+)\.(\d+)$").unwrap();
    static ref PRE_RELEASE_RE: Regex =
        Regex::new(r"^(\d+)\.(\d+)\.(\d+)-(pre|rc)(\d+)$").unwrap();
    static ref BETA_RE: Regex = Regex::new(r"^b(\d+)\.(\d+)\.(\d+)$").unwrap();
    static ref SNAPSHOT_RE: Regex =
        Regex::new(r"^(\d{2})w(\d{2})([a-z])(?:_or_([a-z]))?$").unwrap();
}

/// A single game version, parsed from its display string.
///
/// Construction never fails: input that matches none of the known dialects
/// is kept as [`VersionKind::Unknown`] with whatever leading numeric
/// dot-groups could be extracted. The original string is preserved verbatim
/// and is what [`fmt::Display`] renders.
#[derive(Debug, Clone)]
pub struct Version {
    original: String,
    kind: VersionKind,
    major: u32,
    minor: u32,
    patch: u32,
    pre_release: Option<String>,
}

impl Version {
    /// Parse a version string. Leading/trailing whitespace is ignored for
    /// classification but kept in the original text.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();

        if let Some(caps) = RELEASE_RE.captures(trimmed) {
            return Version {
                original: input.to_string(),
                kind: VersionKind::Release,
                major: group_num(&caps, 1),
                minor: group_num(&caps, 2),
                patch: group_num(&caps, 3),
                pre_release: None,
            };
        }

        if let Some(caps) = PRE_RELEASE_RE.captures(trimmed) {
            let tag = &caps[4];
            let kind = if tag == "rc" {
                VersionKind::ReleaseCandidate
            } else {
                VersionKind::PreRelease
            };
            return Version {
                original: input.to_string(),
                kind,
                major: group_num(&caps, 1),
                minor: group_num(&caps, 2),
                patch: group_num(&caps, 3),
                pre_release: Some(format!("{}{}", tag, &caps[5])),
            };
        }

        if let Some(caps) = BETA_RE.captures(trimmed) {
            return Version {
                original: input.to_string(),
                kind: VersionKind::Beta,
                major: group_num(&caps, 1),
                minor: group_num(&caps, 2),
                patch: group_num(&caps, 3),
                pre_release: None,
            };
        }

        if let Some(caps) = SNAPSHOT_RE.captures(trimmed) {
            // 13w41a => year 2013, week 41, revision letter a = 0.
            // The optional `_or_x` alternate letter is accepted but not kept.
            let letter = caps[3].bytes().next().unwrap_or(b'a');
            return Version {
                original: input.to_string(),
                kind: VersionKind::Snapshot,
                major: 2000 + group_num(&caps, 1),
                minor: group_num(&caps, 2),
                patch: u32::from(letter - b'a'),
                pre_release: None,
            };
        }

        let mut parts = trimmed.split('.');
        Version {
            original: input.to_string(),
            kind: VersionKind::Unknown,
            major: leading_number(parts.next()),
            minor: leading_number(parts.next()),
            patch: leading_number(parts.next()),
            pre_release: None,
        }
    }

    /// Build a `major.minor.patch` release version from its components.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self::parse(&format!("{}.{}.{}", major, minor, patch))
    }

    pub fn kind(&self) -> VersionKind {
        self.kind
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// The `preN`/`rcN` tag, present only for pre-releases and release
    /// candidates.
    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    /// The input string this version was parsed from, verbatim.
    pub fn as_str(&self) -> &str {
        &self.original
    }
}

/// Parse a captured digit group, degrading to 0 on overflow.
fn group_num(caps: &regex::Captures, index: usize) -> u32 {
    caps.get(index)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Leading digit run of a dot-segment, 0 if absent or non-numeric.
fn leading_number(segment: Option<&str>) -> u32 {
    segment
        .map(|s| {
            let digits: &str = &s[..s.bytes().take_while(u8::is_ascii_digit).count()];
            digits.parse().unwrap_or(0)
        })
        .unwrap_or(0)
}

impl PartialEq for Version {
    /// Structural equality: the original text does not participate, so
    /// `Version::parse("foo")` and `Version::parse("bar")` compare equal
    /// (both are all-zero `Unknown` versions).
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| self.kind.priority().cmp(&other.kind.priority()))
            .then_with(|| {
                self.pre_release
                    .as_deref()
                    .unwrap_or("")
                    .cmp(other.pre_release.as_deref().unwrap_or(""))
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_classification() {
        let v = Version::parse("1.16.5");
        assert_eq!(v.kind(), VersionKind::Release);
        assert_eq!((v.major(), v.minor(), v.patch()), (1, 16, 5));
        assert_eq!(v.pre_release(), None);
    }

    #[test]
    fn test_pre_release_and_candidate_classification() {
        let pre = Version::parse("1.16.5-pre2");
        assert_eq!(pre.kind(), VersionKind::PreRelease);
        assert_eq!(pre.pre_release(), Some("pre2"));

        let rc = Version::parse("1.16.5-rc1");
        assert_eq!(rc.kind(), VersionKind::ReleaseCandidate);
        assert_eq!(rc.pre_release(), Some("rc1"));
        assert_eq!((rc.major(), rc.minor(), rc.patch()), (1, 16, 5));
    }

    #[test]
    fn test_beta_classification() {
        let v = Version::parse("b1.8.1");
        assert_eq!(v.kind(), VersionKind::Beta);
        assert_eq!((v.major(), v.minor(), v.patch()), (1, 8, 1));
    }

    #[test]
    fn test_snapshot_classification() {
        let v = Version::parse("13w41a");
        assert_eq!(v.kind(), VersionKind::Snapshot);
        assert_eq!((v.major(), v.minor(), v.patch()), (2013, 41, 0));

        let c = Version::parse("13w41c");
        assert_eq!(c.patch(), 2);

        let alt = Version::parse("22w42a_or_b");
        assert_eq!(alt.kind(), VersionKind::Snapshot);
        assert_eq!((alt.major(), alt.minor(), alt.patch()), (2022, 42, 0));
    }

    #[test]
    fn test_unknown_fallback() {
        let v = Version::parse("not-a-version");
        assert_eq!(v.kind(), VersionKind::Unknown);
        assert_eq!((v.major(), v.minor(), v.patch()), (0, 0, 0));

        let two = Version::parse("1.12");
        assert_eq!(two.kind(), VersionKind::Unknown);
        assert_eq!((two.major(), two.minor(), two.patch()), (1, 12, 0));

        // Trailing non-digits stop the digit scan per segment
        let messy = Version::parse("1.2.3a");
        assert_eq!(messy.kind(), VersionKind::Unknown);
        assert_eq!((messy.major(), messy.minor(), messy.patch()), (1, 2, 3));

        let empty = Version::parse("");
        assert_eq!(empty.kind(), VersionKind::Unknown);
        assert_eq!((empty.major(), empty.minor(), empty.patch()), (0, 0, 0));
    }

    #[test]
    fn test_extra_dot_groups_ignored() {
        let v = Version::parse("1.2.3.4.5");
        assert_eq!(v.kind(), VersionKind::Unknown);
        assert_eq!((v.major(), v.minor(), v.patch()), (1, 2, 3));
    }

    #[test]
    fn test_round_trip_display() {
        for s in ["1.2.3", "1.12.2-pre1", "b1.7.3", "13w41a", "22w42a_or_b"] {
            assert_eq!(Version::parse(s).to_string(), s);
        }
    }

    #[test]
    fn test_new_formats_as_release() {
        let v = Version::new(1, 17, 0);
        assert_eq!(v.kind(), VersionKind::Release);
        assert_eq!(v.to_string(), "1.17.0");
    }

    #[test]
    fn test_numeric_ordering() {
        assert!(Version::parse("1.16.5") < Version::parse("1.17.0"));
        assert!(Version::parse("1.16.5") < Version::parse("1.16.10"));
        assert!(Version::parse("2.0.0") > Version::parse("1.99.99"));
    }

    #[test]
    fn test_kind_priority_breaks_ties() {
        let beta = Version::parse("b1.16.5");
        let pre = Version::parse("1.16.5-pre1");
        let rc = Version::parse("1.16.5-rc1");
        let release = Version::parse("1.16.5");

        assert!(beta < pre);
        assert!(pre < rc);
        assert!(rc < release);
    }

    #[test]
    fn test_pre_release_tag_breaks_remaining_ties() {
        assert!(Version::parse("1.16.5-pre1") < Version::parse("1.16.5-pre2"));
        assert!(Version::parse("1.16.5-rc1") < Version::parse("1.16.5-rc2"));
    }

    #[test]
    fn test_snapshot_sorts_by_week() {
        assert!(Version::parse("13w41a") < Version::parse("13w42a"));
        assert!(Version::parse("13w41a") < Version::parse("13w41b"));
        assert!(Version::parse("13w41a") < Version::parse("14w02a"));
    }

    #[test]
    fn test_ordering_totality_sample() {
        let samples = [
            Version::parse("1.16.5"),
            Version::parse("1.16.5-rc1"),
            Version::parse("b1.16.5"),
            Version::parse("13w41a"),
            Version::parse("junk"),
        ];
        for a in &samples {
            for b in &samples {
                let lt = a < b;
                let eq = a == b;
                let gt = a > b;
                assert_eq!(
                    [lt, eq, gt].iter().filter(|&&x| x).count(),
                    1,
                    "exactly one relation must hold for {a} vs {b}"
                );
            }
        }
        // Transitivity over a sorted triple
        let (a, b, c) = (&samples[2], &samples[1], &samples[0]);
        assert!(a < b && b < c && a < c);
    }

    #[test]
    fn test_structural_equality_ignores_original_text() {
        // Both degrade to the all-zero Unknown version; equality and
        // compare() == 0 agree even though the display strings differ.
        let a = Version::parse("foo");
        let b = Version::parse("bar");
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_oversized_component_does_not_panic() {
        let v = Version::parse("99999999999.0.0");
        assert_eq!(v.kind(), VersionKind::Release);
        assert_eq!(v.major(), 0);
    }
}
