//! Semantic version comparison utilities.
//!
//! Release tags arrive as strings (`v5.7.0`, `5.7.0`) and must be compared
//! by semver precedence, never lexicographically: `1.10.0` is newer than
//! `1.9.0` even though it sorts earlier as a string. Malformed entries in a
//! version list are skipped with a warning rather than aborting the whole
//! comparison.

use semver::Version;
use tracing::warn;

/// Version comparison helpers for release tag strings.
///
/// All methods tolerate a leading `v` prefix and handle malformed strings
/// gracefully.
pub struct VersionComparator;

impl VersionComparator {
    /// Strip a leading `v` from a tag, e.g. `v5.7.0` → `5.7.0`.
    #[must_use]
    pub fn normalize(tag: &str) -> &str {
        tag.strip_prefix('v').unwrap_or(tag)
    }

    /// Parse a version string, accepting the `v` prefix.
    pub fn parse(version_str: &str) -> Result<Version, semver::Error> {
        Version::parse(Self::normalize(version_str))
    }

    /// The highest version in `versions` under semver precedence.
    ///
    /// Malformed entries are skipped with a warning. Returns `None` when the
    /// list is empty or contains no parseable versions. The result does not
    /// depend on the input ordering.
    #[must_use]
    pub fn latest(versions: &[String]) -> Option<&String> {
        let mut best: Option<(&String, Version)> = None;

        for candidate in versions {
            match Self::parse(candidate) {
                Ok(parsed) => {
                    if best.as_ref().is_none_or(|(_, v)| parsed > *v) {
                        best = Some((candidate, parsed));
                    }
                }
                Err(e) => {
                    warn!("skipping malformed version '{candidate}': {e}");
                }
            }
        }

        best.map(|(s, _)| s)
    }

    /// Whether two version strings denote the same version.
    ///
    /// Compared by parsed semver when both sides parse, so `v5.6.0` matches
    /// `5.6.0`; falls back to exact string equality for non-semver tags.
    #[must_use]
    pub fn same(a: &str, b: &str) -> bool {
        match (Self::parse(a), Self::parse(b)) {
            (Ok(va), Ok(vb)) => va == vb,
            _ => Self::normalize(a) == Self::normalize(b),
        }
    }
}
