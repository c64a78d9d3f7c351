use crate::domain::BumpLevel;
use crate::error::{Result, VerscoutError};
use std::fmt;
use std::str::FromStr;

/// Three-component semantic version, e.g. `1.2.3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemanticVersion {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version tag (e.g., "v1.2.3" -> SemanticVersion(1,2,3))
    ///
    /// Accepts exactly `major.minor.patch` with ASCII digits, optionally
    /// preceded by a single lowercase `v`. A well-formed tag whose component
    /// does not fit in a `u64` is still an error here.
    pub fn parse(tag: &str) -> Result<Self> {
        let [major, minor, patch] = split_components(tag).ok_or_else(|| {
            VerscoutError::invalid_version(format!(
                "'{}' - expected MAJOR.MINOR.PATCH with an optional 'v' prefix",
                tag
            ))
        })?;

        let component = |digits: &str| {
            digits.parse::<u64>().map_err(|_| {
                VerscoutError::invalid_version(format!(
                    "'{}' - component '{}' is too large",
                    tag, digits
                ))
            })
        };

        Ok(SemanticVersion {
            major: component(major)?,
            minor: component(minor)?,
            patch: component(patch)?,
        })
    }

    /// Apply a bump, resetting lower-order components
    ///
    /// # Returns
    /// * `Ok(SemanticVersion)` - The bumped version
    /// * `Err(InvalidVersion)` - If the bumped component would overflow
    pub fn bump(&self, level: BumpLevel) -> Result<Self> {
        let overflow =
            || VerscoutError::invalid_version(format!("cannot bump {} past its maximum", self));

        Ok(match level {
            BumpLevel::Major => {
                SemanticVersion::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            BumpLevel::Minor => SemanticVersion::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            BumpLevel::Patch => SemanticVersion::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
            BumpLevel::None => *self,
        })
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = VerscoutError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

/// Whether `tag` has the shape `v?DIGITS.DIGITS.DIGITS`.
///
/// Only the shape is checked, so components of any length are valid.
pub fn is_valid_tag(tag: &str) -> bool {
    split_components(tag).is_some()
}

fn split_components(tag: &str) -> Option<[&str; 3]> {
    let raw = tag.strip_prefix('v').unwrap_or(tag);
    let mut parts = raw.split('.');
    let mut components = [""; 3];

    for component in components.iter_mut() {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *component = part;
    }

    if parts.next().is_some() {
        return None;
    }

    Some(components)
}
