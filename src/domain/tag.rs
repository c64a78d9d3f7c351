use crate::boundary::BoundaryWarning;
use crate::domain::version::{is_valid_tag, SemanticVersion};
use crate::error::Result;
use git2::Oid;
use tracing::debug;

/// A repository tag paired with the commit it ultimately points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCandidate {
    pub name: String,
    /// Commit the tag resolves to (annotated tags are peeled)
    pub commit: Oid,
    /// Commit time in unix seconds
    pub timestamp: i64,
}

impl TagCandidate {
    /// Create a new tag candidate
    pub fn new(name: impl Into<String>, commit: Oid, timestamp: i64) -> Self {
        TagCandidate {
            name: name.into(),
            commit,
            timestamp,
        }
    }

    /// Whether the tag name is a `major.minor.patch` version
    pub fn is_valid_version(&self) -> bool {
        is_valid_tag(&self.name)
    }

    /// Parse the tag name as a version
    pub fn version(&self) -> Result<SemanticVersion> {
        SemanticVersion::parse(&self.name)
    }
}

/// Select the most recently committed tag whose name is a valid version.
///
/// Tags that are not versions are ignored even when they are newer. When two
/// valid tags share a timestamp the first one encountered wins.
///
/// # Returns
/// * `Ok(&TagCandidate)` - The latest version tag
/// * `Err(NotFound(NoTags))` - If `tags` is empty
/// * `Err(NotFound(NoValidVersionTags))` - If no tag name is a valid version
pub fn resolve_latest_version_tag(tags: &[TagCandidate]) -> Result<&TagCandidate> {
    if tags.is_empty() {
        return Err(BoundaryWarning::NoTags.into());
    }

    let mut latest: Option<&TagCandidate> = None;
    for tag in tags.iter().filter(|t| t.is_valid_version()) {
        match latest {
            Some(current) if tag.timestamp <= current.timestamp => {}
            _ => latest = Some(tag),
        }
    }

    let latest = latest.ok_or(BoundaryWarning::NoValidVersionTags)?;
    debug!(tag = %latest.name, commit = %latest.commit, "Found latest version tag");

    Ok(latest)
}
