use std::fmt;

/// Expected conditions where there is no version to report.
/// These are non-fatal and callers decide whether they map to an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryWarning {
    /// The repository has no tags at all
    NoTags,
    /// Tags exist but none of them is a `major.minor.patch` version
    NoValidVersionTags,
    /// HEAD is the commit of the latest version tag
    NoCommitsFound,
    /// Commits exist since the latest version tag but none triggers a bump
    NoBump,
}

impl BoundaryWarning {
    /// True for the conditions raised while resolving the latest version tag.
    pub fn is_missing_tag(&self) -> bool {
        matches!(
            self,
            BoundaryWarning::NoTags | BoundaryWarning::NoValidVersionTags
        )
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoTags => write!(f, "no tags found"),
            BoundaryWarning::NoValidVersionTags => write!(f, "no valid version tags found"),
            BoundaryWarning::NoCommitsFound => {
                write!(f, "no commits found since the latest version tag")
            }
            BoundaryWarning::NoBump => {
                write!(f, "no conventional commits found that affect the version")
            }
        }
    }
}

impl std::error::Error for BoundaryWarning {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tag_conditions() {
        assert!(BoundaryWarning::NoTags.is_missing_tag());
        assert!(BoundaryWarning::NoValidVersionTags.is_missing_tag());
        assert!(!BoundaryWarning::NoCommitsFound.is_missing_tag());
        assert!(!BoundaryWarning::NoBump.is_missing_tag());
    }

    #[test]
    fn test_display_messages_are_distinct() {
        let messages: Vec<String> = [
            BoundaryWarning::NoTags,
            BoundaryWarning::NoValidVersionTags,
            BoundaryWarning::NoCommitsFound,
            BoundaryWarning::NoBump,
        ]
        .iter()
        .map(|w| w.to_string())
        .collect();

        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
