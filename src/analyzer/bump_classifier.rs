use crate::boundary::BoundaryWarning;
use crate::config::PatternSet;
use crate::domain::{BumpLevel, SemanticVersion};
use crate::error::Result;
use regex::Regex;
use tracing::info;

/// Classifies commit messages into bump levels using regex pattern groups
#[derive(Debug, Clone, Default)]
pub struct BumpClassifier {
    patterns: PatternSet,
}

impl BumpClassifier {
    /// Create a new classifier over the given patterns
    pub fn new(patterns: PatternSet) -> Self {
        BumpClassifier { patterns }
    }

    /// Classify a single message.
    ///
    /// Groups are checked major, then minor, then patch; the first group with
    /// a matching pattern decides the level.
    pub fn classify_message(&self, message: &str) -> BumpLevel {
        let groups = [
            (BumpLevel::Major, self.patterns.major()),
            (BumpLevel::Minor, self.patterns.minor()),
            (BumpLevel::Patch, self.patterns.patch()),
        ];

        groups
            .into_iter()
            .find(|(_, patterns)| any_match(patterns, message))
            .map(|(level, _)| level)
            .unwrap_or(BumpLevel::None)
    }

    /// Highest bump level required by any of the messages
    pub fn classify(&self, messages: &[String]) -> BumpLevel {
        let mut level = BumpLevel::None;

        for message in messages {
            let detected = self.classify_message(message);
            if detected > level {
                info!(bump = %detected, "Detected bump type");
                level = detected;
            }
            if level == BumpLevel::Major {
                break;
            }
        }

        level
    }

    /// Compute the version that follows `current` given the commits since it.
    ///
    /// # Returns
    /// * `Ok(SemanticVersion)` - The bumped version
    /// * `Err(NotFound(NoCommitsFound))` - If `messages` is empty
    /// * `Err(NotFound(NoBump))` - If no message triggers a bump
    /// * `Err(InvalidVersion)` - If the bumped component would overflow
    pub fn next_version(
        &self,
        current: &SemanticVersion,
        messages: &[String],
    ) -> Result<SemanticVersion> {
        if messages.is_empty() {
            return Err(BoundaryWarning::NoCommitsFound.into());
        }

        match self.classify(messages) {
            BumpLevel::None => Err(BoundaryWarning::NoBump.into()),
            level => current.bump(level),
        }
    }
}

fn any_match(patterns: &[Regex], message: &str) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(message))
}
