//! Workflow orchestration for the `latest` and `next` commands
//!
//! Handlers take the repository and the output writer as parameters so they
//! can be driven by the CLI or by tests against [crate::git::MockRepository].
//! Expected "nothing to report" conditions come back as [Outcome::NotFound];
//! only repository and I/O failures are returned as errors.

use std::io::Write;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::analyzer::BumpClassifier;
use crate::boundary::BoundaryWarning;
use crate::config::load_pattern_set;
use crate::domain::{resolve_latest_version_tag, SemanticVersion};
use crate::error::{Result, VerscoutError};
use crate::git::Repository;

/// Arguments for the `latest` command
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LatestArgs {
    /// Exit code to use when no version is found; `None` exits successfully
    pub exit_code: Option<i32>,
}

/// Arguments for the `next` command
#[derive(Debug, Clone, PartialEq)]
pub struct NextArgs {
    /// Exit code to use when no next version is found; `None` exits successfully
    pub exit_code: Option<i32>,

    /// Bump pattern configuration file
    pub config_path: PathBuf,

    /// Version reported when the repository has no version tag yet
    pub default_version: SemanticVersion,
}

/// What a command reported
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A version line was written
    Printed(SemanticVersion),

    /// Nothing was written
    NotFound {
        reason: BoundaryWarning,
        exit_code: Option<i32>,
    },
}

impl Outcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Printed(_) => 0,
            Outcome::NotFound { exit_code, .. } => exit_code.unwrap_or(0),
        }
    }
}

/// Resolve the version of the latest version tag.
///
/// # Returns
/// * `Ok(SemanticVersion)` - Version of the most recently committed version tag
/// * `Err(NotFound(NoTags | NoValidVersionTags))` - If there is no version tag
/// * `Err` - If the repository cannot be read
pub fn latest_version<R: Repository>(repo: &R) -> Result<SemanticVersion> {
    let tags = repo.list_tags_with_commits()?;
    let latest = resolve_latest_version_tag(&tags)?;
    latest.version()
}

/// Compute the next version from the commits since the latest version tag.
///
/// Without any version tag, `default_version` is returned and commit history
/// is not read.
///
/// # Returns
/// * `Ok(SemanticVersion)` - The next version
/// * `Err(NotFound(NoCommitsFound))` - If HEAD is the tagged commit
/// * `Err(NotFound(NoBump))` - If no commit since the tag triggers a bump
/// * `Err` - If the repository cannot be read
pub fn next_version<R: Repository>(
    repo: &R,
    classifier: &BumpClassifier,
    default_version: SemanticVersion,
) -> Result<SemanticVersion> {
    let tags = repo.list_tags_with_commits()?;
    let latest = match resolve_latest_version_tag(&tags) {
        Ok(tag) => tag,
        Err(VerscoutError::NotFound(reason)) if reason.is_missing_tag() => {
            warn!("No version tags found: {}", reason);
            info!(default_version = %default_version, "Using default version");
            return Ok(default_version);
        }
        Err(e) => return Err(e),
    };

    let current = latest.version()?;
    let messages = repo.commit_messages_since(latest.commit)?;
    info!(tag = %latest.name, commits = messages.len(), "Analyzing commits since latest version tag");

    classifier.next_version(&current, &messages)
}

/// Report the latest version.
pub fn handle_latest<R: Repository, W: Write>(
    writer: &mut W,
    repo: &R,
    args: &LatestArgs,
) -> Result<Outcome> {
    match latest_version(repo) {
        Ok(version) => {
            info!(version = %version, "Found latest version");
            writeln!(writer, "{}", version)?;
            Ok(Outcome::Printed(version))
        }
        Err(e) => not_found_outcome(e, args.exit_code, "Latest version not found"),
    }
}

/// Report the next version.
pub fn handle_next<R: Repository, W: Write>(
    writer: &mut W,
    repo: &R,
    args: &NextArgs,
) -> Result<Outcome> {
    let classifier = BumpClassifier::new(load_pattern_set(&args.config_path));

    match next_version(repo, &classifier, args.default_version) {
        Ok(version) => {
            info!(version = %version, "Calculated next version");
            writeln!(writer, "{}", version)?;
            Ok(Outcome::Printed(version))
        }
        Err(e) => not_found_outcome(e, args.exit_code, "Next version not found"),
    }
}

fn not_found_outcome(err: VerscoutError, exit_code: Option<i32>, context: &str) -> Result<Outcome> {
    match err {
        VerscoutError::NotFound(reason) => {
            warn!("{}: {}", context, reason);
            Ok(Outcome::NotFound { reason, exit_code })
        }
        other => Err(other),
    }
}
