use crate::domain::TagCandidate;
use crate::error::{Result, VerscoutError};
use git2::{ErrorCode, Oid, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::{debug, warn};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            VerscoutError::repository(format!(
                "failed to open git repository at {}: {}",
                path.display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Root of the working tree, `None` for a bare repository
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }
}

impl super::Repository for Git2Repository {
    fn list_tags_with_commits(&self) -> Result<Vec<TagCandidate>> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::with_capacity(names.len());

        for name in names.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;

            // Peels annotated tags through to the commit they target
            let commit = match reference.peel_to_commit() {
                Ok(commit) => commit,
                Err(e) if is_not_a_commit(&e) => {
                    warn!(tag = %name, error = %e, "Skipping tag that does not point to a commit");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            tags.push(TagCandidate::new(name, commit.id(), commit.time().seconds()));
        }

        debug!(count = tags.len(), "Listed repository tags");
        Ok(tags)
    }

    fn commit_messages_since(&self, from_oid: Oid) -> Result<Vec<String>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push_head()?;
        revwalk.hide(from_oid)?;

        let mut messages = Vec::new();
        for oid_result in revwalk {
            let commit = self.repo.find_commit(oid_result?)?;
            messages.push(String::from_utf8_lossy(commit.message_bytes()).into_owned());
        }

        debug!(count = messages.len(), since = %from_oid, "Collected commit messages");
        Ok(messages)
    }
}

/// Peeling a tree or blob to a commit fails with one of these codes; a
/// missing or corrupt object does not.
fn is_not_a_commit(err: &git2::Error) -> bool {
    matches!(err.code(), ErrorCode::Peel | ErrorCode::InvalidSpec)
}
