use crate::domain::TagCandidate;
use crate::error::{Result, VerscoutError};
use crate::git::Repository;
use git2::Oid;

#[derive(Debug, Clone)]
struct MockCommit {
    oid: Oid,
    message: String,
    timestamp: i64,
}

/// In-memory repository with a linear history, for testing without git
#[derive(Debug, Default)]
pub struct MockRepository {
    /// Oldest first; the last commit is HEAD
    commits: Vec<MockCommit>,
    tags: Vec<(String, Oid)>,
    failure: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit on top of HEAD and return its OID
    pub fn commit(&mut self, message: impl Into<String>, timestamp: i64) -> Oid {
        let index = self.commits.len() as u32 + 1;
        let mut bytes = [0u8; 20];
        bytes[16..].copy_from_slice(&index.to_be_bytes());
        let oid = Oid::from_bytes(&bytes).expect("20 bytes always form an oid");

        self.commits.push(MockCommit {
            oid,
            message: message.into(),
            timestamp,
        });
        oid
    }

    /// Add a tag pointing to a commit
    pub fn tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.push((name.into(), oid));
    }

    /// Make every repository call fail with the given message
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
    }

    fn check_failure(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(VerscoutError::repository(message.clone())),
            None => Ok(()),
        }
    }
}

impl Repository for MockRepository {
    fn list_tags_with_commits(&self) -> Result<Vec<TagCandidate>> {
        self.check_failure()?;

        self.tags
            .iter()
            .map(|(name, oid)| -> Result<TagCandidate> {
                let commit = self
                    .commits
                    .iter()
                    .find(|c| c.oid == *oid)
                    .ok_or_else(|| {
                        VerscoutError::repository(format!("tag {} points to unknown commit", name))
                    })?;
                Ok(TagCandidate::new(name.clone(), commit.oid, commit.timestamp))
            })
            .collect()
    }

    fn commit_messages_since(&self, from_oid: Oid) -> Result<Vec<String>> {
        self.check_failure()?;

        if self.commits.is_empty() {
            return Err(VerscoutError::repository("reference 'HEAD' not found"));
        }

        Ok(self
            .commits
            .iter()
            .rev()
            .take_while(|c| c.oid != from_oid)
            .map(|c| c.message.clone())
            .collect())
    }
}
