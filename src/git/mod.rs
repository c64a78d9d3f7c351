//! Git operations abstraction layer
//!
//! The core only needs two things from a repository: every tag with the
//! commit it points to, and the commit messages since a given commit. The
//! [Repository] trait captures exactly that so the version logic can run
//! against a real repository or an in-memory one.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! ```rust,no_run
//! # use verscout::git::{Git2Repository, Repository};
//! # fn example() -> verscout::Result<()> {
//! let repo = Git2Repository::open(".")?;
//! for tag in repo.list_tags_with_commits()? {
//!     println!("{} -> {}", tag.name, tag.commit);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::TagCandidate;
use crate::error::Result;
use git2::Oid;

/// Read-only repository access needed to resolve and bump versions
///
/// ## Error Handling
///
/// Failures here are environment problems (unreadable repository, broken
/// history). Implementations report them as [crate::error::VerscoutError::Git]
/// or [crate::error::VerscoutError::Repository] and callers treat them as fatal.
pub trait Repository {
    /// List every tag with the commit it ultimately points to
    ///
    /// Annotated tags are resolved to their target commit, and the timestamp
    /// is that commit's time, not the tagger time.
    ///
    /// # Returns
    /// * `Ok(Vec<TagCandidate>)` - All tags, in no particular order
    /// * `Err` - If tags cannot be enumerated or resolved
    fn list_tags_with_commits(&self) -> Result<Vec<TagCandidate>>;

    /// Get commit messages from HEAD back to `from_oid`
    ///
    /// Returns the messages of commits reachable from HEAD but not from
    /// `from_oid`, newest first. `from_oid` itself is excluded.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Messages, empty when HEAD is `from_oid`
    /// * `Err` - If HEAD cannot be resolved or history cannot be walked
    fn commit_messages_since(&self, from_oid: Oid) -> Result<Vec<String>>;
}
