//! Domain logic - pure version rules independent of git operations

pub mod bump;
pub mod tag;
pub mod version;

pub use bump::BumpLevel;
pub use tag::{resolve_latest_version_tag, TagCandidate};
pub use version::{is_valid_tag, SemanticVersion};
