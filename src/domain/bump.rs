use std::cmp::Ordering;
use std::fmt;

/// Severity of a version bump, ordered `None < Patch < Minor < Major`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BumpLevel {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    /// Explicit precedence used for ordering bump levels
    pub fn rank(self) -> u8 {
        match self {
            BumpLevel::None => 0,
            BumpLevel::Patch => 1,
            BumpLevel::Minor => 2,
            BumpLevel::Major => 3,
        }
    }
}

impl Ord for BumpLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for BumpLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpLevel::None => "NONE",
            BumpLevel::Patch => "PATCH",
            BumpLevel::Minor => "MINOR",
            BumpLevel::Major => "MAJOR",
        };
        f.write_str(name)
    }
}
