use crate::error::{Result, VerscoutError};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Configuration file looked up in the repository root
pub const DEFAULT_CONFIG_FILE: &str = ".verscout.toml";

/// Built-in pattern groups used when no configuration is loaded.
///
/// Patterns are compiled in multi-line mode, so `^` matches at the start of
/// every line and `\A` only at the start of the message.
pub static DEFAULT_BUMP_PATTERNS: DefaultPatterns = DefaultPatterns {
    major: &[r"^BREAKING CHANGE:"],
    minor: &[r"\Afeat(\(.*\))?:"],
    patch: &[r"\Afix(\(.*\))?:"],
};

/// Static pattern groups, one list per bump severity
#[derive(Debug)]
pub struct DefaultPatterns {
    pub major: &'static [&'static str],
    pub minor: &'static [&'static str],
    pub patch: &'static [&'static str],
}

/// The complete configuration document.
///
/// ```toml
/// [bumps]
/// majorPatterns = ["^BREAKING CHANGE:"]
/// minorPatterns = ['\Afeat(\(.*\))?:']
/// patchPatterns = ['\Afix(\(.*\))?:']
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BumpConfig {
    pub bumps: BumpPatterns,
}

/// Regex sources for each bump severity.
///
/// A missing list deserializes as empty, which makes that severity unreachable.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BumpPatterns {
    #[serde(default)]
    pub major_patterns: Vec<String>,

    #[serde(default)]
    pub minor_patterns: Vec<String>,

    #[serde(default)]
    pub patch_patterns: Vec<String>,
}

impl Default for BumpConfig {
    fn default() -> Self {
        BumpConfig {
            bumps: BumpPatterns {
                major_patterns: owned(DEFAULT_BUMP_PATTERNS.major),
                minor_patterns: owned(DEFAULT_BUMP_PATTERNS.minor),
                patch_patterns: owned(DEFAULT_BUMP_PATTERNS.patch),
            },
        }
    }
}

fn owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

impl BumpPatterns {
    /// Compile every pattern group.
    ///
    /// # Returns
    /// * `Ok(PatternSet)` - All patterns compiled
    /// * `Err(Config)` - If any pattern is not a valid regular expression
    pub fn compile(&self) -> Result<PatternSet> {
        Ok(PatternSet {
            major: compile_group("majorPatterns", &self.major_patterns)?,
            minor: compile_group("minorPatterns", &self.minor_patterns)?,
            patch: compile_group("patchPatterns", &self.patch_patterns)?,
        })
    }
}

/// Compiled pattern groups, immutable once built
#[derive(Debug, Clone)]
pub struct PatternSet {
    major: Vec<Regex>,
    minor: Vec<Regex>,
    patch: Vec<Regex>,
}

impl PatternSet {
    pub fn major(&self) -> &[Regex] {
        &self.major
    }

    pub fn minor(&self) -> &[Regex] {
        &self.minor
    }

    pub fn patch(&self) -> &[Regex] {
        &self.patch
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        static DEFAULT_SET: OnceLock<PatternSet> = OnceLock::new();
        DEFAULT_SET
            .get_or_init(|| {
                BumpConfig::default()
                    .bumps
                    .compile()
                    .expect("built-in bump patterns are valid regular expressions")
            })
            .clone()
    }
}

fn compile_pattern(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).multi_line(true).build()
}

fn compile_group(group: &str, patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            compile_pattern(pattern).map_err(|e| {
                VerscoutError::config(format!("invalid pattern '{}' in {}: {}", pattern, group, e))
            })
        })
        .collect()
}

/// Load a configuration document from a TOML file.
///
/// # Returns
/// * `Ok(BumpConfig)` - Parsed configuration
/// * `Err(Io)` - If the file cannot be read
/// * `Err(Config)` - If the file is not a valid configuration document
pub fn load_bump_config(path: &Path) -> Result<BumpConfig> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| VerscoutError::config(format!("failed to parse {}: {}", path.display(), e)))
}

/// Load the pattern set from `path`, falling back to the built-in defaults.
///
/// A loaded document replaces the defaults wholesale. Any failure is logged as
/// a warning and never aborts the caller.
pub fn load_pattern_set(path: &Path) -> PatternSet {
    match load_bump_config(path).and_then(|config| config.bumps.compile()) {
        Ok(patterns) => {
            debug!(path = %path.display(), "Loaded bump patterns from config");
            patterns
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Using default bump patterns");
            PatternSet::default()
        }
    }
}

/// Pick the configuration file to use.
///
/// Looks in the following order:
/// 1. Explicit path provided as parameter
/// 2. `.verscout.toml` in `repo_dir`
/// 3. `verscout/config.toml` in user config directory
/// 4. `.verscout.toml` in `repo_dir`, even though it does not exist
pub fn resolve_config_path(explicit: Option<&Path>, repo_dir: &Path) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let local = repo_dir.join(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return local;
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join("verscout").join("config.toml");
        if user_config.exists() {
            return user_config;
        }
    }

    local
}
