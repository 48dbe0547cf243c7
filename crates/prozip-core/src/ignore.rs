//! Ignored-filename policy.
//!
//! The export core never hardcodes which filenames are skipped; it asks
//! an [`IgnoreOracle`] for a verdict on the final path segment only.
//! [`IgnorePatterns`] is the stock oracle, covering the usual VCS and
//! editor metadata.

/// External policy deciding whether a filename is categorically skipped.
///
/// The oracle sees only the final path segment, never the full path.
pub trait IgnoreOracle {
    /// Returns `true` if entries with this filename must be skipped.
    fn is_ignored(&self, file_name: &str) -> bool;
}

/// Pattern-based [`IgnoreOracle`].
///
/// Supports three pattern forms:
/// - Exact match: `".git"` matches only `.git`
/// - Prefix wildcard: `"temp*"` matches names starting with `temp`
/// - Suffix wildcard: `"*.pyc"` matches names ending with `.pyc`
///
/// # Examples
///
/// ```
/// use prozip_core::IgnoreOracle;
/// use prozip_core::IgnorePatterns;
///
/// let ignores = IgnorePatterns::default();
/// assert!(ignores.is_ignored(".git"));
/// assert!(ignores.is_ignored("module.pyc"));
/// assert!(!ignores.is_ignored("main.rs"));
/// ```
#[derive(Debug, Clone)]
pub struct IgnorePatterns {
    patterns: Vec<String>,
}

impl Default for IgnorePatterns {
    /// Default patterns: VCS metadata, OS litter, compiled caches.
    fn default() -> Self {
        Self {
            patterns: vec![
                ".git".to_string(),
                ".hg".to_string(),
                ".svn".to_string(),
                ".DS_Store".to_string(),
                "Thumbs.db".to_string(),
                "__pycache__".to_string(),
                "*.pyc".to_string(),
            ],
        }
    }
}

impl IgnorePatterns {
    /// Creates an oracle from an explicit pattern list.
    #[must_use]
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// Creates an oracle that ignores nothing.
    #[must_use]
    pub fn none() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Adds a pattern to the oracle.
    #[must_use]
    pub fn with_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// The configured patterns.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl IgnoreOracle for IgnorePatterns {
    fn is_ignored(&self, file_name: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern_matches(file_name, pattern))
    }
}

/// Matches a filename against a simple glob pattern.
fn pattern_matches(name: &str, pattern: &str) -> bool {
    if pattern == name {
        return true;
    }

    if let Some(prefix) = pattern.strip_suffix('*') {
        return name.starts_with(prefix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        return name.ends_with(suffix);
    }

    false
}
