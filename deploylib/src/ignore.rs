//! Ignore-file loading and glob-based name matching.
//!
//! The ignore file is plain UTF-8 text with one shell-style glob pattern
//! per line. There is no comment syntax, no escaping, and no negation:
//! every line is a pattern, and patterns match entry *base names* only,
//! never full relative paths.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use glob::Pattern;

use crate::error::DeployError;
use crate::Result;

/// Read an ignore file into an ordered list of pattern strings.
///
/// Each line is whitespace-trimmed; blank lines are kept in the returned
/// sequence so callers see the file exactly as written.
pub fn load_patterns(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| DeployError::IgnoreFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(contents.lines().map(|line| line.trim().to_string()).collect())
}

/// A compiled set of ignore patterns, matched against entry base names.
///
/// Invalid glob syntax is not an error: a line that fails to compile
/// simply matches nothing, the same as a blank line.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// Compile a set from pattern strings. Blank and unparseable lines
    /// are dropped; they can never match a real entry name anyway.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = lines
            .into_iter()
            .filter_map(|line| {
                let line = line.as_ref().trim();
                if line.is_empty() {
                    return None;
                }
                Pattern::new(line).ok()
            })
            .collect();

        Self { patterns }
    }

    /// Load and compile an ignore file in one step.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_lines(load_patterns(path)?))
    }

    /// Whether any pattern matches the given base name.
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    /// OS-string variant for directory entry names. Names that are not
    /// valid UTF-8 are compared lossily.
    pub fn matches_os(&self, name: &OsStr) -> bool {
        match name.to_str() {
            Some(s) => self.matches(s),
            None => self.matches(&name.to_string_lossy()),
        }
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when no patterns compiled (everything gets copied).
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
