// Exception table: known prefix/suffix pairs that look like compounds but are not.
//
// Each line of the table is `prefix+suffix`. When a boundary candidate
// follows a component equal to `prefix` and the rest of the lemma starts
// with `suffix`, the boundary is suppressed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::{HashMap, HashSet};

use emcompound_core::error::{CompoundError, Result};

/// Mapping from a compound-initial component to the suffixes after which a
/// boundary must not be placed. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct ExceptionTable {
    entries: HashMap<String, HashSet<String>>,
}

impl ExceptionTable {
    /// A table that never suppresses anything.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a table from line-oriented `prefix+suffix` text.
    ///
    /// Lines are trimmed and blank lines skipped. Any other line must contain
    /// exactly one `+`; otherwise the load fails with the 1-based line number.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut entries: HashMap<String, HashSet<String>> = HashMap::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let pair = line.trim();
            if pair.is_empty() {
                continue;
            }
            let mut parts = pair.split('+');
            let (Some(prefix), Some(suffix), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(CompoundError::ExceptionLine {
                    line: i + 1,
                    content: pair.to_string(),
                });
            };
            entries
                .entry(prefix.to_string())
                .or_default()
                .insert(suffix.to_string());
        }
        log::debug!("loaded exception table with {} prefixes", entries.len());
        Ok(Self { entries })
    }

    /// Load a table from a string.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    /// Load a table from a UTF-8 file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Whether a boundary between `previous_component` and `remaining` must
    /// be suppressed.
    ///
    /// An empty previous component never suppresses.
    pub fn suppresses(&self, previous_component: &str, remaining: &str) -> bool {
        if previous_component.is_empty() {
            return false;
        }
        self.entries
            .get(previous_component)
            .is_some_and(|suffixes| suffixes.iter().any(|s| remaining.starts_with(s.as_str())))
    }

    /// Number of distinct prefixes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
