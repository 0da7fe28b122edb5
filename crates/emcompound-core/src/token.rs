// Token view over a positional xtsv row and the field mapping behind it

use crate::error::{CompoundError, Result};

/// Input fields the compound module reads.
pub const SOURCE_FIELDS: [&str; 3] = ["lemma", "xpostag", "anas"];

/// Fields the compound module appends.
pub const TARGET_FIELDS: [&str; 1] = ["compound"];

// ---------------------------------------------------------------------------
// FieldMap
// ---------------------------------------------------------------------------

/// Column indices of the source fields, resolved once from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMap {
    pub lemma: usize,
    pub xpostag: usize,
    pub anas: usize,
}

impl FieldMap {
    /// Resolve the source fields against a header row.
    ///
    /// Fails with [`CompoundError::MissingField`] naming the first source
    /// field absent from `header`.
    pub fn resolve<S: AsRef<str>>(header: &[S]) -> Result<Self> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.as_ref() == name)
                .ok_or_else(|| CompoundError::MissingField(name.to_string()))
        };
        Ok(Self {
            lemma: find(SOURCE_FIELDS[0])?,
            xpostag: find(SOURCE_FIELDS[1])?,
            anas: find(SOURCE_FIELDS[2])?,
        })
    }

}

/// Fetch column `index` of `row`, naming `field` if the row is too short.
fn column<'r, S: AsRef<str>>(row: &'r [S], field: &str, index: usize) -> Result<&'r str> {
    row.get(index)
        .map(|s| s.as_ref())
        .ok_or_else(|| CompoundError::ShortRow {
            field: field.to_string(),
            index,
            actual: row.len(),
        })
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// The fields of one token that compound detection needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    /// Citation form chosen by the lemmatizer.
    pub lemma: String,
    /// Chosen morphosyntactic tag, e.g. `[/N][Nom]`.
    pub xpostag: String,
    /// Serialized JSON list of candidate analyses.
    pub anas: String,
}

impl Token {
    pub fn new(
        lemma: impl Into<String>,
        xpostag: impl Into<String>,
        anas: impl Into<String>,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            xpostag: xpostag.into(),
            anas: anas.into(),
        }
    }

    /// Copy the source fields out of a positional row.
    pub fn from_row<S: AsRef<str>>(row: &[S], fields: &FieldMap) -> Result<Self> {
        Ok(Self {
            lemma: column(row, SOURCE_FIELDS[0], fields.lemma)?.to_string(),
            xpostag: column(row, SOURCE_FIELDS[1], fields.xpostag)?.to_string(),
            anas: column(row, SOURCE_FIELDS[2], fields.anas)?.to_string(),
        })
    }
}
