// Morphological analysis types: one candidate parse per `anas` entry

use serde::Deserialize;

use crate::error::Result;

/// One candidate morphological analysis of a token.
///
/// Deserialized from one object of the `anas` JSON array produced by the
/// morphological analyzer. Keys other than the four below are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Analysis {
    /// Lemma proposed by this analysis.
    pub lemma: String,
    /// Full morphosyntactic tag, e.g. `[/N][Nom]`.
    pub tag: String,
    /// Machine-readable morpheme breakdown, e.g. `ház[/N]=ház+tartás[/N]=tartás`.
    pub morphana: String,
    /// Human-readable breakdown, e.g. `ház[/N] + tartás[/N]`.
    pub readable: String,
}

impl Analysis {
    pub fn new(
        lemma: impl Into<String>,
        tag: impl Into<String>,
        morphana: impl Into<String>,
        readable: impl Into<String>,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            tag: tag.into(),
            morphana: morphana.into(),
            readable: readable.into(),
        }
    }

    /// Whether this analysis agrees with the lemma and tag chosen for the token.
    pub fn matches(&self, lemma: &str, tag: &str) -> bool {
        self.lemma == lemma && self.tag == tag
    }
}

/// Parse the serialized `anas` field into its analyses.
///
/// Malformed JSON is a format error; there is no partial recovery.
pub fn parse_anas(anas: &str) -> Result<Vec<Analysis>> {
    Ok(serde_json::from_str(anas)?)
}

/// One segment of a morphana string: `lemma[tag]=form`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Morpheme {
    /// Dictionary form of the segment.
    pub lemma: String,
    /// Bracketed category, e.g. `[/N]`, `[/Prev]`, `[Nom]`.
    pub tag: String,
    /// Surface form of the segment.
    pub form: String,
}

impl Morpheme {
    pub fn new(lemma: impl Into<String>, tag: impl Into<String>, form: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            tag: tag.into(),
            form: form.into(),
        }
    }

    /// Whether the tag opens a new word class (`[/...]`), i.e. a potential
    /// compound boundary.
    pub fn opens_word_class(&self) -> bool {
        self.tag.starts_with("[/")
    }
}
