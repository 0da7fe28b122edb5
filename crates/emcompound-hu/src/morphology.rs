// Morpheme parser for emMorph morphana strings
//
// A morphana string is a `+`-joined list of morphemes, each written as
// `lemma[tag]=form`, e.g.
//   kerék[/N]=kerék+pár[/N]=pár+út[/N]=út+[Nom]=
//
// The rest of the crate only sees the typed `Morpheme` sequence.

use std::sync::LazyLock;

use regex::Regex;

use emcompound_core::analysis::Morpheme;
use emcompound_core::error::{CompoundError, Result};

/// `lemma[tag]=form`. Greedy matching makes the last bracketed group before
/// `=` the tag, so `nagy[/Adj][_Comp/Adj]=nagyobb` has tag `[_Comp/Adj]`.
static MORPHEME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<lemma>.*)(?P<tag>\[.+\])=(?P<form>.*)$").unwrap()
});

/// Separator between morphemes.
const MORPHEME_SEPARATOR: char = '+';

/// Parse one morpheme written as `lemma[tag]=form`.
pub fn parse_morpheme(piece: &str) -> Option<Morpheme> {
    let caps = MORPHEME_PATTERN.captures(piece)?;
    Some(Morpheme::new(&caps["lemma"], &caps["tag"], &caps["form"]))
}

/// Parse a morphana string into its morphemes, in order.
///
/// Any piece that does not match `lemma[tag]=form` fails the whole parse:
/// corrupt upstream data is never silently skipped.
pub fn parse_morphana(morphana: &str) -> Result<Vec<Morpheme>> {
    morphana
        .split(MORPHEME_SEPARATOR)
        .map(|piece| {
            parse_morpheme(piece).ok_or_else(|| CompoundError::Morpheme {
                piece: piece.to_string(),
                morphana: morphana.to_string(),
            })
        })
        .collect()
}
