// emMorph tag constants and tag-level predicates shared by the compound modules.

use std::sync::LazyLock;

use regex::Regex;

/// Preverb morpheme / tag prefix.
pub const PREVERB_TAG: &str = "[/Prev]";

/// Verb word class.
pub const VERB_TAG: &str = "[/V]";

/// Superlative prefix `leg-`; never a compound component.
pub const SUPERLATIVE_TAG: &str = "[/Supl]";

/// Marker of Roman numeral tags, e.g. `[/Num|Roman]`.
pub const ROMAN_NUMBER_MARK: &str = "Roman";

/// Marker of Arabic digit tags, e.g. `[/Num|Digit]`.
pub const ARABIC_NUMBER_MARK: &str = "Digit";

/// A morpheme boundary followed by a word-class tag: `+word[/`.
static BOUNDARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\+\w+\[/").unwrap());

/// The first word-class tag of an xpostag.
static COARSE_POS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[/.+?\]").unwrap());

/// Whether `text` contains a potential compound boundary (`+word[/`).
///
/// Used both on the whole serialized `anas` field and on single morphana
/// strings.
pub fn has_boundary(text: &str) -> bool {
    BOUNDARY_PATTERN.is_match(text)
}

/// Extract the coarse part of speech, i.e. the first `[/...]` group.
///
/// Returns an empty string if the tag has no word-class group.
pub fn coarse_pos(xpostag: &str) -> &str {
    COARSE_POS_PATTERN
        .find(xpostag)
        .map_or("", |m| m.as_str())
}

/// Whether the tag belongs to a verb.
pub fn is_verb(xpostag: &str) -> bool {
    xpostag.contains(VERB_TAG)
}

/// Whether the tag belongs to a numeral written with digits or Roman numerals.
pub fn is_number(xpostag: &str) -> bool {
    xpostag.contains(ROMAN_NUMBER_MARK) || xpostag.contains(ARABIC_NUMBER_MARK)
}
