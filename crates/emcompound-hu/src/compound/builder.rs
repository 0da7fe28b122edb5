// Candidate builder: one analysis -> one candidate boundary set
//
// Walks the morphemes of an analysis left to right, consuming each one from
// the surface lemma. Every morpheme that opens a new word class after some
// text has been consumed marks a boundary at the current length.

use emcompound_core::analysis::{Analysis, Morpheme};
use emcompound_core::boundary::BoundarySet;
use emcompound_core::error::Result;

use crate::exceptions::ExceptionTable;
use crate::morphology::parse_morphana;
use crate::tags::{PREVERB_TAG, SUPERLATIVE_TAG};

/// The segmentation proposed by one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The lemma as reconstructed from the morphemes (a prefix of the surface
    /// lemma, or the whole lemma).
    pub compound_lemma: String,
    /// Character offsets of the compound boundaries.
    pub boundaries: BoundarySet,
    /// The analysis starts with a preverb.
    pub preverb: bool,
}

/// Build the candidate segmentation of `lemma` proposed by `analysis`.
///
/// Fails only if the morphana string is malformed. Mismatches between the
/// morpheme notation and the surface lemma are recovered from by keeping the
/// unmatched rest of the lemma as the final component.
pub fn build_candidate(
    analysis: &Analysis,
    lemma: &str,
    exceptions: &ExceptionTable,
) -> Result<Candidate> {
    let morphemes = parse_morphana(&analysis.morphana)?;
    Ok(build_from_morphemes(&morphemes, lemma, exceptions))
}

/// Build a candidate from already parsed morphemes.
pub fn build_from_morphemes(
    morphemes: &[Morpheme],
    lemma: &str,
    exceptions: &ExceptionTable,
) -> Candidate {
    let preverb = morphemes.first().is_some_and(|m| m.tag == PREVERB_TAG);

    let mut remaining = lemma;
    let mut compound_lemma = String::with_capacity(lemma.len());
    let mut compound_chars = 0;
    let mut previous_component = String::new();
    let mut boundaries = BoundarySet::new();

    for morpheme in morphemes {
        if morpheme.tag == SUPERLATIVE_TAG {
            continue;
        }

        if morpheme.opens_word_class() && !compound_lemma.is_empty() {
            if !exceptions.suppresses(&previous_component, remaining) {
                boundaries.insert(compound_chars);
            }
            previous_component.clear();
        }

        let mut matched = false;
        for form in preferred_forms(morpheme) {
            if form.is_empty() {
                matched = true;
                break;
            }
            if let Some(rest) = remaining.strip_prefix(form) {
                compound_lemma.push_str(form);
                compound_chars += form.chars().count();
                previous_component.push_str(form);
                remaining = rest;
                matched = true;
                break;
            }
        }

        if compound_lemma == lemma {
            break;
        }
        if !matched {
            compound_lemma.push_str(remaining);
            break;
        }
    }

    Candidate {
        compound_lemma,
        boundaries,
        preverb,
    }
}

/// The two spellings of a morpheme to try against the lemma, the longer
/// (more specific) one first. On equal length the lemma comes first.
fn preferred_forms(morpheme: &Morpheme) -> [&str; 2] {
    if morpheme.form.chars().count() > morpheme.lemma.chars().count() {
        [morpheme.form.as_str(), morpheme.lemma.as_str()]
    } else {
        [morpheme.lemma.as_str(), morpheme.form.as_str()]
    }
}
