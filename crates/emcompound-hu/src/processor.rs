// Sentence processor: per-token classification, caching and annotation
//
// Each token is routed to exactly one of four cases, checked in order:
//   1. cache hit              -> replay the cached segmentations
//   2. verb with a preverb    -> one boundary after the preverb
//   3. compound candidate     -> build, reduce and render all candidates
//   4. anything else          -> lemma unchanged, cached only on request

use emcompound_core::analysis::{Analysis, parse_anas};
use emcompound_core::boundary::render_segmentations;
use emcompound_core::error::Result;
use emcompound_core::token::{FieldMap, Token};

use crate::cache::{CacheEntry, CompoundCache, cache_key};
use crate::compound::{build_candidate, reduce};
use crate::exceptions::ExceptionTable;
use crate::tags::{PREVERB_TAG, has_boundary, is_number, is_verb};

/// Separator between the parts of a `readable` analysis string.
const READABLE_SEPARATOR: &str = " + ";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Behaviour switches of the sentence processor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompoundOptions {
    /// Prefix the `xpostag` column with `[/Prev]` when the compound analysis
    /// of the token starts with a preverb.
    pub mark_preverb: bool,
    /// Also memoize tokens that are not compound candidates at all.
    pub cache_non_compounds: bool,
}

/// The result of annotating one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Value of the `compound` field: the lemma with `#` at every boundary,
    /// alternative segmentations joined with `, `.
    pub compound: String,
    /// Some analysis behind the result started with a preverb.
    pub preverb: bool,
}

// ---------------------------------------------------------------------------
// SentenceProcessor
// ---------------------------------------------------------------------------

/// Annotates tokens with compound boundaries.
///
/// Owns the exception table and the result cache. All entry points take
/// `&mut self`; a multi-threaded host gives each worker its own processor.
#[derive(Debug)]
pub struct SentenceProcessor {
    exceptions: ExceptionTable,
    cache: CompoundCache,
    options: CompoundOptions,
}

impl SentenceProcessor {
    pub fn new(exceptions: ExceptionTable, options: CompoundOptions) -> Self {
        Self {
            exceptions,
            cache: CompoundCache::new(),
            options,
        }
    }

    pub fn cache(&self) -> &CompoundCache {
        &self.cache
    }

    pub fn options(&self) -> &CompoundOptions {
        &self.options
    }

    /// Compute the `compound` value of one token.
    ///
    /// Nothing is cached for a token whose processing fails.
    pub fn annotate(&mut self, token: &Token) -> Result<Annotation> {
        let key = cache_key(&token.lemma, &token.xpostag);

        if let Some(entry) = self.cache.get(&key) {
            log::trace!("{key}: cached");
            return Ok(Annotation {
                compound: render_segmentations(&token.lemma, &entry.segmentations)?,
                preverb: entry.preverb,
            });
        }

        let (entry, cacheable) = match self.classify(&key, token)? {
            Some(entry) => (entry, true),
            None => {
                log::trace!("{key}: not a compound");
                (CacheEntry::unchanged(), self.options.cache_non_compounds)
            }
        };

        let annotation = Annotation {
            compound: render_segmentations(&token.lemma, &entry.segmentations)?,
            preverb: entry.preverb,
        };
        if cacheable {
            self.cache.put(key, entry);
        }
        Ok(annotation)
    }

    /// Annotate every row of a sentence in place, appending the `compound`
    /// field to each row.
    ///
    /// The first failing token aborts the sentence; rows before it are
    /// already annotated.
    pub fn process_sentence(&mut self, rows: &mut [Vec<String>], fields: &FieldMap) -> Result<()> {
        for row in rows.iter_mut() {
            let token = Token::from_row(row.as_slice(), fields)?;
            let annotation = self.annotate(&token)?;
            if self.options.mark_preverb
                && annotation.preverb
                && !token.xpostag.starts_with(PREVERB_TAG)
            {
                row[fields.xpostag] = format!("{PREVERB_TAG}{}", token.xpostag);
            }
            row.push(annotation.compound);
        }
        Ok(())
    }

    /// Cases 2 and 3. `anas` is parsed at most once per token.
    fn classify(&self, key: &str, token: &Token) -> Result<Option<CacheEntry>> {
        let preverb_possible = is_verb(&token.xpostag) && token.anas.contains(PREVERB_TAG);
        let compound_possible = is_compound_candidate(token);
        if !preverb_possible && !compound_possible {
            return Ok(None);
        }

        let relevant = relevant_analyses(token)?;
        if preverb_possible {
            if let Some(entry) = preverb_entry(&relevant) {
                log::trace!("{key}: preverb verb");
                return Ok(Some(entry));
            }
        }
        // A verb without a relevant preverb analysis is still checked as a
        // generic compound: `partraszáll` becomes `partra#száll`.
        if compound_possible {
            log::trace!("{key}: compound candidate");
            return self.compound_entry(&token.lemma, &relevant);
        }
        Ok(None)
    }

    /// Case 3: every relevant analysis proposes a candidate segmentation.
    ///
    /// Returns `None` when no relevant analysis shows a boundary; the token
    /// is then handled as a non-compound.
    fn compound_entry(&self, lemma: &str, relevant: &[Analysis]) -> Result<Option<CacheEntry>> {
        if !relevant.iter().any(|a| has_boundary(&a.morphana)) {
            return Ok(None);
        }

        let mut preverb = false;
        let mut candidates = Vec::with_capacity(relevant.len());
        for analysis in relevant {
            let candidate = build_candidate(analysis, lemma, &self.exceptions)?;
            preverb |= candidate.preverb;
            candidates.push(candidate.boundaries);
        }
        Ok(Some(CacheEntry::new(reduce(candidates), preverb)))
    }
}

/// The analyses that agree with the lemma and tag chosen for the token.
fn relevant_analyses(token: &Token) -> Result<Vec<Analysis>> {
    let mut analyses = parse_anas(&token.anas)?;
    analyses.retain(|a| a.matches(&token.lemma, &token.xpostag));
    Ok(analyses)
}

/// Case 2. Returns `None` when no relevant analysis mentions a preverb.
///
/// The last relevant analysis decides: if it has a preverb, the boundary
/// falls right after the preverb's readable form, otherwise the lemma stays
/// unchanged.
fn preverb_entry(relevant: &[Analysis]) -> Option<CacheEntry> {
    if !relevant.iter().any(|a| a.morphana.contains(PREVERB_TAG)) {
        return None;
    }

    let entry = match relevant.last() {
        Some(last) if last.morphana.contains(PREVERB_TAG) => {
            let first = last
                .readable
                .split(READABLE_SEPARATOR)
                .next()
                .unwrap_or_default();
            let preverb = first.replace(PREVERB_TAG, "");
            CacheEntry::single(preverb.chars().count())
        }
        _ => CacheEntry::unchanged(),
    };
    Some(entry)
}

/// Case 3 precondition: some analysis shows a word-class boundary and the
/// token is not a numeral.
fn is_compound_candidate(token: &Token) -> bool {
    has_boundary(&token.anas) && !is_number(&token.xpostag)
}

// ===========================================================================
// Tests
// ===========================================================================
