//! Compound boundary detection for Hungarian emMorph analyses.
//!
//! - [`processor`] -- per-token classification and the sentence entry point
//! - [`compound`] -- candidate builder and candidate reducer
//! - [`morphology`] -- `lemma[tag]=form` morphana parser
//! - [`exceptions`] -- false compound boundary table
//! - [`cache`] -- memoized results per lemma and coarse part of speech
//! - [`tags`] -- emMorph tag constants and predicates
//!
//! ```
//! use emcompound_core::Token;
//! use emcompound_hu::{CompoundOptions, ExceptionTable, SentenceProcessor};
//!
//! let anas = r#"[{"lemma": "háztartás", "tag": "[/N][Nom]",
//!     "morphana": "ház[/N]=ház+tartás[/N]=tartás+[Nom]=",
//!     "readable": "ház[/N] + tartás[/N] + [Nom]"}]"#;
//! let token = Token::new("háztartás", "[/N][Nom]", anas);
//!
//! let mut processor = SentenceProcessor::new(ExceptionTable::empty(), CompoundOptions::default());
//! assert_eq!(processor.annotate(&token).unwrap().compound, "ház#tartás");
//! ```

pub mod cache;
pub mod compound;
pub mod exceptions;
pub mod morphology;
pub mod processor;
pub mod tags;

pub use cache::{CacheEntry, CompoundCache, cache_key};
pub use exceptions::ExceptionTable;
pub use processor::{Annotation, CompoundOptions, SentenceProcessor};
