//! Shared types for Hungarian compound boundary annotation.
//!
//! - [`analysis`] -- candidate analyses from the `anas` field and their morphemes
//! - [`boundary`] -- boundary sets and lemma splitting
//! - [`token`] -- typed token view over an xtsv row, field mapping
//! - [`error`] -- the workspace-wide error type

pub mod analysis;
pub mod boundary;
pub mod error;
pub mod token;

pub use analysis::{Analysis, Morpheme, parse_anas};
pub use boundary::{BoundarySet, render_segmentations, split_at};
pub use error::{CompoundError, ErrorKind, Result};
pub use token::{FieldMap, SOURCE_FIELDS, TARGET_FIELDS, Token};
