// Error type shared by all emcompound crates

use std::io;

/// Coarse classification of a [`CompoundError`].
///
/// Hosts use this to decide how to report a failure: format errors point at
/// corrupt upstream data, bounds errors at an internal bug, configuration
/// errors at a bad field setup before any sentence was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Format,
    Bounds,
    Configuration,
    Io,
}

/// Error type for compound annotation.
///
/// None of these are retried. The first error aborts the current run.
#[derive(Debug, thiserror::Error)]
pub enum CompoundError {
    /// The `anas` field is not a JSON array of analysis objects.
    #[error("malformed anas JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A `+`-separated piece of a morphana string is not `lemma[tag]=form`.
    #[error("malformed morpheme {piece:?} in morphana {morphana:?}")]
    Morpheme { piece: String, morphana: String },

    /// A non-blank exception table line is not `prefix+suffix`.
    #[error("malformed exception table line {line}: {content:?}")]
    ExceptionLine { line: usize, content: String },

    /// Split offsets are unsorted or contain duplicates.
    #[error("boundaries must be sorted and free of duplicates: {0:?}")]
    InvalidBoundaries(Vec<usize>),

    /// A split offset is 0 or not below the character length of the lemma.
    #[error("boundary {offset} out of bounds for {lemma:?}")]
    OutOfBounds { offset: usize, lemma: String },

    /// A row is shorter than the field mapping requires.
    #[error("row has {actual} columns, field {field:?} expects column {index}")]
    ShortRow {
        field: String,
        index: usize,
        actual: usize,
    },

    /// A required field name is absent from the header.
    #[error("required field {0:?} not found in the input header")]
    MissingField(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    /// An error raised while processing the sentence that starts at `line`
    /// of the input stream.
    #[error("input line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<CompoundError>,
    },
}

impl CompoundError {
    /// Return the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompoundError::Json(_)
            | CompoundError::Morpheme { .. }
            | CompoundError::ExceptionLine { .. }
            | CompoundError::InvalidBoundaries(_)
            | CompoundError::ShortRow { .. } => ErrorKind::Format,
            CompoundError::OutOfBounds { .. } => ErrorKind::Bounds,
            CompoundError::MissingField(_) => ErrorKind::Configuration,
            CompoundError::Io(_) => ErrorKind::Io,
            CompoundError::AtLine { source, .. } => source.kind(),
        }
    }

    /// Attach the input line of the failing sentence.
    pub fn at_line(self, line: usize) -> Self {
        CompoundError::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CompoundError>;
