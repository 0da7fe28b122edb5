// Compound segmentation: per-analysis candidates and their reconciliation

pub mod builder;
pub mod reducer;

pub use builder::{Candidate, build_candidate, build_from_morphemes};
pub use reducer::reduce;
