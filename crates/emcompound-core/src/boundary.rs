// Compound boundary sets and lemma splitting

use std::collections::BTreeSet;

use crate::error::{CompoundError, Result};

/// Separator written between compound components.
pub const COMPONENT_SEPARATOR: char = '#';

/// Separator written between alternative segmentations of one lemma.
pub const SEGMENTATION_SEPARATOR: &str = ", ";

/// A set of character offsets into a lemma where compound components meet.
///
/// Offsets count Unicode scalar values, not bytes: `kerék#pár#út` is `{5, 8}`.
/// Iteration is ascending, and the derived `Ord` compares sets as their
/// ascending offset sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundarySet(BTreeSet<usize>);

impl BoundarySet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Add an offset. Returns `false` if it was already present.
    pub fn insert(&mut self, offset: usize) -> bool {
        self.0.insert(offset)
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.0.contains(&offset)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Non-strict subset test.
    pub fn is_subset(&self, other: &BoundarySet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Strict superset test.
    pub fn is_strict_superset(&self, other: &BoundarySet) -> bool {
        self.0.len() > other.0.len() && self.0.is_superset(&other.0)
    }

    /// Offsets in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Offsets as a sorted vector, ready for [`split_at`].
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Render `lemma` with `#` inserted at every offset.
    pub fn render(&self, lemma: &str) -> Result<String> {
        let offsets = self.to_vec();
        let pieces = split_at(lemma, &offsets)?;
        let mut rendered = String::with_capacity(lemma.len() + pieces.len());
        for (i, piece) in pieces.iter().enumerate() {
            if i > 0 {
                rendered.push(COMPONENT_SEPARATOR);
            }
            rendered.push_str(piece);
        }
        Ok(rendered)
    }
}

impl FromIterator<usize> for BoundarySet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[usize; N]> for BoundarySet {
    fn from(offsets: [usize; N]) -> Self {
        offsets.into_iter().collect()
    }
}

/// Split `text` at the given character offsets.
///
/// An empty offset list returns the whole text as a single piece. Offsets
/// must be strictly increasing (otherwise [`CompoundError::InvalidBoundaries`])
/// and lie strictly between 0 and the character length of the text
/// (otherwise [`CompoundError::OutOfBounds`]). Offsets are never clamped.
pub fn split_at<'a>(text: &'a str, offsets: &[usize]) -> Result<Vec<&'a str>> {
    if offsets.is_empty() {
        return Ok(vec![text]);
    }
    if offsets.windows(2).any(|w| w[0] >= w[1]) {
        return Err(CompoundError::InvalidBoundaries(offsets.to_vec()));
    }
    let char_len = text.chars().count();
    if let Some(&offset) = offsets.iter().find(|&&o| o == 0 || o >= char_len) {
        return Err(CompoundError::OutOfBounds {
            offset,
            lemma: text.to_string(),
        });
    }

    let mut pieces = Vec::with_capacity(offsets.len() + 1);
    let mut targets = offsets.iter().peekable();
    let mut start = 0;
    for (char_pos, (byte_pos, _)) in text.char_indices().enumerate() {
        if targets.next_if_eq(&&char_pos).is_some() {
            pieces.push(&text[start..byte_pos]);
            start = byte_pos;
        }
    }
    pieces.push(&text[start..]);
    Ok(pieces)
}

/// Render every boundary set against `lemma` and join the results with `, `.
///
/// An empty list renders as the unchanged lemma.
pub fn render_segmentations(lemma: &str, sets: &[BoundarySet]) -> Result<String> {
    if sets.is_empty() {
        return Ok(lemma.to_string());
    }
    let rendered = sets
        .iter()
        .map(|set| set.render(lemma))
        .collect::<Result<Vec<_>>>()?;
    Ok(rendered.join(SEGMENTATION_SEPARATOR))
}
