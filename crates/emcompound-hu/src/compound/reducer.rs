// Candidate reducer: keep only the maximal boundary sets

use emcompound_core::boundary::BoundarySet;

/// Reduce candidate boundary sets to the maximal, non-redundant ones.
///
/// Candidates are scanned in arrival order. A candidate contained in (or equal
/// to) an already kept set is dropped; a candidate strictly containing kept
/// sets refines them in place. The result holds no set that is a subset of
/// another, is free of duplicates and is sorted by ascending offsets.
pub fn reduce<I>(candidates: I) -> Vec<BoundarySet>
where
    I: IntoIterator<Item = BoundarySet>,
{
    let mut kept: Vec<BoundarySet> = Vec::new();

    for candidate in candidates {
        let mut add = true;
        for existing in kept.iter_mut() {
            if candidate.is_subset(existing) {
                add = false;
                break;
            }
            if candidate.is_strict_superset(existing) {
                *existing = candidate.clone();
                add = false;
            }
        }
        if add {
            kept.push(candidate);
        }
    }

    kept.sort();
    kept.dedup();
    kept
}
