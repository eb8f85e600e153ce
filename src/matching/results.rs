use serde::Serialize;

use crate::core::ChromosomeId;

/// A validated off-target site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffTargetHit {
    /// Label of the buffer the site was found in
    pub chromosome: ChromosomeId,

    /// 1-based position where the guide-length window begins
    pub position: u64,

    /// The full matched window (guide-length remainder + seed + PAM),
    /// mismatched bases lower-cased, everything else verbatim text
    pub sequence: String,
}

/// Search results grouped by mismatch count.
///
/// A fixed-size indexed collection: one ordered bucket per count in
/// 0..=max_mismatches, so insertion never needs an existence check. Hits
/// arrive in scan order and are never mutated or removed; each hit's count is
/// fixed at creation, so no hit ever appears under two buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitStore {
    buckets: Vec<Vec<OffTargetHit>>,
}

impl HitStore {
    /// Create an empty store accepting counts in 0..=max_mismatches
    #[must_use]
    pub fn new(max_mismatches: u32) -> Self {
        Self {
            buckets: vec![Vec::new(); max_mismatches as usize + 1],
        }
    }

    /// Highest mismatch count this store accepts
    #[must_use]
    pub fn max_mismatches(&self) -> u32 {
        (self.buckets.len() - 1) as u32
    }

    /// Append a hit to the bucket for its mismatch count.
    ///
    /// A count beyond the store's capacity is a caller defect.
    pub fn insert(&mut self, mismatches: u32, hit: OffTargetHit) {
        debug_assert!(
            (mismatches as usize) < self.buckets.len(),
            "mismatch count {mismatches} exceeds store capacity"
        );
        self.buckets[mismatches as usize].push(hit);
    }

    /// Non-empty groups in ascending mismatch-count order
    pub fn groups(&self) -> impl Iterator<Item = (u32, &[OffTargetHit])> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, hits)| !hits.is_empty())
            .map(|(count, hits)| (count as u32, hits.as_slice()))
    }

    /// Absorb another store, appending its hits after this store's own
    /// within each mismatch-count bucket
    pub fn merge(&mut self, other: HitStore) {
        debug_assert_eq!(
            self.buckets.len(),
            other.buckets.len(),
            "merged stores must share a mismatch budget"
        );
        for (bucket, mut incoming) in self.buckets.iter_mut().zip(other.buckets) {
            bucket.append(&mut incoming);
        }
    }

    /// Total hits across all groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}
