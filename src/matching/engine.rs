use rayon::prelude::*;
use tracing::debug;

use crate::core::{Guide, SequenceBuffer};
use crate::matching::align::align;
use crate::matching::pam::PamPattern;
use crate::matching::results::{HitStore, OffTargetHit};
use crate::matching::seed::SeedScanner;
use crate::utils::validation::is_valid_budget;

/// Default mismatch budget when none is given
pub const DEFAULT_MAX_MISMATCHES: u32 = 3;

/// Configuration for the search engine
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Maximum allowed differences between the guide prefix and a candidate
    /// window (0..=9)
    pub max_mismatches: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_mismatches: DEFAULT_MAX_MISMATCHES,
        }
    }
}

/// The off-target search engine.
///
/// Borrows one guide and one PAM pattern for its lifetime and scans any
/// number of sequence buffers against them. Seed occurrences anchor the scan
/// (exact match plus a validated adjacent PAM); the remaining guide prefix is
/// then verified against the window immediately 5' of the seed under the
/// mismatch budget.
pub struct SearchEngine<'a> {
    guide: &'a Guide,
    pam: &'a PamPattern,
    config: SearchConfig,
}

impl<'a> SearchEngine<'a> {
    pub fn new(guide: &'a Guide, pam: &'a PamPattern, config: SearchConfig) -> Self {
        debug_assert!(
            is_valid_budget(config.max_mismatches),
            "mismatch budget {} out of range",
            config.max_mismatches
        );
        Self { guide, pam, config }
    }

    /// Scan a single buffer, returning its hits grouped by mismatch count.
    #[must_use]
    pub fn search_buffer(&self, buffer: &SequenceBuffer) -> HitStore {
        let mut store = HitStore::new(self.config.max_mismatches);
        let seed = self.guide.seed();
        let prefix = self.guide.prefix();
        let text = buffer.bases();

        for candidate in SeedScanner::new(text, seed, self.pam) {
            // The remainder window sits immediately 5' of the seed; a seed too
            // close to the buffer start has insufficient context and is skipped
            let Some(window_start) = candidate.seed_start.checked_sub(prefix.len()) else {
                continue;
            };
            // get() rather than indexing: a window cut mid-codepoint holds
            // out-of-alphabet bytes and is just another non-match
            let Some(window) = text.get(window_start..candidate.seed_start) else {
                continue;
            };

            if let Some(alignment) = align(prefix, window, self.config.max_mismatches) {
                let sequence = format!("{}{}{}", alignment.annotated, seed, candidate.pam);
                store.insert(
                    alignment.mismatches,
                    OffTargetHit {
                        chromosome: buffer.id.clone(),
                        position: window_start as u64 + 1,
                        sequence,
                    },
                );
            }
        }

        debug!(
            chromosome = %buffer.id,
            bases = buffer.len(),
            hits = store.len(),
            "buffer scanned"
        );
        store
    }

    /// Scan every buffer and merge the per-buffer results.
    ///
    /// Buffers are independent (read-only text, one private store per
    /// worker), so they are scanned in parallel; the merge afterward runs in
    /// input order, making the combined store identical to a sequential pass.
    #[must_use]
    pub fn search_genome(&self, buffers: &[SequenceBuffer]) -> HitStore {
        let partials: Vec<HitStore> = buffers
            .par_iter()
            .map(|buffer| self.search_buffer(buffer))
            .collect();

        let mut combined = HitStore::new(self.config.max_mismatches);
        for partial in partials {
            combined.merge(partial);
        }
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ChromosomeId;

    const GUIDE: &str = "ATGCATGCATGCATGCATGC";

    fn engine_parts(pattern: &str) -> (Guide, PamPattern) {
        (
            Guide::parse(GUIDE).unwrap(),
            PamPattern::new(pattern).unwrap(),
        )
    }

    fn buffer(label: &str, bases: &str) -> SequenceBuffer {
        SequenceBuffer::new(ChromosomeId::new(label), bases)
    }

    #[test]
    fn test_exact_site_found_with_zero_budget() {
        let (guide, pam) = engine_parts("NGG");
        let engine = SearchEngine::new(&guide, &pam, SearchConfig { max_mismatches: 0 });

        let text = format!("TTTTT{GUIDE}AGGTTTTT");
        let store = engine.search_buffer(&buffer("1", &text));

        assert_eq!(store.len(), 1);
        let (count, hits) = store.groups().next().unwrap();
        assert_eq!(count, 0);
        assert_eq!(hits[0].position, 6);
        assert_eq!(hits[0].sequence, format!("{GUIDE}AGG"));
    }

    #[test]
    fn test_hit_sequence_has_guide_plus_pam_length() {
        let (guide, pam) = engine_parts("NGG");
        let engine = SearchEngine::new(&guide, &pam, SearchConfig { max_mismatches: 1 });

        let text = format!("{GUIDE}TGG");
        let store = engine.search_buffer(&buffer("1", &text));

        assert_eq!(store.len(), 1);
        let (_, hits) = store.groups().next().unwrap();
        assert_eq!(hits[0].sequence.len(), guide.len() + pam.len());
        assert_eq!(hits[0].position, 1);
    }

    #[test]
    fn test_site_without_pam_is_rejected() {
        let (guide, pam) = engine_parts("NGG");
        let engine = SearchEngine::new(&guide, &pam, SearchConfig { max_mismatches: 3 });

        let text = format!("TTTTT{GUIDE}ATTTTTTT");
        let store = engine.search_buffer(&buffer("1", &text));
        assert!(store.is_empty());
    }

    #[test]
    fn test_seed_at_buffer_start_lacks_context() {
        let (guide, pam) = engine_parts("NGG");
        let engine = SearchEngine::new(&guide, &pam, SearchConfig { max_mismatches: 9 });

        // Seed "TGC" plus PAM right at the start: no room for the 17-nt prefix
        let store = engine.search_buffer(&buffer("1", "TGCAGGTTTTTTTTTTTTTTTTTT"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_mismatches_bucketed_by_count() {
        let (guide, pam) = engine_parts("NGG");
        let engine = SearchEngine::new(&guide, &pam, SearchConfig { max_mismatches: 2 });

        // One substitution in the prefix (A->G at the window's first base)
        let one_off = "GTGCATGCATGCATGCATGC";
        let text = format!("{one_off}AGGTTTTTTT{GUIDE}CGG");
        let store = engine.search_buffer(&buffer("1", &text));

        let groups: Vec<(u32, usize)> = store.groups().map(|(c, h)| (c, h.len())).collect();
        assert_eq!(groups, vec![(0, 1), (1, 1)]);

        let (_, one_mismatch_hits) = store.groups().find(|(c, _)| *c == 1).unwrap();
        assert_eq!(one_mismatch_hits[0].sequence, "gTGCATGCATGCATGCATGCAGG");
        assert_eq!(one_mismatch_hits[0].position, 1);
    }

    #[test]
    fn test_search_genome_labels_and_merges() {
        let (guide, pam) = engine_parts("NGG");
        let engine = SearchEngine::new(&guide, &pam, SearchConfig { max_mismatches: 1 });

        let with_site = format!("TT{GUIDE}GGG");
        let without = "TTTTTTTTTTTTTTTTTTTTTTTTTTTT".to_string();
        let buffers = vec![buffer("1", &without), buffer("2", &with_site)];

        let store = engine.search_genome(&buffers);
        assert_eq!(store.len(), 1);
        let (_, hits) = store.groups().next().unwrap();
        assert_eq!(hits[0].chromosome, ChromosomeId::new("2"));
        assert_eq!(hits[0].position, 3);
    }

    #[test]
    fn test_search_genome_matches_sequential_merge() {
        let (guide, pam) = engine_parts("NGG");
        let engine = SearchEngine::new(&guide, &pam, SearchConfig { max_mismatches: 2 });

        let a = format!("{GUIDE}AGGTT{GUIDE}TGG");
        let b = format!("CCCCC{GUIDE}CGG");
        let buffers = vec![buffer("a", &a), buffer("b", &b)];

        let parallel = engine.search_genome(&buffers);

        let mut sequential = HitStore::new(2);
        for buf in &buffers {
            sequential.merge(engine.search_buffer(buf));
        }

        assert_eq!(parallel, sequential);
    }
}
