//! End-to-end properties of the off-target search engine.
//!
//! These tests exercise the full seed -> PAM -> alignment -> grouping
//! pipeline through the public API, checking the behavioral guarantees the
//! search makes: counts verifiable against the raw text, deterministic and
//! order-stable output, and budget monotonicity.

use guide_scan::core::{ChromosomeId, Guide, SequenceBuffer};
use guide_scan::matching::{HitStore, OffTargetHit, PamPattern, SearchConfig, SearchEngine};

const GUIDE: &str = "ATGCATGCATGCATGCATGC";

fn search(text: &str, label: &str, max_mismatches: u32) -> HitStore {
    let guide = Guide::parse(GUIDE).unwrap();
    let pam = PamPattern::new("NGG").unwrap();
    let engine = SearchEngine::new(&guide, &pam, SearchConfig { max_mismatches });
    engine.search_buffer(&SequenceBuffer::new(ChromosomeId::new(label), text))
}

fn all_hits(store: &HitStore) -> Vec<(u32, OffTargetHit)> {
    store
        .groups()
        .flat_map(|(count, hits)| hits.iter().map(move |h| (count, h.clone())))
        .collect()
}

/// Corrupt `GUIDE` at the given prefix offsets, then append the PAM "AGG"
fn site_with_mismatches(offsets: &[usize]) -> String {
    let mut bases: Vec<u8> = GUIDE.bytes().collect();
    for &offset in offsets {
        assert!(offset < GUIDE.len() - 3, "corruptions must avoid the seed");
        bases[offset] = match bases[offset] {
            b'A' => b'T',
            b'T' => b'A',
            b'G' => b'C',
            _ => b'G',
        };
    }
    let mut site = String::from_utf8(bases).unwrap();
    site.push_str("AGG");
    site
}

/// A fixture with four sites at 0, 1, 2, and 3 mismatches, spaced by neutral
/// filler that cannot seed a candidate
fn graded_fixture() -> String {
    let filler = "CCCCCCC";
    format!(
        "{filler}{}{filler}{}{filler}{}{filler}{}{filler}",
        site_with_mismatches(&[]),
        site_with_mismatches(&[4]),
        site_with_mismatches(&[0, 8]),
        site_with_mismatches(&[2, 6, 12]),
    )
}

#[test]
fn reported_count_matches_direct_recount() {
    let text = graded_fixture();
    let store = search(&text, "1", 3);
    assert_eq!(store.len(), 4);

    for (reported, hit) in all_hits(&store) {
        // The guide-length window starts at the 1-based hit position
        let start = (hit.position - 1) as usize;
        let window = &text[start..start + GUIDE.len()];

        let recount = GUIDE
            .bytes()
            .zip(window.bytes())
            .filter(|(a, b)| a != b)
            .count() as u32;
        assert_eq!(reported, recount);

        // The annotation is the window itself, case-marked: uppercasing it
        // reverts to the verbatim text
        let annotated_window = &hit.sequence[..GUIDE.len()];
        assert_eq!(annotated_window.to_uppercase(), window);
    }
}

#[test]
fn search_is_idempotent() {
    let text = graded_fixture();
    let first = search(&text, "1", 3);
    let second = search(&text, "1", 3);
    assert_eq!(first, second);
}

#[test]
fn larger_budget_yields_superset_with_same_counts() {
    let text = graded_fixture();

    let mut previous: Vec<(u32, OffTargetHit)> = Vec::new();
    for budget in 0..=3 {
        let store = search(&text, "1", budget);
        let current = all_hits(&store);

        // Every hit found under the smaller budget survives, count unchanged
        for entry in &previous {
            assert!(
                current.contains(entry),
                "budget {budget} lost a hit found at a smaller budget"
            );
        }
        // The graded fixture adds exactly one site per budget step
        assert_eq!(current.len(), budget as usize + 1);

        previous = current;
    }
}

#[test]
fn zero_budget_is_exact_substring_search_plus_pam() {
    let text = graded_fixture();
    let store = search(&text, "1", 0);

    let hits = all_hits(&store);
    assert_eq!(hits.len(), 1);

    let (count, hit) = &hits[0];
    assert_eq!(*count, 0);

    // Independently: the only verbatim guide occurrence followed by a PAM
    let expected_start = text.find(GUIDE).unwrap();
    assert_eq!(hit.position, expected_start as u64 + 1);
    assert_eq!(&text[expected_start + GUIDE.len()..][..3], "AGG");
    assert_eq!(hit.sequence, format!("{GUIDE}AGG"));
}

#[test]
fn concrete_single_substitution_scenario() {
    // One substitution inside the 20-mer window (prefix offset 4, A -> T)
    // and a literal AGG immediately after
    let corrupted = "ATGCTTGCATGCATGCATGC";
    let text = format!("CCCCC{corrupted}AGGCCCCC");
    let store = search(&text, "1", 1);

    let hits = all_hits(&store);
    assert_eq!(hits.len(), 1);

    let (count, hit) = &hits[0];
    assert_eq!(*count, 1);
    assert_eq!(hit.position, 6);
    // Injected position marked lower-case, everything else verbatim
    assert_eq!(hit.sequence, "ATGCtTGCATGCATGCATGCAGG");
}

#[test]
fn multi_buffer_search_tags_hits_with_their_label() {
    let with_site = format!("CCCCC{GUIDE}AGGCC");
    let without_site = "CCCCCCCCCCCCCCCCCCCCCCCCCCCC";

    let guide = Guide::parse(GUIDE).unwrap();
    let pam = PamPattern::new("NGG").unwrap();
    let engine = SearchEngine::new(&guide, &pam, SearchConfig { max_mismatches: 1 });

    let buffers = vec![
        SequenceBuffer::new(ChromosomeId::new("7"), without_site),
        SequenceBuffer::new(ChromosomeId::new("X"), with_site.as_str()),
    ];
    let store = engine.search_genome(&buffers);

    let hits = all_hits(&store);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].1.chromosome, ChromosomeId::new("X"));
}

#[test]
fn hits_are_ordered_by_position_within_a_group() {
    let site = site_with_mismatches(&[]);
    let text = format!("CC{site}CCCCCCC{site}CC");
    let store = search(&text, "1", 0);

    let hits = all_hits(&store);
    assert_eq!(hits.len(), 2);
    assert!(hits[0].1.position < hits[1].1.position);
}

#[test]
fn degenerate_pam_template_widens_accepted_sites() {
    // NRG accepts both AGG (R=G) and AAG (R=A); NGG accepts only the former
    let text = format!("CCCCC{GUIDE}AAGCCCCC");

    let guide = Guide::parse(GUIDE).unwrap();
    let buffer = SequenceBuffer::new(ChromosomeId::new("1"), text.as_str());

    let ngg = PamPattern::new("NGG").unwrap();
    let engine = SearchEngine::new(&guide, &ngg, SearchConfig { max_mismatches: 0 });
    assert!(engine.search_buffer(&buffer).is_empty());

    let nrg = PamPattern::new("NRG").unwrap();
    let engine = SearchEngine::new(&guide, &nrg, SearchConfig { max_mismatches: 0 });
    assert_eq!(engine.search_buffer(&buffer).len(), 1);
}
