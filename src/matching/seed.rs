use crate::matching::pam::PamPattern;

/// A seed occurrence whose adjacent PAM window validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// 0-based offset of the seed's first base in the scanned text
    pub seed_start: usize,

    /// The concrete PAM text found immediately 3' of the seed
    pub pam: String,
}

/// Lazy scan of a text for exact seed occurrences with a valid adjacent PAM.
///
/// Walks the text left to right; a position is a candidate only if the full
/// seed matches literally there AND the window immediately following it
/// satisfies the PAM pattern. The first-character comparison is a cheap
/// pre-check before the full seed test. Windows that would extend past the
/// end of the text are skipped, never indexed.
pub struct SeedScanner<'a> {
    text: &'a [u8],
    seed: &'a [u8],
    pam: &'a PamPattern,
    pos: usize,
}

impl<'a> SeedScanner<'a> {
    #[must_use]
    pub fn new(text: &'a str, seed: &'a str, pam: &'a PamPattern) -> Self {
        debug_assert!(!seed.is_empty(), "seed must be non-empty");
        Self {
            text: text.as_bytes(),
            seed: seed.as_bytes(),
            pam,
            pos: 0,
        }
    }
}

impl Iterator for SeedScanner<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        // No candidate can fit a full seed beyond this point
        let last_seed_start = self.text.len().checked_sub(self.seed.len())?;

        while self.pos <= last_seed_start {
            let i = self.pos;
            self.pos += 1;

            if self.text[i] != self.seed[0] {
                continue;
            }
            if &self.text[i..i + self.seed.len()] != self.seed {
                continue;
            }

            let pam_start = i + self.seed.len();
            let pam_end = pam_start + self.pam.len();
            if pam_end > self.text.len() {
                continue;
            }

            // A window cut mid-codepoint can only hold out-of-alphabet
            // bytes, which never satisfy a PAM symbol anyway
            let Ok(window) = std::str::from_utf8(&self.text[pam_start..pam_end]) else {
                continue;
            };
            if let Some(pam) = self.pam.match_window(window) {
                return Some(Candidate { seed_start: i, pam });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str, seed: &str, pattern: &str) -> Vec<Candidate> {
        let pam = PamPattern::new(pattern).unwrap();
        SeedScanner::new(text, seed, &pam).collect()
    }

    #[test]
    fn test_finds_seed_with_valid_pam() {
        //            seed at 4, PAM "AGG" at 7
        let hits = scan("TTTTTGCAGGTTT", "TGC", "NGG");
        assert_eq!(
            hits,
            vec![Candidate {
                seed_start: 4,
                pam: "AGG".to_string()
            }]
        );
    }

    #[test]
    fn test_seed_without_pam_is_skipped() {
        let hits = scan("TTTTTGCTTTTTT", "TGC", "NGG");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_multiple_occurrences_in_scan_order() {
        let hits = scan("TGCAGGTTTGCAGG", "TGC", "NGG");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].seed_start, 0);
        assert_eq!(hits[1].seed_start, 8);
    }

    #[test]
    fn test_overlapping_seed_occurrences() {
        // "AAA" occurs at 0, 1, and 2; only the occurrence at 1 is followed
        // by a window satisfying NGG, and the one at 2 has no room left
        let hits = scan("AAAAAGG", "AAA", "NGG");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].seed_start, 1);
    }

    #[test]
    fn test_pam_window_past_end_is_skipped() {
        // Seed matches at the tail but only two bases remain for a 3-symbol PAM
        let hits = scan("TTTTGCGG", "TGC", "NGG");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_seed_past_end_is_skipped() {
        let hits = scan("TG", "TGC", "NGG");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let hits = scan("", "TGC", "NGG");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_is_lazy() {
        let pam = PamPattern::new("NGG").unwrap();
        let text = "TGCAGGTTTGCAGG";
        let mut scanner = SeedScanner::new(text, "TGC", &pam);
        let first = scanner.next().unwrap();
        assert_eq!(first.seed_start, 0);
        // Scanner resumes where it left off
        let second = scanner.next().unwrap();
        assert_eq!(second.seed_start, 8);
        assert_eq!(scanner.next(), None);
    }
}
