/// Outcome of comparing a guide fragment against a candidate window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Exact number of differing positions (always <= the budget used)
    pub mismatches: u32,

    /// Copy of the candidate window with mismatched positions lower-cased
    /// and matched positions left verbatim
    pub annotated: String,
}

/// Compare two equal-length sequences under a mismatch budget.
///
/// Scans position by position, counting differences and bailing out as soon
/// as the running count exceeds `budget`; this pruning is what keeps
/// chromosome-scale scans tractable. On success the annotated copy shows what
/// is actually present in the text: mismatched bases keep their own identity,
/// lower-cased, rather than being replaced by the guide's base.
///
/// A budget of 0 degenerates to an exact-match test. Inputs of unequal length
/// are a caller defect and report as no-match.
#[must_use]
pub fn align(fragment: &str, window: &str, budget: u32) -> Option<Alignment> {
    debug_assert_eq!(
        fragment.len(),
        window.len(),
        "aligned sequences must have equal length"
    );
    if fragment.len() != window.len() {
        return None;
    }

    let fragment = fragment.as_bytes();
    let window = window.as_bytes();

    let mut mismatches: u32 = 0;
    let mut annotated = String::with_capacity(window.len());

    for (i, &base) in window.iter().enumerate() {
        if base == fragment[i] {
            annotated.push(base as char);
        } else {
            mismatches += 1;
            if mismatches > budget {
                return None;
            }
            annotated.push(base.to_ascii_lowercase() as char);
        }
    }

    Some(Alignment {
        mismatches,
        annotated,
    })
}
