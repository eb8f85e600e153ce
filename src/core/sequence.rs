use serde::{Deserialize, Serialize};

/// Identifier for a searched sequence: a chromosome number ("1".."22"),
/// "X"/"Y", or any user-supplied name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChromosomeId(pub String);

impl ChromosomeId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::fmt::Display for ChromosomeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled nucleotide sequence held fully in memory, up to whole-chromosome
/// scale.
///
/// Bases are folded to uppercase at construction; anything outside {A,T,G,C}
/// (ambiguity codes, assembly gaps) is retained as-is and simply never matches
/// a guide base or PAM symbol during the scan.
#[derive(Debug, Clone)]
pub struct SequenceBuffer {
    /// Which chromosome (or user label) this buffer came from
    pub id: ChromosomeId,

    bases: String,
}

impl SequenceBuffer {
    pub fn new(id: ChromosomeId, bases: impl Into<String>) -> Self {
        let mut bases = bases.into();
        bases.make_ascii_uppercase();
        Self { id, bases }
    }

    #[must_use]
    pub fn bases(&self) -> &str {
        &self.bases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}
