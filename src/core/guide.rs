use thiserror::Error;

/// Number of 3'-terminal nucleotides used as the exact-match seed.
///
/// Seeds this short occur frequently enough to anchor candidate sites while
/// still pruning most of the buffer before the mismatch comparison runs.
pub const SEED_LEN: usize = 3;

/// Minimum accepted guide length in nucleotides
pub const MIN_GUIDE_LEN: usize = 15;

/// Maximum accepted guide length in nucleotides
pub const MAX_GUIDE_LEN: usize = 25;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GuideError {
    #[error("Guide length {0} outside accepted range {MIN_GUIDE_LEN}-{MAX_GUIDE_LEN}")]
    LengthOutOfRange(usize),

    #[error("Guide contains invalid character '{0}' (expected A, T, G, C, or U)")]
    InvalidCharacter(char),
}

/// A validated guide sequence, stored 5' to 3' as uppercase DNA.
///
/// Guides are accepted as RNA or DNA in either case; parsing upper-cases the
/// input and substitutes T for U, so "augc" and "ATGC" construct the same
/// guide. The sequence is immutable for the lifetime of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guide {
    sequence: String,
}

impl Guide {
    /// Parse and validate a guide sequence.
    ///
    /// # Errors
    ///
    /// Returns `GuideError::LengthOutOfRange` if the input is shorter than
    /// [`MIN_GUIDE_LEN`] or longer than [`MAX_GUIDE_LEN`], or
    /// `GuideError::InvalidCharacter` on anything outside {A, T, G, C, U}.
    pub fn parse(input: &str) -> Result<Self, GuideError> {
        let len = input.chars().count();
        if !(MIN_GUIDE_LEN..=MAX_GUIDE_LEN).contains(&len) {
            return Err(GuideError::LengthOutOfRange(len));
        }

        let mut sequence = String::with_capacity(len);
        for c in input.chars() {
            let upper = c.to_ascii_uppercase();
            match upper {
                'A' | 'T' | 'G' | 'C' => sequence.push(upper),
                // RNA input: uracil pairs where thymine would in DNA
                'U' => sequence.push('T'),
                _ => return Err(GuideError::InvalidCharacter(c)),
            }
        }

        Ok(Self { sequence })
    }

    /// The full guide sequence, 5' to 3'
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The 3'-terminal seed used for exact-match anchoring
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.sequence[self.sequence.len() - SEED_LEN..]
    }

    /// Everything 5' of the seed, compared under the mismatch budget
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.sequence[..self.sequence.len() - SEED_LEN]
    }
}

impl std::fmt::Display for Guide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sequence)
    }
}
