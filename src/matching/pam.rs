use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PamPatternError {
    #[error("PAM pattern is empty")]
    Empty,

    #[error("PAM pattern contains unrecognized symbol '{0}'")]
    UnrecognizedSymbol(char),
}

/// Concrete nucleotides allowed by one wildcard symbol.
///
/// IUPAC-style codes as used by published PAM definitions: N matches any
/// base, R purines, Y pyrimidines, W weak pairs, M amino bases, V any base
/// but T. Literal bases match only themselves.
fn allowed_bases(symbol: u8) -> Option<&'static [u8]> {
    match symbol {
        b'A' => Some(b"A"),
        b'T' => Some(b"T"),
        b'G' => Some(b"G"),
        b'C' => Some(b"C"),
        b'N' => Some(b"ATGC"),
        b'R' => Some(b"AG"),
        b'Y' => Some(b"CT"),
        b'W' => Some(b"AT"),
        b'M' => Some(b"AC"),
        b'V' => Some(b"GCA"),
        _ => None,
    }
}

/// A wildcard-encoded PAM template, validated at construction.
///
/// Every position holds one symbol from the table above; a text window
/// satisfies the pattern when each of its bases is allowed by the symbol at
/// the same position. Unknown symbols are a configuration error caught by
/// [`PamPattern::new`], never a per-window failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PamPattern {
    pattern: String,
}

impl PamPattern {
    /// Validate and construct a PAM pattern.
    ///
    /// # Errors
    ///
    /// Returns `PamPatternError::Empty` for a zero-length pattern or
    /// `PamPatternError::UnrecognizedSymbol` for anything outside the
    /// wildcard table.
    pub fn new(pattern: impl Into<String>) -> Result<Self, PamPatternError> {
        let mut pattern = pattern.into();
        pattern.make_ascii_uppercase();

        if pattern.is_empty() {
            return Err(PamPatternError::Empty);
        }
        for symbol in pattern.chars() {
            // is_ascii first: `as u8` would truncate wider code points onto
            // valid symbols
            if !symbol.is_ascii() || allowed_bases(symbol as u8).is_none() {
                return Err(PamPatternError::UnrecognizedSymbol(symbol));
            }
        }

        Ok(Self { pattern })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Check a text window against the pattern, returning the concrete
    /// matched text.
    ///
    /// Fails fast on the first position whose base is not allowed. A window
    /// shorter than the pattern (end-of-buffer truncation) is a non-match.
    #[must_use]
    pub fn match_window(&self, window: &str) -> Option<String> {
        if window.len() < self.pattern.len() {
            return None;
        }

        let window = window.as_bytes();
        for (i, &symbol) in self.pattern.as_bytes().iter().enumerate() {
            // Symbols were validated at construction, so the lookup cannot miss
            let allowed = allowed_bases(symbol)?;
            if !allowed.contains(&window[i]) {
                return None;
            }
        }

        // Every checked byte is a concrete ATGC base at this point
        Some(String::from_utf8_lossy(&window[..self.pattern.len()]).into_owned())
    }
}

impl std::fmt::Display for PamPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

impl TryFrom<String> for PamPattern {
    type Error = PamPatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PamPattern> for String {
    fn from(pattern: PamPattern) -> Self {
        pattern.pattern
    }
}
