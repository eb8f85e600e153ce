//! Loader for headered plain-text sequence files.
//!
//! The one-chromosome-per-file layout distributed with some genome dumps:
//! a single description line followed by raw sequence lines. The first line
//! is always discarded; every following line is concatenated into one buffer.
//! The label comes from the caller, not the file.

use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::{ChromosomeId, SequenceBuffer};
use crate::parsing::ParseError;

/// Load a headered text file as a single labeled sequence buffer.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or
/// `ParseError::InvalidFormat` if no sequence follows the header line.
pub fn load_text_file(path: &Path, label: ChromosomeId) -> Result<SequenceBuffer, ParseError> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);

    let mut bases = String::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        // First line is the description header
        if index == 0 {
            continue;
        }
        bases.push_str(line.trim_end());
    }

    if bases.is_empty() {
        return Err(ParseError::InvalidFormat(format!(
            "No sequence found in {} after the header line",
            path.display()
        )));
    }

    Ok(SequenceBuffer::new(label, bases))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_text_file_skips_header_and_joins_lines() {
        let mut temp = NamedTempFile::with_suffix(".txt").unwrap();
        temp.write_all(b"chromosome 21 build 38\nACGTACGT\nTTTT\n").unwrap();
        temp.flush().unwrap();

        let buffer = load_text_file(temp.path(), ChromosomeId::new("21")).unwrap();
        assert_eq!(buffer.id, ChromosomeId::new("21"));
        assert_eq!(buffer.bases(), "ACGTACGTTTTT");
    }

    #[test]
    fn test_load_text_file_uppercases() {
        let mut temp = NamedTempFile::with_suffix(".txt").unwrap();
        temp.write_all(b"header\nacgt\n").unwrap();
        temp.flush().unwrap();

        let buffer = load_text_file(temp.path(), ChromosomeId::new("x")).unwrap();
        assert_eq!(buffer.bases(), "ACGT");
    }

    #[test]
    fn test_header_only_file_is_invalid() {
        let mut temp = NamedTempFile::with_suffix(".txt").unwrap();
        temp.write_all(b"just a header\n").unwrap();
        temp.flush().unwrap();

        let result = load_text_file(temp.path(), ChromosomeId::new("1"));
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_empty_file_is_invalid() {
        let temp = NamedTempFile::with_suffix(".txt").unwrap();
        let result = load_text_file(temp.path(), ChromosomeId::new("1"));
        assert!(result.is_err());
    }
}
