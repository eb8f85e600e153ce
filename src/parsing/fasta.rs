//! FASTA loader using noodles.
//!
//! Materializes every record of a FASTA file into a labeled
//! [`SequenceBuffer`]. Supports both uncompressed and gzip/bgzip compressed
//! files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;

use crate::core::{ChromosomeId, SequenceBuffer};
use crate::parsing::ParseError;
use crate::utils::validation::check_sequence_limit;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Load every record of a FASTA file as a labeled sequence buffer.
///
/// Record names become buffer labels verbatim; a "chr" prefix is kept, not
/// normalized.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if parsing fails, `ParseError::InvalidFormat` if the file holds no
/// records, or `ParseError::TooManySequences` if the limit is exceeded.
pub fn load_fasta_file(path: &Path) -> Result<Vec<SequenceBuffer>, ParseError> {
    if is_gzipped(path) {
        load_fasta_gzipped(path)
    } else {
        load_fasta_uncompressed(path)
    }
}

/// Load an uncompressed FASTA file
fn load_fasta_uncompressed(path: &Path) -> Result<Vec<SequenceBuffer>, ParseError> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);
    let mut fasta_reader = fasta::io::Reader::new(reader);

    load_fasta_reader(&mut fasta_reader)
}

/// Load a gzip-compressed FASTA file
fn load_fasta_gzipped(path: &Path) -> Result<Vec<SequenceBuffer>, ParseError> {
    let file = std::fs::File::open(path)?;
    let decoder = GzDecoder::new(file);
    let reader = BufReader::new(decoder);
    let mut fasta_reader = fasta::io::Reader::new(reader);

    load_fasta_reader(&mut fasta_reader)
}

/// Load from a noodles FASTA reader
fn load_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<SequenceBuffer>, ParseError> {
    let mut buffers = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        if check_sequence_limit(buffers.len()).is_some() {
            return Err(ParseError::TooManySequences(buffers.len()));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        let bases = String::from_utf8_lossy(record.sequence().as_ref()).to_string();

        buffers.push(SequenceBuffer::new(ChromosomeId::new(name), bases));
    }

    if buffers.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(buffers)
}
