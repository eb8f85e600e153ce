//! Loaders that materialize nucleotide sequences into labeled buffers.
//!
//! This module provides loaders for:
//!
//! - **FASTA files** (plain or gzip/bgzip compressed): every record becomes
//!   one [`SequenceBuffer`](crate::core::SequenceBuffer) labeled with its
//!   record name
//! - **Headered text files**: the legacy one-chromosome-per-file layout, a
//!   description line followed by raw sequence lines; the label is supplied
//!   by the caller
//!
//! Buffers are loaded whole: searches run over fully in-memory text, so a
//! chromosome-scale input costs its length in bytes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use guide_scan::parsing::fasta::load_fasta_file;
//! use std::path::Path;
//!
//! let buffers = load_fasta_file(Path::new("genome.fa.gz")).unwrap();
//! for buffer in &buffers {
//!     println!("{}: {} bases", buffer.id, buffer.len());
//! }
//! ```

use thiserror::Error;

pub mod fasta;
pub mod text;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid sequence file: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many sequences: {0} exceeds maximum allowed (10000)")]
    TooManySequences(usize),
}
