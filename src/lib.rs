//! # guide-scan
//!
//! A library for predicting CRISPR/Cas off-target edit sites.
//!
//! A guide RNA directs a Cas nuclease to its intended target, but sites
//! elsewhere in the genome that resemble the guide closely enough, and sit
//! next to a valid PAM, can be cut too. `guide-scan` finds those sites with
//! a BLAST-like seed-and-extend search: exact occurrences of the guide's
//! 3'-terminal seed anchor candidate positions, the adjacent PAM window is
//! validated against a wildcard motif, and the rest of the guide is verified
//! under a bounded mismatch budget.
//!
//! ## Features
//!
//! - **Seed anchoring**: exact-match seeds prune chromosome-scale buffers
//!   before any expensive comparison runs
//! - **PAM templates**: the twelve published Cas motifs ship embedded, and
//!   any wildcard pattern over {N,A,T,G,C,R,W,V,Y,M} is accepted verbatim
//! - **Bounded verification**: mismatch counting aborts the moment a
//!   candidate exceeds the budget
//! - **Grouped results**: hits are reported by exact mismatch count, each
//!   annotated so mismatched bases are visible at a glance
//! - **Parallel scanning**: independent chromosomes are searched on separate
//!   threads and merged deterministically
//!
//! ## Example
//!
//! ```rust
//! use guide_scan::core::{ChromosomeId, Guide, SequenceBuffer};
//! use guide_scan::matching::{PamPattern, SearchConfig, SearchEngine};
//!
//! let guide = Guide::parse("AUGCAUGCAUGCAUGCAUGC").unwrap(); // RNA input is fine
//! let pam = PamPattern::new("NGG").unwrap();
//!
//! let engine = SearchEngine::new(&guide, &pam, SearchConfig { max_mismatches: 2 });
//! let buffer = SequenceBuffer::new(
//!     ChromosomeId::new("21"),
//!     "GGATGCATGCATGCATGCATGCAGGTT",
//! );
//!
//! let results = engine.search_buffer(&buffer);
//! for (mismatches, hits) in results.groups() {
//!     println!("{mismatches} mismatches ({})", hits.len());
//!     for hit in hits {
//!         println!("Chromosome {} Position {}: {}", hit.chromosome, hit.position, hit.sequence);
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Guide and sequence buffer types
//! - [`catalog`]: PAM motif template catalog
//! - [`matching`]: Seed scanning, PAM validation, alignment, and the engine
//! - [`parsing`]: FASTA and plain-text sequence loaders
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::{PamCatalog, PamTemplate};
pub use core::{ChromosomeId, Guide, SequenceBuffer};
pub use matching::engine::{SearchConfig, SearchEngine};
pub use matching::pam::PamPattern;
pub use matching::results::{HitStore, OffTargetHit};
