//! Off-target search engine: seed scanning, PAM validation, and
//! bounded-mismatch alignment.
//!
//! This module provides the core search functionality:
//!
//! - [`PamPattern`]: Wildcard-encoded motif matching with a fixed symbol table
//! - [`align`]: Bounded-mismatch comparison with case-annotated output
//! - [`SeedScanner`]: Lazy scan for exact seed occurrences with a valid PAM
//! - [`SearchEngine`]: Orchestrates the above over one or many buffers
//! - [`HitStore`]: Results grouped by mismatch count
//!
//! ## Search Algorithm
//!
//! A BLAST-style seed-and-extend pass, one buffer at a time:
//!
//! 1. **Anchor**: find exact occurrences of the guide's 3'-terminal seed
//! 2. **Filter**: require the PAM pattern to validate immediately 3' of the seed
//! 3. **Extend**: compare the guide's remaining prefix against the window 5'
//!    of the seed, aborting once the mismatch budget is exceeded
//! 4. **Group**: store each surviving site under its exact mismatch count
//!
//! Candidates whose windows fall off either end of the buffer are skipped;
//! they are expected near boundaries, not errors.
//!
//! ## Example
//!
//! ```rust
//! use guide_scan::core::{ChromosomeId, Guide, SequenceBuffer};
//! use guide_scan::matching::{PamPattern, SearchConfig, SearchEngine};
//!
//! let guide = Guide::parse("ATGCATGCATGCATGCATGC").unwrap();
//! let pam = PamPattern::new("NGG").unwrap();
//! let engine = SearchEngine::new(&guide, &pam, SearchConfig { max_mismatches: 1 });
//!
//! let buffer = SequenceBuffer::new(
//!     ChromosomeId::new("1"),
//!     "TTATGCATGCATGCATGCATGCAGGTT",
//! );
//! let results = engine.search_buffer(&buffer);
//!
//! for (mismatches, hits) in results.groups() {
//!     for hit in hits {
//!         println!("{mismatches} mismatches at {}:{}", hit.chromosome, hit.position);
//!     }
//! }
//! ```

pub mod align;
pub mod engine;
pub mod pam;
pub mod results;
pub mod seed;

pub use align::{align, Alignment};
pub use engine::{SearchConfig, SearchEngine, DEFAULT_MAX_MISMATCHES};
pub use pam::{PamPattern, PamPatternError};
pub use results::{HitStore, OffTargetHit};
pub use seed::{Candidate, SeedScanner};
