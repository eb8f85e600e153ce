//! Core data types for off-target site search.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Guide`]: A validated guide sequence (15-25 nt, uppercase DNA)
//! - [`SequenceBuffer`]: A labeled in-memory nucleotide sequence to search
//! - [`ChromosomeId`]: The label attached to a buffer and to every hit
//!
//! ## Orientation
//!
//! Guides are held 5' to 3'. The seed is the 3'-terminal [`SEED_LEN`]
//! nucleotides; the PAM is expected in the searched text immediately 3' of the
//! seed, exactly as a Cas nuclease reads a protospacer.

pub mod guide;
pub mod sequence;

pub use guide::{Guide, GuideError, SEED_LEN};
pub use sequence::{ChromosomeId, SequenceBuffer};
