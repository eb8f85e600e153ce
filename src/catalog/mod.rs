//! PAM motif template catalog.
//!
//! Published Cas nucleases recognize different protospacer adjacent motifs.
//! The catalog names the common ones (SpCas9 NGG, SaCas9 NNGRRT, Cpf1 TTTV,
//! ...) so a search can reference a motif by ID instead of spelling out the
//! wildcard pattern. See [`PamCatalog`] for loading and lookup.

pub mod store;

pub use store::{CatalogError, PamCatalog, PamTemplate};
