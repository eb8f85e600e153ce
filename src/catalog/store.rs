use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::matching::pam::PamPattern;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// A named PAM motif template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PamTemplate {
    /// Short identifier (e.g. "spcas9_ngg")
    pub id: String,

    /// Human-readable name (e.g. "SpCas9 5'-NGG-3'")
    pub display_name: String,

    /// Nuclease the motif belongs to (e.g. "SpCas9")
    pub nuclease: String,

    /// Organism the nuclease comes from
    pub organism: String,

    /// The wildcard-encoded motif, validated on load
    pub pattern: PamPattern,
}

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub templates: Vec<PamTemplate>,
}

/// The catalog of known PAM motif templates.
///
/// Ships with the twelve published motifs embedded at compile time; a custom
/// catalog can be loaded from a JSON file of the same shape. Every template's
/// pattern is constructed through [`PamPattern`], so a catalog that parses is
/// guaranteed to be searchable.
#[derive(Debug)]
pub struct PamCatalog {
    /// All known templates, in catalog order
    pub templates: Vec<PamTemplate>,

    /// Index: template ID -> index in templates vec
    id_to_index: HashMap<String, usize>,
}

impl PamCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
            id_to_index: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded JSON is malformed (caught by
    /// build.rs in practice).
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time, validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/pam_motifs.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read or
    /// `CatalogError::ParseError`/`InvalidTemplate` on malformed content.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a catalog from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` on malformed JSON (including
    /// patterns rejected by [`PamPattern`]).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        for template in data.templates {
            catalog.add_template(template);
        }

        Ok(catalog)
    }

    /// Add a template to the catalog
    pub fn add_template(&mut self, template: PamTemplate) {
        let index = self.templates.len();
        self.id_to_index.insert(template.id.clone(), index);
        self.templates.push(template);
    }

    /// Get a template by ID
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PamTemplate> {
        self.id_to_index.get(id).map(|&idx| &self.templates[idx])
    }

    /// Export the catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: String::new(),
            templates: self.templates.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for PamCatalog {
    fn default() -> Self {
        Self::new()
    }
}
