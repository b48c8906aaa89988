//! Output defaults and node-reference validation for the generator.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{GeneratorError, Result};

/// Default output directory for generated files.
pub const DEFAULT_OUTPUT_DIR: &str = "deliverables";

/// File stem for the generated GDPR text graph.
pub const GDPR_FILE_STEM: &str = "gdpr";

/// File stem for the generated GDPRtEXT ontology.
pub const ONTOLOGY_FILE_STEM: &str = "gdpr-ontology";

/// Pairing source pattern: an article or recital identifier.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SOURCE_REF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(article\d+|recital-\d+)$").expect("valid regex"));

/// Pairing target pattern: a citation identifier.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CITATION_REF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^citation-\d+$").expect("valid regex"));

/// Validate a citation pairing source reference.
///
/// Sources of a `cites` statement must be whole articles or recitals;
/// points, subpoints, chapters and sections are not valid sources.
///
/// # Examples
/// ```
/// use gdprtext::config::validate_source_ref;
///
/// assert!(validate_source_ref("article5").is_ok());
/// assert!(validate_source_ref("recital-1").is_ok());
/// assert!(validate_source_ref("chapter1").is_err());
/// assert!(validate_source_ref("article5-1").is_err());
/// ```
pub fn validate_source_ref(id: &str) -> Result<()> {
    if SOURCE_REF_PATTERN.is_match(id) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidNodeRef(id.to_string()))
    }
}

/// Validate a citation pairing target reference.
///
/// # Examples
/// ```
/// use gdprtext::config::validate_citation_ref;
///
/// assert!(validate_citation_ref("citation-3").is_ok());
/// assert!(validate_citation_ref("article5").is_err());
/// ```
pub fn validate_citation_ref(id: &str) -> Result<()> {
    if CITATION_REF_PATTERN.is_match(id) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidNodeRef(id.to_string()))
    }
}
