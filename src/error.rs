//! Error types for the generator.
//!
//! One error enum for the whole crate: every failure is fatal and aborts
//! the run before any output is written.

use thiserror::Error;

/// Main error type for the gdprtext library.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input document.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A node number that cannot form a valid IRI.
    #[error("Invalid IRI: {0}")]
    Iri(#[from] oxrdf::IriParseError),

    /// Two distinct nodes produced the same identifier.
    #[error("Duplicate identifier '{0}': every node in the generated graph must be unique")]
    DuplicateIdentifier(String),

    /// A pairing entry that is not a well-formed node reference.
    #[error("Invalid node reference: '{0}'. Expected articleN, recital-N, or citation-N (e.g., article5, recital-1)")]
    InvalidNodeRef(String),

    /// A pairing source that was never emitted.
    #[error("Citation pairing source '{0}' does not match any emitted article or recital")]
    UnknownPairingSource(String),

    /// A pairing target that was never emitted.
    #[error("Citation pairing target '{0}' does not match any emitted citation")]
    UnknownPairingCitation(String),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_identifier_display() {
        let err = GeneratorError::DuplicateIdentifier("article1-1".to_string());
        assert!(err.to_string().contains("article1-1"));
        assert!(err.to_string().contains("unique"));
    }

    #[test]
    fn test_invalid_node_ref_display() {
        let err = GeneratorError::InvalidNodeRef("chapter1".to_string());
        assert!(err.to_string().contains("chapter1"));
        assert!(err.to_string().contains("articleN"));
    }

    #[test]
    fn test_unknown_pairing_source_display() {
        let err = GeneratorError::UnknownPairingSource("article99".to_string());
        assert_eq!(
            err.to_string(),
            "Citation pairing source 'article99' does not match any emitted article or recital"
        );
    }
}
