//! Citation cross-references.
//!
//! Which articles and recitals cite which footnoted references is not
//! derivable from the document tree; it is a hand-maintained table of
//! `(source, citation)` identifier pairs supplied alongside the document.
//! The table is applied after the tree walk, resolving both sides against
//! the emitted identifier index.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use oxrdf::TripleRef;
use serde::Deserialize;

use crate::config::{validate_citation_ref, validate_source_ref};
use crate::emitter::EmittedGraph;
use crate::error::{GeneratorError, Result};
use crate::vocab::gdprtext;

/// One entry of the citation table: an article or recital cites a citation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CitationPairing {
    /// Identifier of the citing article or recital (e.g., "article45").
    pub source: String,

    /// Identifier of the cited citation (e.g., "citation-3").
    pub citation: String,
}

/// Load a citation pairing table from a JSON file.
///
/// # Errors
/// Returns `GeneratorError::Io` if the file cannot be read and
/// `GeneratorError::Json` if the table is malformed.
pub fn load_pairings(path: &Path) -> Result<Vec<CitationPairing>> {
    let file = File::open(path)?;
    let pairings: Vec<CitationPairing> = serde_json::from_reader(BufReader::new(file))?;

    tracing::debug!(pairings = pairings.len(), "loaded citation pairings");

    Ok(pairings)
}

/// Apply a citation table to an emitted graph.
///
/// Adds one `gdprtext:cites` statement per pair. Every identifier must
/// resolve against the emitted index: an unknown source or citation means
/// the statement cannot be constructed, which is fatal per the error
/// policy, and the graph is left untouched.
///
/// # Errors
/// `InvalidNodeRef` for a malformed identifier, `UnknownPairingSource` /
/// `UnknownPairingCitation` for identifiers that were never emitted.
pub fn apply_pairings(emitted: &mut EmittedGraph, pairings: &[CitationPairing]) -> Result<()> {
    // Resolve everything before touching the graph so a bad entry cannot
    // leave a partially applied table behind.
    let mut resolved = Vec::with_capacity(pairings.len());
    for pairing in pairings {
        validate_source_ref(&pairing.source)?;
        validate_citation_ref(&pairing.citation)?;

        let source = emitted
            .node(&pairing.source)
            .ok_or_else(|| GeneratorError::UnknownPairingSource(pairing.source.clone()))?
            .clone();
        let citation = emitted
            .node(&pairing.citation)
            .ok_or_else(|| GeneratorError::UnknownPairingCitation(pairing.citation.clone()))?
            .clone();
        resolved.push((source, citation));
    }

    let graph = emitted.graph_mut();
    for (source, citation) in &resolved {
        graph.insert(TripleRef::new(
            source.as_ref(),
            gdprtext::CITES,
            citation.as_ref(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::emit_regulation;
    use crate::types::{Article, Chapter, ChapterContents, Citation, Recital, Regulation};
    use std::io::Write;

    fn emitted_fixture() -> EmittedGraph {
        let regulation = Regulation {
            title: "GDPR".to_string(),
            abbrv: None,
            regulation: None,
            dated: None,
            updated: None,
            about: None,
            identifier: None,
            language: None,
            chapters: vec![Chapter {
                number: "I".to_string(),
                title: "T".to_string(),
                contents: ChapterContents::Articles(vec![Article {
                    number: "45".to_string(),
                    points: Vec::new(),
                }]),
            }],
            recitals: vec![Recital {
                number: "9".to_string(),
                text: "Whereas...".to_string(),
            }],
            citations: vec![Citation {
                number: "3".to_string(),
                text: "OJ L 281, p. 31.".to_string(),
            }],
        };
        emit_regulation(&regulation).unwrap()
    }

    fn pairing(source: &str, citation: &str) -> CitationPairing {
        CitationPairing {
            source: source.to_string(),
            citation: citation.to_string(),
        }
    }

    #[test]
    fn test_apply_pairings_adds_cites_statements() {
        let mut emitted = emitted_fixture();
        let before = emitted.len();

        apply_pairings(
            &mut emitted,
            &[pairing("article45", "citation-3"), pairing("recital-9", "citation-3")],
        )
        .unwrap();

        assert_eq!(emitted.len(), before + 2);
        let source = emitted.node("article45").unwrap();
        let citation = emitted.node("citation-3").unwrap();
        assert!(emitted.graph().contains(TripleRef::new(
            source.as_ref(),
            gdprtext::CITES,
            citation.as_ref()
        )));
    }

    #[test]
    fn test_apply_pairings_unknown_source() {
        let mut emitted = emitted_fixture();

        let err =
            apply_pairings(&mut emitted, &[pairing("article99", "citation-3")]).unwrap_err();
        assert!(matches!(err, GeneratorError::UnknownPairingSource(id) if id == "article99"));
    }

    #[test]
    fn test_apply_pairings_unknown_citation() {
        let mut emitted = emitted_fixture();

        let err =
            apply_pairings(&mut emitted, &[pairing("article45", "citation-8")]).unwrap_err();
        assert!(matches!(err, GeneratorError::UnknownPairingCitation(id) if id == "citation-8"));
    }

    #[test]
    fn test_apply_pairings_invalid_source_shape() {
        let mut emitted = emitted_fixture();

        // Points cannot cite; only whole articles and recitals can.
        let err =
            apply_pairings(&mut emitted, &[pairing("article45-1", "citation-3")]).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidNodeRef(_)));
    }

    #[test]
    fn test_apply_pairings_leaves_graph_untouched_on_error() {
        let mut emitted = emitted_fixture();
        let before = emitted.len();

        let result = apply_pairings(
            &mut emitted,
            &[pairing("article45", "citation-3"), pairing("article99", "citation-3")],
        );

        assert!(result.is_err());
        assert_eq!(emitted.len(), before);
    }

    #[test]
    fn test_load_pairings_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"source": "article45", "citation": "citation-3"}}]"#
        )
        .unwrap();

        let pairings = load_pairings(file.path()).unwrap();
        assert_eq!(pairings, vec![pairing("article45", "citation-3")]);
    }
}
