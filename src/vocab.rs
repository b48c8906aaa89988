//! Vocabulary constants for the generated graphs.
//!
//! - `eli:` (<http://data.europa.eu/eli/ontology#>) -- the European
//!   Legislation Identifier vocabulary, used for all descriptive
//!   attributes and the generic containment property
//! - `gdprtext:` (<http://purl.org/adaptcentre/ontologies/GDPRtEXT#>) --
//!   the project ontology: one class per structural node type and the
//!   type-specific containment properties
//! - `gdpr:` (<http://www.semanticweb.org/harsh/ontologies/GDPR#>) --
//!   the resource namespace the text nodes themselves live in
//!
//! The `owl` and `dc` modules carry the handful of standard terms the
//! ontology header needs that `oxrdf::vocab` does not provide.

use oxrdf::NamedNode;

use crate::error::Result;

/// European Legislation Identifier vocabulary.
pub mod eli {
    use oxrdf::NamedNodeRef;

    pub const PREFIX: &str = "eli";
    pub const NS: &str = "http://data.europa.eu/eli/ontology#";

    pub const LEGAL_RESOURCE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://data.europa.eu/eli/ontology#LegalResource");
    pub const LEGAL_RESOURCE_SUBDIVISION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://data.europa.eu/eli/ontology#LegalResourceSubdivision");

    pub const TITLE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://data.europa.eu/eli/ontology#title");
    pub const NUMBER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://data.europa.eu/eli/ontology#number");
    pub const TITLE_ALTERNATIVE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://data.europa.eu/eli/ontology#title_alternative");
    pub const DESCRIPTION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://data.europa.eu/eli/ontology#description");
    pub const IS_PART_OF: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://data.europa.eu/eli/ontology#is_part_of");
    pub const ID_LOCAL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://data.europa.eu/eli/ontology#id_local");
}

/// GDPRtEXT project ontology.
pub mod gdprtext {
    use oxrdf::NamedNodeRef;

    pub const PREFIX: &str = "gdprtext";
    pub const NS: &str = "http://purl.org/adaptcentre/ontologies/GDPRtEXT#";

    /// The ontology itself.
    pub const ONTOLOGY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/adaptcentre/ontologies/GDPRtEXT#");

    // Structural classes
    pub const CHAPTER: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/adaptcentre/ontologies/GDPRtEXT#Chapter");
    pub const SECTION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/adaptcentre/ontologies/GDPRtEXT#Section");
    pub const ARTICLE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/adaptcentre/ontologies/GDPRtEXT#Article");
    pub const POINT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/adaptcentre/ontologies/GDPRtEXT#Point");
    pub const SUB_POINT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/adaptcentre/ontologies/GDPRtEXT#SubPoint");
    pub const RECITAL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/adaptcentre/ontologies/GDPRtEXT#Recital");
    pub const CITATION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/adaptcentre/ontologies/GDPRtEXT#Citation");

    // Type-specific containment properties
    pub const IS_PART_OF_CHAPTER: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://purl.org/adaptcentre/ontologies/GDPRtEXT#isPartOfChapter",
    );
    pub const IS_PART_OF_SECTION: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://purl.org/adaptcentre/ontologies/GDPRtEXT#isPartOfSection",
    );
    pub const IS_PART_OF_ARTICLE: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://purl.org/adaptcentre/ontologies/GDPRtEXT#isPartOfArticle",
    );
    pub const IS_PART_OF_POINT: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(
        "http://purl.org/adaptcentre/ontologies/GDPRtEXT#isPartOfPoint",
    );

    /// Cross-reference from an article or recital to a citation.
    pub const CITES: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/adaptcentre/ontologies/GDPRtEXT#cites");
}

/// Resource namespace for the GDPR text nodes.
pub mod gdpr {
    use oxrdf::NamedNodeRef;

    pub const PREFIX: &str = "gdpr";
    pub const NS: &str = "http://www.semanticweb.org/harsh/ontologies/GDPR#";

    /// The document root: the GDPR as a legal resource.
    pub const ROOT: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.semanticweb.org/harsh/ontologies/GDPR#GDPR");
}

/// OWL terms needed by the ontology header.
pub mod owl {
    use oxrdf::NamedNodeRef;

    pub const PREFIX: &str = "owl";
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";

    pub const ONTOLOGY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");
    pub const CLASS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
    pub const OBJECT_PROPERTY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
    pub const FUNCTIONAL_PROPERTY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#FunctionalProperty");
    pub const VERSION_INFO: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#versionInfo");
}

/// Dublin Core terms needed by the ontology header.
pub mod dc {
    use oxrdf::NamedNodeRef;

    pub const PREFIX: &str = "dc";
    pub const NS: &str = "http://purl.org/dc/elements/1.1/";

    pub const TITLE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/title");
    pub const CREATOR: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/creator");
    pub const DESCRIPTION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/elements/1.1/description");
}

/// Build the IRI of a text node from its local identifier.
///
/// # Errors
///
/// Returns `GeneratorError::Iri` if the identifier contains characters
/// that cannot appear in an IRI (e.g. whitespace in a declared number).
pub fn text_node(id: &str) -> Result<NamedNode> {
    Ok(NamedNode::new(format!("{}{id}", gdpr::NS))?)
}

/// Owned copy of the document root node.
#[must_use]
pub fn root_node() -> NamedNode {
    gdpr::ROOT.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node() {
        let node = text_node("article5").unwrap();
        assert_eq!(
            node.as_str(),
            "http://www.semanticweb.org/harsh/ontologies/GDPR#article5"
        );
    }

    #[test]
    fn test_text_node_invalid() {
        assert!(text_node("article 5").is_err());
        assert!(text_node("article<5>").is_err());
    }

    #[test]
    fn test_namespaces_consistent() {
        assert!(eli::TITLE.as_str().starts_with(eli::NS));
        assert!(gdprtext::CHAPTER.as_str().starts_with(gdprtext::NS));
        assert!(gdpr::ROOT.as_str().starts_with(gdpr::NS));
    }
}
