//! GDPRtEXT ontology generation.
//!
//! Builds the OWL ontology the generated text graph is typed against:
//! one class per structural node type, each a subclass of
//! `eli:LegalResourceSubdivision`, the four type-specific containment
//! properties as subproperties of `eli:is_part_of`, and the `cites`
//! cross-reference property.

use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Graph, Literal, NamedNodeRef, TripleRef};

use crate::vocab::{dc, eli, gdprtext, owl};

/// Ontology version emitted in the header.
const ONTOLOGY_VERSION: &str = "0.1";

/// Build the GDPRtEXT ontology graph.
#[must_use]
pub fn build_ontology() -> Graph {
    let mut graph = Graph::new();

    add_header(&mut graph);

    declare_class(&mut graph, gdprtext::CHAPTER, "Chapter");
    declare_class(&mut graph, gdprtext::SECTION, "Section");
    declare_class(&mut graph, gdprtext::ARTICLE, "Article");
    declare_class(&mut graph, gdprtext::POINT, "Point");
    declare_class(&mut graph, gdprtext::SUB_POINT, "SubPoint");
    declare_class(&mut graph, gdprtext::RECITAL, "Recital");
    declare_class(&mut graph, gdprtext::CITATION, "Citation");

    declare_part_of_property(
        &mut graph,
        gdprtext::IS_PART_OF_CHAPTER,
        gdprtext::CHAPTER,
        "chapter",
    );
    declare_part_of_property(
        &mut graph,
        gdprtext::IS_PART_OF_SECTION,
        gdprtext::SECTION,
        "section",
    );
    declare_part_of_property(
        &mut graph,
        gdprtext::IS_PART_OF_ARTICLE,
        gdprtext::ARTICLE,
        "article",
    );
    declare_part_of_property(
        &mut graph,
        gdprtext::IS_PART_OF_POINT,
        gdprtext::POINT,
        "point",
    );

    declare_cites_property(&mut graph);

    graph
}

fn add_header(graph: &mut Graph) {
    add_ref(graph, gdprtext::ONTOLOGY, rdf::TYPE, owl::ONTOLOGY);
    add_str(graph, gdprtext::ONTOLOGY, rdfs::LABEL, "GDPR text EXTensions");
    add_str(graph, gdprtext::ONTOLOGY, dc::TITLE, "GDPRtEXT");
    add_str(graph, gdprtext::ONTOLOGY, owl::VERSION_INFO, ONTOLOGY_VERSION);
    add_str(
        graph,
        gdprtext::ONTOLOGY,
        dc::CREATOR,
        "Harshvardhan J. Pandit",
    );
    add_str(
        graph,
        gdprtext::ONTOLOGY,
        dc::DESCRIPTION,
        "This ontology extends the canonical (official) GDPR text with additional annotations",
    );
    add_str(
        graph,
        gdprtext::ONTOLOGY,
        rdfs::COMMENT,
        "This is an ontology to represent GDPR text as a set of RDF resources",
    );
}

fn declare_class(graph: &mut Graph, class: NamedNodeRef<'_>, label: &str) {
    add_ref(graph, class, rdf::TYPE, owl::CLASS);
    add_ref(graph, class, rdfs::SUB_CLASS_OF, eli::LEGAL_RESOURCE_SUBDIVISION);
    add_str(graph, class, rdfs::LABEL, label);
    add_str(graph, class, rdfs::COMMENT, &format!("{label} in GDPR text"));
}

fn declare_part_of_property(
    graph: &mut Graph,
    property: NamedNodeRef<'_>,
    range: NamedNodeRef<'_>,
    range_label: &str,
) {
    add_ref(graph, property, rdf::TYPE, owl::OBJECT_PROPERTY);
    add_ref(graph, property, rdf::TYPE, owl::FUNCTIONAL_PROPERTY);
    add_ref(graph, property, rdfs::SUB_PROPERTY_OF, eli::IS_PART_OF);
    add_ref(graph, property, rdfs::DOMAIN, eli::LEGAL_RESOURCE_SUBDIVISION);
    add_ref(graph, property, rdfs::RANGE, range);
    add_str(
        graph,
        property,
        rdfs::LABEL,
        &format!("is part of {}", capitalize(range_label)),
    );
    add_str(
        graph,
        property,
        rdfs::COMMENT,
        &format!("represents a legal resource subdivision to be part of a {range_label}"),
    );
}

fn declare_cites_property(graph: &mut Graph) {
    add_ref(graph, gdprtext::CITES, rdf::TYPE, owl::OBJECT_PROPERTY);
    add_ref(
        graph,
        gdprtext::CITES,
        rdfs::DOMAIN,
        eli::LEGAL_RESOURCE_SUBDIVISION,
    );
    add_ref(graph, gdprtext::CITES, rdfs::RANGE, gdprtext::CITATION);
    add_str(graph, gdprtext::CITES, rdfs::LABEL, "cites");
    add_str(
        graph,
        gdprtext::CITES,
        rdfs::COMMENT,
        "represents an article or recital citing a referenced document",
    );
}

fn add_ref(
    graph: &mut Graph,
    subject: NamedNodeRef<'_>,
    predicate: NamedNodeRef<'_>,
    object: NamedNodeRef<'_>,
) {
    graph.insert(TripleRef::new(subject, predicate, object));
}

fn add_str(graph: &mut Graph, subject: NamedNodeRef<'_>, predicate: NamedNodeRef<'_>, value: &str) {
    let object = Literal::new_simple_literal(value);
    graph.insert(TripleRef::new(subject, predicate, object.as_ref()));
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
