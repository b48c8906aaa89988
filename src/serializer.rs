//! Graph serialization to standard interchange formats.
//!
//! The generator's contract ends at producing a complete statement set;
//! this module is the serializer it hands the finished graph to. Output is
//! deterministic: statements are sorted before writing, so reference
//! outputs are byte-stable across runs regardless of insertion order.

use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use oxrdf::{Graph, Triple, TripleRef};
use oxrdfxml::RdfXmlSerializer;
use oxttl::{NTriplesSerializer, TurtleSerializer};

use crate::error::Result;
use crate::vocab::{dc, eli, gdpr, gdprtext, owl};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Turtle.
    #[value(name = "ttl", alias = "turtle")]
    Turtle,
    /// N-Triples.
    #[value(name = "nt", alias = "ntriples")]
    NTriples,
    /// RDF/XML.
    #[value(name = "xml", alias = "rdfxml")]
    RdfXml,
}

impl Format {
    /// File extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Turtle => "ttl",
            Self::NTriples => "nt",
            Self::RdfXml => "rdf",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Turtle => "ttl",
            Self::NTriples => "nt",
            Self::RdfXml => "xml",
        };
        f.write_str(name)
    }
}

/// Statements sorted by subject, predicate, object.
fn sorted_triples(graph: &Graph) -> Vec<Triple> {
    let mut triples: Vec<Triple> = graph.iter().map(TripleRef::into_owned).collect();
    triples.sort_by_cached_key(ToString::to_string);
    triples
}

/// Serialize a graph to bytes in the given format.
///
/// # Errors
/// Returns `GeneratorError::Io` if serialization fails.
pub fn write_graph(graph: &Graph, format: Format) -> Result<Vec<u8>> {
    let triples = sorted_triples(graph);

    match format {
        Format::Turtle => {
            let mut serializer = TurtleSerializer::new()
                .with_prefix(eli::PREFIX, eli::NS)?
                .with_prefix(gdprtext::PREFIX, gdprtext::NS)?
                .with_prefix(gdpr::PREFIX, gdpr::NS)?
                .with_prefix(owl::PREFIX, owl::NS)?
                .with_prefix(dc::PREFIX, dc::NS)?
                .for_writer(Vec::new());
            for triple in &triples {
                serializer.serialize_triple(triple)?;
            }
            Ok(serializer.finish()?)
        }
        Format::NTriples => {
            let mut serializer = NTriplesSerializer::new().for_writer(Vec::new());
            for triple in &triples {
                serializer.serialize_triple(triple)?;
            }
            Ok(serializer.finish())
        }
        Format::RdfXml => {
            let mut serializer = RdfXmlSerializer::new().for_writer(Vec::new());
            for triple in &triples {
                serializer.serialize_triple(triple)?;
            }
            Ok(serializer.finish()?)
        }
    }
}

/// Save a graph to `<output_dir>/<stem>.<ext>`.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then
/// renames. This ensures partial writes don't corrupt existing files on
/// crash.
///
/// # Returns
/// Path to the saved file.
///
/// # Errors
/// Returns `GeneratorError::Io` on serialization or filesystem failure.
pub fn save_graph(graph: &Graph, format: Format, output_dir: &Path, stem: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let output_file = output_dir.join(format!("{stem}.{}", format.extension()));
    let temp_file = output_dir.join(format!(".{stem}.{}.tmp", format.extension()));

    let content = write_graph(graph, format)?;

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(&content)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;

    Ok(output_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::vocab::rdf;
    use oxrdf::{Literal, NamedNode};
    use tempfile::tempdir;

    fn sample_triples() -> Vec<Triple> {
        let article = NamedNode::new("http://www.semanticweb.org/harsh/ontologies/GDPR#article1")
            .unwrap();
        vec![
            Triple::new(
                article.clone(),
                rdf::TYPE,
                gdprtext::ARTICLE.into_owned(),
            ),
            Triple::new(
                article.clone(),
                eli::NUMBER.into_owned(),
                Literal::new_simple_literal("1"),
            ),
            Triple::new(
                article,
                eli::IS_PART_OF.into_owned(),
                gdpr::ROOT.into_owned(),
            ),
        ]
    }

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        for triple in sample_triples() {
            graph.insert(&triple);
        }
        graph
    }

    #[test]
    fn test_write_turtle_has_prefixes() {
        let output = write_graph(&sample_graph(), Format::Turtle).unwrap();
        let text = String::from_utf8_lossy(&output);

        assert!(text.contains("@prefix eli:"), "got: {text}");
        assert!(text.contains("@prefix gdprtext:"), "got: {text}");
        assert!(text.contains("article1"));
    }

    #[test]
    fn test_write_ntriples_one_line_per_statement() {
        let graph = sample_graph();
        let output = write_graph(&graph, Format::NTriples).unwrap();
        let text = String::from_utf8_lossy(&output);

        assert_eq!(text.lines().count(), graph.len());
        assert!(text.contains("<http://data.europa.eu/eli/ontology#number> \"1\""));
    }

    #[test]
    fn test_write_rdfxml() {
        let output = write_graph(&sample_graph(), Format::RdfXml).unwrap();
        let text = String::from_utf8_lossy(&output);

        assert!(text.starts_with("<?xml"));
        assert!(text.contains("article1"));
    }

    #[test]
    fn test_output_independent_of_insertion_order() {
        let mut forward = Graph::new();
        for triple in sample_triples() {
            forward.insert(&triple);
        }
        let mut backward = Graph::new();
        for triple in sample_triples().iter().rev() {
            backward.insert(triple);
        }

        let a = write_graph(&forward, Format::NTriples).unwrap();
        let b = write_graph(&backward, Format::NTriples).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_save_graph() {
        let dir = tempdir().unwrap();
        let path = save_graph(&sample_graph(), Format::Turtle, dir.path(), "gdpr").unwrap();

        assert!(path.exists());
        assert!(path.to_string_lossy().ends_with("gdpr.ttl"));

        // No temp file left behind
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_save_graph_creates_output_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deliverables");
        let path = save_graph(&sample_graph(), Format::NTriples, &nested, "gdpr").unwrap();

        assert!(path.exists());
        assert_eq!(path, nested.join("gdpr.nt"));
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(Format::Turtle.extension(), "ttl");
        assert_eq!(Format::NTriples.extension(), "nt");
        assert_eq!(Format::RdfXml.extension(), "rdf");
    }
}
