//! GDPRtEXT generator - GDPR text as linked data using the ELI vocabulary.
//!
//! This crate converts the structured JSON rendition of the GDPR text into
//! an RDF graph: every chapter, section, article, point, subpoint, recital
//! and citation becomes a resource described with the ELI legal-document
//! vocabulary and linked to its ancestors and the document root.
//!
//! # Example
//!
//! ```
//! use gdprtext::{emit_regulation, parse_regulation};
//!
//! let json = r#"{
//!     "title": "General Data Protection Regulation",
//!     "chapters": [
//!         {"number": "I", "title": "General provisions", "contents": [
//!             {"type": "article", "number": "1", "contents": [
//!                 {"number": "1", "text": "This Regulation lays down rules.", "subpoints": []}
//!             ]}
//!         ]}
//!     ]
//! }"#;
//!
//! let regulation = parse_regulation(json).unwrap();
//! let emitted = emit_regulation(&regulation).unwrap();
//! assert!(emitted.node("article1-1").is_some());
//! ```
//!
//! # Architecture
//!
//! - [`types`]: The typed document tree (chapters with sections XOR articles)
//! - [`loader`]: JSON input loading
//! - [`vocab`]: ELI and GDPRtEXT vocabulary constants
//! - [`emitter`]: The hierarchical triple generator
//! - [`pairings`]: Hand-maintained citation cross-reference table
//! - [`ontology`]: GDPRtEXT OWL ontology generation
//! - [`serializer`]: Deterministic Turtle / N-Triples / RDF/XML output
//! - [`config`]: Defaults and node-reference validation
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod loader;
pub mod ontology;
pub mod pairings;
pub mod serializer;
pub mod types;
pub mod vocab;

// Re-export main functions
pub use emitter::{emit_regulation, EmittedGraph};
pub use ontology::build_ontology;

// Re-export commonly used items
pub use error::{GeneratorError, Result};
pub use loader::{load_regulation, parse_regulation};
pub use pairings::{apply_pairings, load_pairings, CitationPairing};
pub use serializer::{save_graph, write_graph, Format};
pub use types::{
    Article, Chapter, ChapterContents, Citation, Point, Recital, Regulation, Section, SubPoint,
};
