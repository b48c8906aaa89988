//! Hierarchical triple generator.
//!
//! Walks the document tree top-down, depth-first, in input order and emits
//! the per-node statement set into an in-memory graph: type, number,
//! alternate title, title or description, local id, and the containment
//! edges. Containment is deliberately denormalized: every node links to
//! each ancestor in its chain with the generic `eli:is_part_of` property
//! *and* with one type-specific `gdprtext:isPartOf*` property per ancestor,
//! plus a direct link to the document root.
//!
//! Construction is purely additive; the graph is handed out only after the
//! whole walk succeeds, so a malformed tree never yields partial output.

use std::collections::BTreeMap;

use oxrdf::vocab::rdf;
use oxrdf::{Graph, Literal, NamedNode, NamedNodeRef, TripleRef};

use crate::error::{GeneratorError, Result};
use crate::types::{
    Article, Chapter, ChapterContents, Citation, Point, Recital, Regulation, Section, SubPoint,
};
use crate::vocab::{self, eli, gdpr, gdprtext};

/// A finished statement set plus the identifier index built during the walk.
///
/// The index maps every assigned local identifier (e.g. `article5-1-a`) to
/// its node, which is what later cross-referencing (citation pairings)
/// resolves against.
#[derive(Debug)]
pub struct EmittedGraph {
    graph: Graph,
    ids: BTreeMap<String, NamedNode>,
}

impl EmittedGraph {
    /// The generated statement set.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Mutable access for post-walk additions (citation pairings).
    pub(crate) fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// Consume into the bare graph for serialization.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Look up an emitted node by its local identifier.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&NamedNode> {
        self.ids.get(id)
    }

    /// All assigned identifiers, in sorted order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.ids.keys().map(String::as_str)
    }

    /// Number of statements in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Whether the graph holds no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}

/// An ancestor in the containment chain: its node and its (resolved) number.
#[derive(Debug, Clone)]
struct Ancestor {
    node: NamedNode,
    number: String,
}

impl Ancestor {
    fn new(node: &NamedNode, number: &str) -> Self {
        Self {
            node: node.clone(),
            number: number.to_string(),
        }
    }
}

/// Generate the statement set for a regulation document.
///
/// # Errors
///
/// Fails on the first malformed node: an identifier that cannot form an
/// IRI, or an identifier collision. No partial graph is returned.
pub fn emit_regulation(regulation: &Regulation) -> Result<EmittedGraph> {
    let mut emitter = GraphEmitter::new();
    emitter.emit(regulation)?;
    Ok(emitter.finish())
}

/// Builder owning the graph for the duration of one emission run.
struct GraphEmitter {
    graph: Graph,
    ids: BTreeMap<String, NamedNode>,
}

impl GraphEmitter {
    fn new() -> Self {
        Self {
            graph: Graph::new(),
            ids: BTreeMap::new(),
        }
    }

    fn finish(self) -> EmittedGraph {
        EmittedGraph {
            graph: self.graph,
            ids: self.ids,
        }
    }

    fn emit(&mut self, regulation: &Regulation) -> Result<()> {
        tracing::debug!(
            chapters = regulation.chapters.len(),
            recitals = regulation.recitals.len(),
            citations = regulation.citations.len(),
            "emitting regulation"
        );

        self.emit_root(regulation);

        for chapter in &regulation.chapters {
            self.emit_chapter(chapter)?;
        }
        for recital in &regulation.recitals {
            self.emit_recital(recital)?;
        }
        for citation in &regulation.citations {
            self.emit_citation(citation)?;
        }

        Ok(())
    }

    /// The document root is a legal resource, not a subdivision.
    fn emit_root(&mut self, regulation: &Regulation) {
        let root = vocab::root_node();

        self.add_type(&root, eli::LEGAL_RESOURCE);
        self.add_literal(&root, eli::TITLE, &regulation.title);
        if let Some(abbrv) = &regulation.abbrv {
            self.add_literal(&root, eli::TITLE_ALTERNATIVE, abbrv);
        }
        if let Some(about) = &regulation.about {
            self.add_literal(&root, eli::DESCRIPTION, about);
        }
    }

    fn emit_chapter(&mut self, chapter: &Chapter) -> Result<()> {
        let id = format!("chapter{}", chapter.number);
        let node = self.register(&id)?;

        self.add_type(&node, gdprtext::CHAPTER);
        self.add_literal(&node, eli::NUMBER, &chapter.number);
        self.add_literal(
            &node,
            eli::TITLE_ALTERNATIVE,
            &format!("Chapter {}", chapter.number),
        );
        self.add_literal(&node, eli::TITLE, &chapter.title);
        self.add_literal(&node, eli::ID_LOCAL, &id);
        self.add_root_link(&node);

        let chapter_ancestor = Ancestor::new(&node, &chapter.number);
        match &chapter.contents {
            ChapterContents::Sections(sections) => {
                for section in sections {
                    self.emit_section(section, &chapter_ancestor)?;
                }
            }
            ChapterContents::Articles(articles) => {
                for article in articles {
                    self.emit_article(article, None, &chapter_ancestor)?;
                }
            }
        }

        Ok(())
    }

    fn emit_section(&mut self, section: &Section, chapter: &Ancestor) -> Result<()> {
        let id = format!("section{}", section.number);
        let node = self.register(&id)?;

        self.add_type(&node, gdprtext::SECTION);
        self.add_literal(&node, eli::NUMBER, &section.number);
        self.add_literal(
            &node,
            eli::TITLE_ALTERNATIVE,
            &format!("Section {}", section.number),
        );
        self.add_literal(&node, eli::TITLE, &section.title);
        self.add_literal(&node, eli::ID_LOCAL, &id);
        self.add_containment(&node, chapter, None, None, None);

        let section_ancestor = Ancestor::new(&node, &section.number);
        for article in &section.articles {
            self.emit_article(article, Some(&section_ancestor), chapter)?;
        }

        Ok(())
    }

    fn emit_article(
        &mut self,
        article: &Article,
        section: Option<&Ancestor>,
        chapter: &Ancestor,
    ) -> Result<()> {
        let id = format!("article{}", article.number);
        let node = self.register(&id)?;

        self.add_type(&node, gdprtext::ARTICLE);
        self.add_literal(&node, eli::NUMBER, &article.number);
        self.add_literal(
            &node,
            eli::TITLE_ALTERNATIVE,
            &format!("Article {}", article.number),
        );
        self.add_literal(&node, eli::ID_LOCAL, &id);
        self.add_containment(&node, chapter, section, None, None);

        let article_ancestor = Ancestor::new(&node, &article.number);
        // Synthetic numbering for unnumbered points restarts in every article.
        let mut unnumbered = 0usize;
        for point in &article.points {
            let number = match &point.number {
                Some(number) => number.clone(),
                None => {
                    unnumbered += 1;
                    unnumbered.to_string()
                }
            };
            self.emit_point(point, &number, &article_ancestor, section, chapter)?;
        }

        Ok(())
    }

    fn emit_point(
        &mut self,
        point: &Point,
        number: &str,
        article: &Ancestor,
        section: Option<&Ancestor>,
        chapter: &Ancestor,
    ) -> Result<()> {
        let id = format!("article{}-{number}", article.number);
        let node = self.register(&id)?;

        self.add_type(&node, gdprtext::POINT);
        self.add_literal(&node, eli::NUMBER, number);
        self.add_literal(
            &node,
            eli::TITLE_ALTERNATIVE,
            &format!("Article{}({number})", article.number),
        );
        self.add_literal(&node, eli::DESCRIPTION, &point.text);
        self.add_literal(&node, eli::ID_LOCAL, &id);
        self.add_containment(&node, chapter, section, Some(article), None);

        let point_ancestor = Ancestor::new(&node, number);
        let mut unnumbered = 0usize;
        for subpoint in &point.subpoints {
            let sub_number = match &subpoint.number {
                Some(number) => number.clone(),
                None => {
                    unnumbered += 1;
                    unnumbered.to_string()
                }
            };
            self.emit_subpoint(subpoint, &sub_number, &point_ancestor, article, section, chapter)?;
        }

        Ok(())
    }

    fn emit_subpoint(
        &mut self,
        subpoint: &SubPoint,
        number: &str,
        point: &Ancestor,
        article: &Ancestor,
        section: Option<&Ancestor>,
        chapter: &Ancestor,
    ) -> Result<()> {
        let id = format!("article{}-{}-{number}", article.number, point.number);
        let node = self.register(&id)?;

        self.add_type(&node, gdprtext::SUB_POINT);
        self.add_literal(&node, eli::NUMBER, number);
        self.add_literal(
            &node,
            eli::TITLE_ALTERNATIVE,
            &format!("Article{}({})({number})", article.number, point.number),
        );
        self.add_literal(&node, eli::DESCRIPTION, &subpoint.text);
        self.add_literal(&node, eli::ID_LOCAL, &id);
        self.add_containment(&node, chapter, section, Some(article), Some(point));

        Ok(())
    }

    fn emit_recital(&mut self, recital: &Recital) -> Result<()> {
        let id = format!("recital-{}", recital.number);
        let node = self.register(&id)?;

        self.add_type(&node, gdprtext::RECITAL);
        self.add_literal(&node, eli::NUMBER, &recital.number);
        self.add_literal(
            &node,
            eli::TITLE_ALTERNATIVE,
            &format!("Recital {}", recital.number),
        );
        self.add_literal(&node, eli::DESCRIPTION, &recital.text);
        self.add_literal(&node, eli::ID_LOCAL, &id);
        self.add_root_link(&node);

        Ok(())
    }

    fn emit_citation(&mut self, citation: &Citation) -> Result<()> {
        let id = format!("citation-{}", citation.number);
        let node = self.register(&id)?;

        self.add_type(&node, gdprtext::CITATION);
        self.add_literal(&node, eli::NUMBER, &citation.number);
        self.add_literal(
            &node,
            eli::TITLE_ALTERNATIVE,
            &format!("Citation {}", citation.number),
        );
        self.add_literal(&node, eli::DESCRIPTION, &citation.text);
        self.add_literal(&node, eli::ID_LOCAL, &id);
        self.add_root_link(&node);

        Ok(())
    }

    /// Mint the node for an identifier, enforcing graph-wide uniqueness.
    fn register(&mut self, id: &str) -> Result<NamedNode> {
        if self.ids.contains_key(id) {
            return Err(GeneratorError::DuplicateIdentifier(id.to_string()));
        }
        let node = vocab::text_node(id)?;
        self.ids.insert(id.to_string(), node.clone());
        Ok(node)
    }

    /// Both containment edge sets for every present ancestor, plus the root.
    fn add_containment(
        &mut self,
        node: &NamedNode,
        chapter: &Ancestor,
        section: Option<&Ancestor>,
        article: Option<&Ancestor>,
        point: Option<&Ancestor>,
    ) {
        self.add_root_link(node);
        self.add_link(node, eli::IS_PART_OF, &chapter.node);
        self.add_link(node, gdprtext::IS_PART_OF_CHAPTER, &chapter.node);
        if let Some(section) = section {
            self.add_link(node, eli::IS_PART_OF, &section.node);
            self.add_link(node, gdprtext::IS_PART_OF_SECTION, &section.node);
        }
        if let Some(article) = article {
            self.add_link(node, eli::IS_PART_OF, &article.node);
            self.add_link(node, gdprtext::IS_PART_OF_ARTICLE, &article.node);
        }
        if let Some(point) = point {
            self.add_link(node, eli::IS_PART_OF, &point.node);
            self.add_link(node, gdprtext::IS_PART_OF_POINT, &point.node);
        }
    }

    fn add_type(&mut self, subject: &NamedNode, class: NamedNodeRef<'_>) {
        self.graph
            .insert(TripleRef::new(subject.as_ref(), rdf::TYPE, class));
    }

    fn add_literal(&mut self, subject: &NamedNode, predicate: NamedNodeRef<'_>, value: &str) {
        let object = Literal::new_simple_literal(value);
        self.graph
            .insert(TripleRef::new(subject.as_ref(), predicate, object.as_ref()));
    }

    fn add_link(&mut self, subject: &NamedNode, predicate: NamedNodeRef<'_>, object: &NamedNode) {
        self.graph
            .insert(TripleRef::new(subject.as_ref(), predicate, object.as_ref()));
    }

    fn add_root_link(&mut self, subject: &NamedNode) {
        self.graph
            .insert(TripleRef::new(subject.as_ref(), eli::IS_PART_OF, gdpr::ROOT));
    }
}
