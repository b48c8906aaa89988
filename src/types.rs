//! Core data types for the generator.
//!
//! These types model the structured JSON rendition of the GDPR text:
//! chapters containing either sections or articles (never both), articles
//! containing points and subpoints, plus the flat recital and citation
//! collections.

use serde::{Deserialize, Deserializer};

/// The complete regulation: document root plus all structural nodes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Regulation {
    /// Full title of the regulation.
    pub title: String,

    /// Abbreviated title (e.g., "GDPR").
    #[serde(default)]
    pub abbrv: Option<String>,

    /// Official regulation number (e.g., "2016/679").
    #[serde(default)]
    pub regulation: Option<String>,

    /// Date of adoption.
    #[serde(default)]
    pub dated: Option<String>,

    /// Date of last correction.
    #[serde(default)]
    pub updated: Option<String>,

    /// Subject-matter description.
    #[serde(default)]
    pub about: Option<String>,

    /// Official Journal identifier (e.g., "L 119/1").
    #[serde(default)]
    pub identifier: Option<String>,

    /// Language code of this rendition.
    #[serde(default)]
    pub language: Option<String>,

    /// Chapters in document order.
    pub chapters: Vec<Chapter>,

    /// Recitals in document order.
    #[serde(default)]
    pub recitals: Vec<Recital>,

    /// Citations (references) in document order.
    #[serde(default)]
    pub citations: Vec<Citation>,
}

/// A chapter of the regulation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Chapter {
    /// Chapter number as it appears in the text (e.g., "I", "VIII").
    pub number: String,

    /// Chapter title.
    pub title: String,

    /// Sections or articles, never mixed.
    pub contents: ChapterContents,
}

/// The body of a chapter: sections or articles, decided per chapter.
///
/// The source JSON tags each child with a `type` field; deserialization
/// rejects chapters whose children mix both kinds and chapters with no
/// children at all, so downstream code never re-checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterContents {
    /// Chapter is divided into sections.
    Sections(Vec<Section>),
    /// Chapter holds articles directly.
    Articles(Vec<Article>),
}

/// Tagged child used only during deserialization of chapter contents.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ChapterItem {
    Section(Section),
    Article(Article),
}

impl<'de> Deserialize<'de> for ChapterContents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let items = Vec::<ChapterItem>::deserialize(deserializer)?;

        let mut iter = items.into_iter();
        let mut contents = match iter.next() {
            Some(ChapterItem::Section(section)) => Self::Sections(vec![section]),
            Some(ChapterItem::Article(article)) => Self::Articles(vec![article]),
            None => return Err(D::Error::custom("chapter contents must not be empty")),
        };

        for item in iter {
            match (&mut contents, item) {
                (Self::Sections(sections), ChapterItem::Section(section)) => {
                    sections.push(section);
                }
                (Self::Articles(articles), ChapterItem::Article(article)) => {
                    articles.push(article);
                }
                _ => {
                    return Err(D::Error::custom(
                        "chapter contents must be all sections or all articles, not a mix",
                    ));
                }
            }
        }

        Ok(contents)
    }
}

impl ChapterContents {
    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Sections(sections) => sections.len(),
            Self::Articles(articles) => articles.len(),
        }
    }

    /// Whether the chapter body is empty (never true for deserialized input).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A section within a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Section {
    /// Section number as it appears in the text.
    pub number: String,

    /// Section title.
    pub title: String,

    /// Articles in this section, in document order.
    #[serde(rename = "contents")]
    pub articles: Vec<Article>,
}

/// An article, inside a section or directly inside a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    /// Article number as it appears in the text.
    pub number: String,

    /// Points in this article, in document order.
    #[serde(rename = "contents")]
    pub points: Vec<Point>,
}

/// A point within an article.
///
/// Unnumbered points exist in the source text; they receive a synthetic
/// sequential number during emission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Point {
    /// Declared point number, absent for plain text paragraphs.
    #[serde(default)]
    pub number: Option<String>,

    /// Text of the point.
    pub text: String,

    /// Subpoints in this point, in document order.
    #[serde(default)]
    pub subpoints: Vec<SubPoint>,
}

/// A subpoint within a point.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubPoint {
    /// Declared subpoint number, absent for unmarked items.
    #[serde(default)]
    pub number: Option<String>,

    /// Text of the subpoint.
    pub text: String,
}

/// A recital: flat, numbered, attached directly to the document root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recital {
    /// Recital number.
    pub number: String,

    /// Text of the recital.
    pub text: String,
}

/// A citation (footnoted reference), flat like recitals.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Citation {
    /// Citation number.
    pub number: String,

    /// Text of the citation.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chapter_with_articles() {
        let json = r#"{
            "number": "I",
            "title": "General provisions",
            "contents": [
                {"type": "article", "number": "1", "contents": []},
                {"type": "article", "number": "2", "contents": []}
            ]
        }"#;

        let chapter: Chapter = serde_json::from_str(json).unwrap();
        assert_eq!(chapter.number, "I");
        let ChapterContents::Articles(articles) = &chapter.contents else {
            panic!("expected articles");
        };
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].number, "1");
    }

    #[test]
    fn test_chapter_with_sections() {
        let json = r#"{
            "number": "IV",
            "title": "Controller and processor",
            "contents": [
                {"type": "section", "number": "1", "title": "General obligations", "contents": [
                    {"type": "article", "number": "24", "contents": []}
                ]}
            ]
        }"#;

        let chapter: Chapter = serde_json::from_str(json).unwrap();
        let ChapterContents::Sections(sections) = &chapter.contents else {
            panic!("expected sections");
        };
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "General obligations");
        assert_eq!(sections[0].articles[0].number, "24");
    }

    #[test]
    fn test_chapter_mixed_contents_rejected() {
        let json = r#"{
            "number": "I",
            "title": "Mixed",
            "contents": [
                {"type": "article", "number": "1", "contents": []},
                {"type": "section", "number": "1", "title": "S", "contents": []}
            ]
        }"#;

        let err = serde_json::from_str::<Chapter>(json).unwrap_err();
        assert!(err.to_string().contains("not a mix"), "got: {err}");
    }

    #[test]
    fn test_chapter_empty_contents_rejected() {
        let json = r#"{"number": "I", "title": "Empty", "contents": []}"#;

        let err = serde_json::from_str::<Chapter>(json).unwrap_err();
        assert!(err.to_string().contains("must not be empty"), "got: {err}");
    }

    #[test]
    fn test_point_without_number() {
        let json = r#"{"number": null, "text": "This Regulation lays down rules.", "type": "text", "subpoints": []}"#;

        let point: Point = serde_json::from_str(json).unwrap();
        assert_eq!(point.number, None);
        assert!(point.subpoints.is_empty());
    }

    #[test]
    fn test_point_missing_text_rejected() {
        let json = r#"{"number": "1", "subpoints": []}"#;
        assert!(serde_json::from_str::<Point>(json).is_err());
    }

    #[test]
    fn test_regulation_minimal() {
        let json = r#"{
            "title": "General Data Protection Regulation",
            "chapters": [
                {"number": "I", "title": "General provisions", "contents": [
                    {"type": "article", "number": "1", "contents": [
                        {"number": "1", "text": "Some text.", "subpoints": [
                            {"number": "a", "text": "a subpoint."}
                        ]}
                    ]}
                ]}
            ]
        }"#;

        let regulation: Regulation = serde_json::from_str(json).unwrap();
        assert_eq!(regulation.title, "General Data Protection Regulation");
        assert_eq!(regulation.abbrv, None);
        assert!(regulation.recitals.is_empty());
        assert!(regulation.citations.is_empty());
        assert_eq!(regulation.chapters[0].contents.len(), 1);
    }

    #[test]
    fn test_regulation_metadata_fields() {
        let json = r#"{
            "title": "General Data Protection Regulation",
            "abbrv": "GDPR",
            "regulation": "2016/679",
            "dated": "27/04/2016",
            "identifier": "L 119/1",
            "language": "EN",
            "chapters": [
                {"number": "I", "title": "T", "contents": [
                    {"type": "article", "number": "1", "contents": []}
                ]}
            ],
            "recitals": [{"number": "1", "text": "Whereas...", "type": "recital"}],
            "citations": [{"number": "1", "text": "OJ C 229.", "type": "citation"}]
        }"#;

        let regulation: Regulation = serde_json::from_str(json).unwrap();
        assert_eq!(regulation.abbrv.as_deref(), Some("GDPR"));
        assert_eq!(regulation.regulation.as_deref(), Some("2016/679"));
        assert_eq!(regulation.recitals.len(), 1);
        assert_eq!(regulation.citations[0].number, "1");
    }
}
