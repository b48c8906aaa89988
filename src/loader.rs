//! Input loading for the generator.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::types::Regulation;

/// Load a regulation document from a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON document (the `gdpr.json` shape)
///
/// # Errors
/// Returns `GeneratorError::Io` if the file cannot be read and
/// `GeneratorError::Json` if the document is malformed.
pub fn load_regulation(path: &Path) -> Result<Regulation> {
    let file = File::open(path)?;
    let regulation: Regulation = serde_json::from_reader(BufReader::new(file))?;

    tracing::debug!(
        chapters = regulation.chapters.len(),
        recitals = regulation.recitals.len(),
        citations = regulation.citations.len(),
        "loaded regulation document"
    );

    Ok(regulation)
}

/// Parse a regulation document from a JSON string.
///
/// # Errors
/// Returns `GeneratorError::Json` if the document is malformed.
pub fn parse_regulation(json: &str) -> Result<Regulation> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_regulation_missing_file() {
        let err = load_regulation(Path::new("/nonexistent/gdpr.json")).unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_load_regulation_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title": "T", "chapters": [{{"number": "I", "title": "C", "contents": [
                {{"type": "article", "number": "1", "contents": []}}
            ]}}]}}"#
        )
        .unwrap();

        let regulation = load_regulation(file.path()).unwrap();
        assert_eq!(regulation.title, "T");
        assert_eq!(regulation.chapters.len(), 1);
    }

    #[test]
    fn test_parse_regulation_malformed() {
        let err = parse_regulation("{\"title\": \"T\"}").unwrap_err();
        assert!(err.to_string().contains("JSON parsing failed"));
    }
}
