//! JSON parsing for the two corpus files.
//!
//! Sections come in two shapes: a bare paragraph list (`"§ 1": ["..."]`) or
//! an object with `paragraphs`, optional `law`, and optional `tags`.

use std::path::Path;

use lexis_core::errors::CorpusError;
use lexis_core::models::Section;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize)]
#[serde(untagged)]
enum SectionRecord {
    Paragraphs(Vec<String>),
    Detailed {
        #[serde(alias = "content")]
        paragraphs: Vec<String>,
        #[serde(default, alias = "law_name")]
        law: Option<String>,
        #[serde(default)]
        tags: Vec<String>,
    },
}

impl SectionRecord {
    fn into_section(self, id: String) -> Section {
        match self {
            Self::Paragraphs(paragraphs) => Section::new(id, paragraphs),
            Self::Detailed {
                paragraphs,
                law,
                tags,
            } => Section {
                id,
                paragraphs,
                law,
                tags,
            },
        }
    }
}

/// Read a file into a string, tagging failures with the path.
pub fn read_file(path: &Path) -> Result<String, CorpusError> {
    std::fs::read_to_string(path).map_err(|e| CorpusError::FileRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn parse_object(raw: &str, path: &str) -> Result<Map<String, Value>, CorpusError> {
    serde_json::from_str(raw).map_err(|e| CorpusError::Parse {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// Parse the embeddings object, keeping the key order of the file.
pub fn parse_embeddings(raw: &str, path: &str) -> Result<Vec<(String, Vec<f32>)>, CorpusError> {
    parse_object(raw, path)?
        .into_iter()
        .map(|(id, value)| match serde_json::from_value::<Vec<f32>>(value) {
            Ok(vector) => Ok((id, vector)),
            Err(e) => Err(CorpusError::Parse {
                path: path.to_string(),
                reason: format!("{id}: {e}"),
            }),
        })
        .collect()
}

/// Parse the sections object, keeping the key order of the file.
pub fn parse_sections(raw: &str, path: &str) -> Result<Vec<Section>, CorpusError> {
    parse_object(raw, path)?
        .into_iter()
        .map(|(id, value)| match serde_json::from_value::<SectionRecord>(value) {
            Ok(record) => Ok(record.into_section(id)),
            Err(e) => Err(CorpusError::Parse {
                path: path.to_string(),
                reason: format!("{id}: {e}"),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeddings_keep_file_order() {
        let raw = r#"{"§ 9": [0.0, 1.0], "§ 1": [1.0, 0.0], "§ 5": [0.5, 0.5]}"#;
        let parsed = parse_embeddings(raw, "e.json").unwrap();
        let ids: Vec<_> = parsed.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["§ 9", "§ 1", "§ 5"]);
    }

    #[test]
    fn embeddings_reject_non_numeric_vector() {
        let raw = r#"{"§ 1": ["a", "b"]}"#;
        let err = parse_embeddings(raw, "e.json").unwrap_err();
        assert!(err.to_string().contains("§ 1"));
    }

    #[test]
    fn embeddings_reject_non_object_root() {
        let err = parse_embeddings("[1, 2, 3]", "e.json").unwrap_err();
        assert!(matches!(err, CorpusError::Parse { .. }));
    }

    #[test]
    fn sections_accept_plain_paragraph_lists() {
        let raw = r#"{"§ 1": ["Satz eins.", "Satz zwei."]}"#;
        let sections = parse_sections(raw, "s.json").unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "§ 1");
        assert_eq!(sections[0].content(), "Satz eins. Satz zwei.");
        assert!(sections[0].law.is_none());
        assert!(sections[0].tags.is_empty());
    }

    #[test]
    fn sections_accept_detailed_records() {
        let raw = r#"{
            "§ 1": {"paragraphs": ["Text."], "law": "StWG", "tags": ["Directly Applicable: Assembly"]},
            "§ 2": {"content": ["Mehr."], "law_name": "GemG"}
        }"#;
        let sections = parse_sections(raw, "s.json").unwrap();
        assert_eq!(sections[0].law.as_deref(), Some("StWG"));
        assert_eq!(sections[0].tags, ["Directly Applicable: Assembly"]);
        assert_eq!(sections[1].law.as_deref(), Some("GemG"));
        assert_eq!(sections[1].paragraphs, ["Mehr."]);
    }

    #[test]
    fn sections_reject_records_without_paragraphs() {
        let raw = r#"{"§ 1": {"law": "StWG"}}"#;
        assert!(parse_sections(raw, "s.json").is_err());
    }
}
