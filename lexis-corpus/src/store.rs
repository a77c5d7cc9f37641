//! CorpusStore: the immutable, process-wide statute corpus.

use std::collections::HashMap;
use std::path::Path;

use lexis_core::config::CorpusConfig;
use lexis_core::errors::{CorpusError, LexisResult};
use lexis_core::models::Section;
use tracing::{info, warn};

use crate::loader;

/// A precomputed embedding for one section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionEmbedding {
    pub id: String,
    pub vector: Vec<f32>,
}

/// Read-only corpus. Embeddings keep the order of the source file, which is
/// the tie-break order for ranking.
#[derive(Debug, Clone, Default)]
pub struct CorpusStore {
    embeddings: Vec<SectionEmbedding>,
    sections: Vec<Section>,
    index: HashMap<String, usize>,
    dimensions: usize,
}

impl CorpusStore {
    /// Load both corpus files named in the config.
    pub fn load(config: &CorpusConfig) -> LexisResult<Self> {
        Self::load_files(&config.embeddings_path, &config.sections_path)
    }

    pub fn load_files(
        embeddings_path: impl AsRef<Path>,
        sections_path: impl AsRef<Path>,
    ) -> LexisResult<Self> {
        let embeddings_path = embeddings_path.as_ref();
        let sections_path = sections_path.as_ref();

        let embeddings = loader::parse_embeddings(
            &loader::read_file(embeddings_path)?,
            &embeddings_path.display().to_string(),
        )?;
        let sections = loader::parse_sections(
            &loader::read_file(sections_path)?,
            &sections_path.display().to_string(),
        )?;

        let store = Self::from_parts(embeddings, sections)?;
        info!(
            embeddings = store.embeddings.len(),
            sections = store.sections.len(),
            dims = store.dimensions,
            "corpus loaded"
        );
        Ok(store)
    }

    /// Build a store from already-parsed parts.
    ///
    /// # Errors
    /// Returns `InconsistentDimensions` if the vectors differ in length.
    pub fn from_parts(
        embeddings: Vec<(String, Vec<f32>)>,
        sections: Vec<Section>,
    ) -> Result<Self, CorpusError> {
        let dimensions = embeddings.first().map(|(_, v)| v.len()).unwrap_or(0);
        if let Some((id, v)) = embeddings.iter().find(|(_, v)| v.len() != dimensions) {
            return Err(CorpusError::InconsistentDimensions {
                id: id.clone(),
                expected: dimensions,
                actual: v.len(),
            });
        }

        let mut index = HashMap::with_capacity(sections.len());
        for (i, section) in sections.iter().enumerate() {
            if index.insert(section.id.clone(), i).is_some() {
                warn!(id = %section.id, "duplicate section id, last entry wins");
            }
        }

        let store = Self {
            embeddings: embeddings
                .into_iter()
                .map(|(id, vector)| SectionEmbedding { id, vector })
                .collect(),
            sections,
            index,
            dimensions,
        };

        let missing = store.missing_sections();
        if !missing.is_empty() {
            warn!(
                count = missing.len(),
                first = missing[0],
                "embeddings without section text; their content will be empty"
            );
        }

        Ok(store)
    }

    /// Embeddings in file order.
    pub fn embeddings(&self) -> &[SectionEmbedding] {
        &self.embeddings
    }

    /// Sections in file order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.index.get(id).map(|&i| &self.sections[i])
    }

    /// Space-joined paragraphs, or an empty string for an unknown id.
    pub fn content_of(&self, id: &str) -> String {
        self.section(id).map(Section::content).unwrap_or_default()
    }

    /// Embedding ids with no matching section.
    pub fn missing_sections(&self) -> Vec<&str> {
        self.embeddings
            .iter()
            .filter(|e| !self.index.contains_key(&e.id))
            .map(|e| e.id.as_str())
            .collect()
    }

    /// Vector length shared by every embedding (0 for an empty corpus).
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CorpusStore {
        CorpusStore::from_parts(
            vec![
                ("§1".to_string(), vec![1.0, 0.0]),
                ("§2".to_string(), vec![0.0, 1.0]),
                ("§3".to_string(), vec![1.0, 1.0]),
            ],
            vec![
                Section::new("§1", vec!["a".into(), "b".into()]),
                Section::new("§2", vec!["c".into()]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn lookup_by_id() {
        let s = store();
        assert_eq!(s.section("§2").map(|x| x.paragraphs.len()), Some(1));
        assert!(s.section("§9").is_none());
    }

    #[test]
    fn content_miss_is_empty() {
        let s = store();
        assert_eq!(s.content_of("§1"), "a b");
        assert_eq!(s.content_of("§3"), "");
    }

    #[test]
    fn reports_missing_sections() {
        assert_eq!(store().missing_sections(), ["§3"]);
    }

    #[test]
    fn rejects_mixed_dimensions() {
        let err = CorpusStore::from_parts(
            vec![
                ("§1".to_string(), vec![1.0, 0.0]),
                ("§2".to_string(), vec![1.0]),
            ],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CorpusError::InconsistentDimensions {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn empty_corpus_is_valid() {
        let s = CorpusStore::from_parts(vec![], vec![]).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.dimensions(), 0);
    }
}
