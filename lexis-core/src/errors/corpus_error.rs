/// Corpus loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("inconsistent embedding dimensions: {id} has {actual}, expected {expected}")]
    InconsistentDimensions {
        id: String,
        expected: usize,
        actual: usize,
    },
}
