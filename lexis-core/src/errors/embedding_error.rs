/// Embedding subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("malformed embedding response: {reason}")]
    MalformedResponse { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("missing credential: set {env_var}")]
    MissingCredential { env_var: String },

    #[error("unknown embedding provider: {provider}")]
    UnknownProvider { provider: String },
}
