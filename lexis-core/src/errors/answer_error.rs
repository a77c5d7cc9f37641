/// Answering client errors.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("answer request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("malformed answer response: {reason}")]
    MalformedResponse { reason: String },

    #[error("missing credential: set {env_var}")]
    MissingCredential { env_var: String },

    #[error("unknown answer provider: {provider}")]
    UnknownProvider { provider: String },
}
