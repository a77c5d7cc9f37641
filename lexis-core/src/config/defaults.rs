// Single source of truth for all default values.

// --- Corpus ---
pub const DEFAULT_EMBEDDINGS_PATH: &str = "article_embeddings.json";
pub const DEFAULT_SECTIONS_PATH: &str = "law_data.json";

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "openai";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = crate::constants::ADA_002_DIMENSIONS;
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 256;

// --- Answering ---
pub const DEFAULT_ANSWER_PROVIDER: &str = "openai";
pub const DEFAULT_ANSWER_MODEL: &str = "gpt-4-1106-preview";
pub const DEFAULT_ANSWER_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "Du bist eine Gesetzessumptionsmaschiene. Du beantwortest alle Fragen auf Deutsch.";

// --- Shared provider settings ---
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = crate::constants::TOP_K;
pub const DEFAULT_RELEVANCE_AWARE: bool = true;
pub const DEFAULT_TITLE_PREFIX: bool = true;
pub const DEFAULT_MAX_PROMPT_TOKENS: usize = 6_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
