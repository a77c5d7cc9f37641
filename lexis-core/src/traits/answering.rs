use crate::errors::LexisResult;
use crate::models::Conversation;

/// Language-model client that turns a conversation into answer text.
pub trait IAnsweringClient: Send + Sync {
    /// Submit the conversation once.
    ///
    /// `Ok(None)` means the model responded without usable content.
    fn answer(&self, conversation: &Conversation) -> LexisResult<Option<String>>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
