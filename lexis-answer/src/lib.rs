//! # lexis-answer
//!
//! Sends a composed prompt to a chat-completion model and returns its reply.
//! One request per call; failures are errors, empty replies are `None`.

pub mod providers;

pub use providers::{build_conversation, create_client, OpenAiChatClient};
