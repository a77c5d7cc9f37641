mod answer;
mod conversation;
mod query;
mod ranked;
mod relevance;
mod section;

pub use answer::AnswerOutcome;
pub use conversation::{ChatMessage, Conversation, Role};
pub use query::Query;
pub use ranked::RankedSection;
pub use relevance::Relevance;
pub use section::Section;
