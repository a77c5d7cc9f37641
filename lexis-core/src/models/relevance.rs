use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DIRECTLY_APPLICABLE_PREFIX;

/// Coarse classification narrowing which sections apply to a question.
///
/// Deserializes through [`Relevance::parse`], so unknown strings become
/// `General` just like on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Relevance {
    #[serde(rename = "assembly")]
    Assembly,
    #[serde(rename = "mail-voting")]
    MailVoting,
    /// No category selected. Every section is a candidate.
    #[default]
    #[serde(rename = "none")]
    General,
}

impl Relevance {
    pub const ALL: [Relevance; 3] = [Self::Assembly, Self::MailVoting, Self::General];

    /// Lenient parse. Anything unrecognized is `General`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "assembly" => Self::Assembly,
            "mail-voting" | "mailvoting" => Self::MailVoting,
            _ => Self::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assembly => "assembly",
            Self::MailVoting => "mail-voting",
            Self::General => "none",
        }
    }

    /// Substring a tag must contain for a section to pass the filter.
    pub fn tag_marker(&self) -> Option<&'static str> {
        match self {
            Self::Assembly => Some("Assembly"),
            Self::MailVoting => Some("Mail Voting"),
            Self::General => None,
        }
    }

    /// Tag marking a section as directly applicable, e.g. `"Directly Applicable: Assembly"`.
    pub fn directly_applicable_marker(&self) -> Option<String> {
        self.tag_marker()
            .map(|marker| format!("{DIRECTLY_APPLICABLE_PREFIX}{marker}"))
    }
}

impl FromStr for Relevance {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for Relevance {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for Relevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
