/// Number of sections handed to the composer.
pub const TOP_K: usize = 5;

/// Output dimensions of `text-embedding-ada-002`.
pub const ADA_002_DIMENSIONS: usize = 1536;

/// Placeholder printed when a section carries no law name.
pub const UNKNOWN_LAW: &str = "Unbekanntes Gesetz";

/// Prefix of the tag that marks a section as directly applicable to a category.
pub const DIRECTLY_APPLICABLE_PREFIX: &str = "Directly Applicable: ";
