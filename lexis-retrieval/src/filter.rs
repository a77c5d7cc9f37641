//! Relevance filter: narrows the candidate sections to a category.
//!
//! Matching is substring containment against the category marker, so
//! `"Directly Applicable: Assembly"` matches `Assembly`. A tag such as
//! `"Non-Assembly-Related"` also matches; that is current behavior.

use lexis_core::models::{Relevance, Section};

/// Whether `section` belongs to `relevance`. `General` accepts everything.
pub fn matches(section: &Section, relevance: Relevance) -> bool {
    match relevance.tag_marker() {
        Some(marker) => section.has_tag_containing(marker),
        None => true,
    }
}

/// Keep the sections that belong to `relevance`, preserving order.
pub fn filter<'a, I>(sections: I, relevance: Relevance) -> Vec<&'a Section>
where
    I: IntoIterator<Item = &'a Section>,
{
    sections
        .into_iter()
        .filter(|s| matches(s, relevance))
        .collect()
}

/// Whether `section` carries the "Directly Applicable: <category>" tag.
pub fn is_directly_applicable(section: &Section, relevance: Relevance) -> bool {
    relevance
        .directly_applicable_marker()
        .is_some_and(|marker| section.has_tag_containing(&marker))
}
