//! Section identifiers and the ordered section list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, PortfolioError};

/// Id of the optional leading section, present only with featured projects
pub const FEATURED_SECTION: &str = "featured-projects";

/// Sections that are always present, in page order
pub const BASE_SECTIONS: [&str; 6] = ["projects", "experience", "skills", "how", "theme", "contact"];

/// Identifier for one scrollable page region
///
/// Matches the DOM `id` of the section element and the URL fragment that
/// deep-links to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    /// Create a SectionId, rejecting empty ids
    pub fn new(id: impl Into<String>) -> CoreResult<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Err(PortfolioError::InvalidSectionId(id));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Parse a URL fragment such as `#projects`.
    ///
    /// Returns `None` for an empty fragment or a bare `#`.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let id = fragment.trim().trim_start_matches('#');
        Self::new(id).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL fragment for history updates
    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SectionId {
    type Error = PortfolioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        id.0
    }
}

impl TryFrom<&str> for SectionId {
    type Error = PortfolioError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Ordered, duplicate-free list of sections.
///
/// Order is registration order; it decides the initial selection and breaks
/// visibility ties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionList(Vec<SectionId>);

impl SectionList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build from ids, keeping the first occurrence of duplicates
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = SectionId>,
    {
        let mut list = Self::new();
        for id in ids {
            list.push(id);
        }
        list
    }

    /// Parse string ids, skipping invalid ones
    pub fn parse<'a, I>(ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_ids(ids.into_iter().filter_map(|id| SectionId::new(id).ok()))
    }

    /// Append `id` unless already present. Returns whether it was added.
    pub fn push(&mut self, id: SectionId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn contains(&self, id: &SectionId) -> bool {
        self.0.iter().any(|s| s == id)
    }

    /// Registration index of `id`
    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.0.iter().position(|s| s == id)
    }

    /// Look up a configured section by its string id
    pub fn find(&self, id: &str) -> Option<&SectionId> {
        self.0.iter().find(|s| s.as_str() == id)
    }

    pub fn first(&self) -> Option<&SectionId> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectionId> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a SectionList {
    type Item = &'a SectionId;
    type IntoIter = std::slice::Iter<'a, SectionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The page's navigation sections.
///
/// The featured section leads the list only when there is something to
/// feature.
pub fn page_sections(has_featured: bool) -> SectionList {
    let leading = has_featured.then_some(FEATURED_SECTION);
    SectionList::parse(leading.into_iter().chain(BASE_SECTIONS))
}
