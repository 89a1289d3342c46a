//! MediaWiki action API response shapes (`formatversion=2`).

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Response of `action=query&list=search`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Query payload; absent when the search produced nothing
    #[serde(default)]
    pub query: Option<SearchQuery>,
}

/// `query` object of a search response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Ranked hits
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SearchHit {
    /// Page title
    title: String,
}

impl SearchHit {
    /// Create a hit for `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl SearchResponse {
    /// Titles in ranking order.
    pub fn titles(&self) -> Vec<String> {
        self.query
            .as_ref()
            .map(|q| q.search.iter().map(|hit| hit.title.clone()).collect())
            .unwrap_or_default()
    }
}

/// Response of `action=query&prop=extracts`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractResponse {
    /// Query payload
    #[serde(default)]
    pub query: Option<ExtractQuery>,
}

/// `query` object of an extracts response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractQuery {
    /// Pages, in no particular order
    #[serde(default)]
    pub pages: Vec<ExtractPage>,
}

/// A page with its plain-text intro extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ExtractPage {
    /// Page title (after redirect resolution)
    title: String,
    /// Plain-text intro, missing for special or absent pages
    #[serde(default)]
    extract: Option<String>,
}

impl ExtractPage {
    /// Create a page with an extract.
    pub fn new(title: impl Into<String>, extract: Option<String>) -> Self {
        Self {
            title: title.into(),
            extract,
        }
    }
}

impl ExtractResponse {
    /// The returned pages.
    pub fn pages(&self) -> &[ExtractPage] {
        self.query.as_ref().map(|q| q.pages.as_slice()).unwrap_or(&[])
    }
}
