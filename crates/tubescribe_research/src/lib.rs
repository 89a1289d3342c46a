//! Encyclopedia lookup adapters for Tubescribe.
//!
//! Every adapter implements [`tubescribe_interface::ReferenceSource`]. The
//! adapters are stateless: nothing is cached between lookups.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod wikipedia;

pub use wikipedia::{
    ExtractPage, ExtractQuery, ExtractResponse, NO_RESULTS, SearchHit, SearchQuery,
    SearchResponse, WikipediaClient, format_research,
};
