//! Wikipedia (MediaWiki action API) adapter.

mod client;
mod dto;

pub use client::{NO_RESULTS, WikipediaClient, format_research};
pub use dto::{ExtractPage, ExtractQuery, ExtractResponse, SearchHit, SearchQuery, SearchResponse};
