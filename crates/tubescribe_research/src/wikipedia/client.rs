//! Wikipedia lookup client.

use super::dto::{ExtractPage, ExtractResponse, SearchResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};
use tubescribe_error::{ResearchError, ResearchErrorKind, ResearchResult, TubescribeResult};
use tubescribe_interface::ReferenceSource;

/// Text returned when the search finds no page with an extract.
pub const NO_RESULTS: &str = "No good Wikipedia Search Result was found";

/// Wikipedia client: search the topic, then fetch intro extracts for the
/// top hits.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: Client,
    api_url: String,
    top_k_results: u32,
}

impl WikipediaClient {
    /// Creates a client against a MediaWiki `api.php` endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all)]
    pub fn new(
        api_url: impl Into<String>,
        top_k_results: u32,
        user_agent: &str,
        timeout: Duration,
    ) -> ResearchResult<Self> {
        let api_url = api_url.into();
        debug!(url = %api_url, top_k_results, "Creating Wikipedia client");

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ResearchError::new(ResearchErrorKind::Http(e.to_string())))?;

        Ok(Self {
            client,
            api_url,
            top_k_results: top_k_results.max(1),
        })
    }

    /// The `api.php` endpoint for a language edition, e.g. `en`.
    pub fn endpoint_for_language(language: &str) -> String {
        format!("https://{}.wikipedia.org/w/api.php", language)
    }

    async fn query<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> ResearchResult<T> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                ResearchError::new(ResearchErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ResearchError::new(ResearchErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        response
            .json()
            .await
            .map_err(|e| ResearchError::new(ResearchErrorKind::ResponseParsing(e.to_string())))
    }

    async fn search(&self, topic: &str) -> ResearchResult<Vec<String>> {
        let limit = self.top_k_results.to_string();
        let response: SearchResponse = self
            .query(&[("list", "search"), ("srsearch", topic), ("srlimit", limit.as_str())])
            .await?;
        Ok(response.titles())
    }

    async fn extracts(&self, titles: &[String]) -> ResearchResult<Vec<ExtractPage>> {
        let joined = titles.join("|");
        let response: ExtractResponse = self
            .query(&[
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", joined.as_str()),
            ])
            .await?;
        Ok(response.pages().to_vec())
    }

    async fn research(&self, topic: &str) -> ResearchResult<String> {
        let titles = self.search(topic).await?;
        debug!(hits = titles.len(), "Wikipedia search complete");

        if titles.is_empty() {
            return Ok(NO_RESULTS.to_string());
        }

        let pages = self.extracts(&titles).await?;
        Ok(format_research(&titles, &pages))
    }
}

/// Render pages as `Page: {title}\nSummary: {extract}` blocks separated by a
/// blank line, in search ranking order.
///
/// Pages without an extract are dropped; pages the search did not rank keep
/// their response order after the ranked ones. Returns [`NO_RESULTS`] when
/// nothing remains.
///
/// # Examples
///
/// ```
/// use tubescribe_research::{ExtractPage, format_research};
///
/// let pages = vec![ExtractPage::new("Rust", Some("A language.".to_string()))];
/// let text = format_research(&["Rust".to_string()], &pages);
/// assert_eq!(text, "Page: Rust\nSummary: A language.");
/// ```
pub fn format_research(ranked_titles: &[String], pages: &[ExtractPage]) -> String {
    let rank = |page: &ExtractPage| {
        ranked_titles
            .iter()
            .position(|t| t == page.title())
            .unwrap_or(ranked_titles.len())
    };

    let mut with_text: Vec<&ExtractPage> = pages
        .iter()
        .filter(|p| p.extract().as_deref().is_some_and(|e| !e.trim().is_empty()))
        .collect();
    with_text.sort_by_key(|p| rank(*p));

    if with_text.is_empty() {
        return NO_RESULTS.to_string();
    }

    with_text
        .iter()
        .map(|p| {
            format!(
                "Page: {}\nSummary: {}",
                p.title(),
                p.extract().as_deref().unwrap_or_default().trim()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[async_trait]
impl ReferenceSource for WikipediaClient {
    #[instrument(skip(self), fields(source = "wikipedia"))]
    async fn lookup(&self, topic: &str) -> TubescribeResult<String> {
        self.research(topic).await.map_err(Into::into)
    }

    fn source_name(&self) -> &'static str {
        "wikipedia"
    }
}
