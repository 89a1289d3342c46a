//! Live tests against Wikipedia.
//!
//! Run with `cargo test -p tubescribe_research --features api`.

use std::time::Duration;
use tubescribe_interface::ReferenceSource;
use tubescribe_research::{NO_RESULTS, WikipediaClient};

fn client() -> WikipediaClient {
    WikipediaClient::new(
        WikipediaClient::endpoint_for_language("en"),
        3,
        "tubescribe-tests/0.1 (https://github.com/tubescribe/tubescribe)",
        Duration::from_secs(30),
    )
    .expect("client")
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_lookup_returns_summaries() {
    let text = client().lookup("space exploration").await.expect("lookup");

    assert!(text.starts_with("Page: "));
    assert!(text.contains("Summary: "));
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_lookup_nonsense_returns_no_results() {
    let text = client()
        .lookup("qzxvvqzxq unlikely-term 9981273")
        .await
        .expect("lookup");

    assert_eq!(text, NO_RESULTS);
}
