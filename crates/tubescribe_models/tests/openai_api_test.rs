//! Live tests against the OpenAI API.
//!
//! Run with `cargo test -p tubescribe_models --features api` and
//! `OPENAI_API_KEY` set (a `.env` file works).

use std::time::Duration;
use tubescribe_core::{Credential, GenerateRequest};
use tubescribe_interface::TubescribeDriver;
use tubescribe_models::OpenAIClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_generates_title() {
    let _ = dotenvy::dotenv();
    let token = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY not set");
    let credential = Credential::new(token).expect("OPENAI_API_KEY is blank");

    let client = OpenAIClient::new(
        "gpt-3.5-turbo-instruct",
        "https://api.openai.com/v1",
        Duration::from_secs(60),
    )
    .expect("client")
    .with_max_tokens(Some(32));

    let request = GenerateRequest::builder()
        .prompt("write me a youtube video title about sourdough bread")
        .temperature(Some(0.9))
        .build()
        .expect("request");

    let response = client
        .generate(&credential, &request)
        .await
        .expect("generation failed");

    assert!(!response.text().is_empty());
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_rejects_bad_key() {
    let credential = Credential::new("sk-invalid").expect("non-empty");
    let client = OpenAIClient::new(
        "gpt-3.5-turbo-instruct",
        "https://api.openai.com/v1",
        Duration::from_secs(30),
    )
    .expect("client");

    let request = GenerateRequest::builder()
        .prompt("hello")
        .build()
        .expect("request");

    let err = client.generate(&credential, &request).await.unwrap_err();
    assert!(err.to_string().contains("Unauthorized"));
}
