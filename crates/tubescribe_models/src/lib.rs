//! Language-model provider integrations for Tubescribe.
//!
//! Currently provides the OpenAI completions client. Every provider
//! implements [`tubescribe_interface::TubescribeDriver`].
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use tubescribe_core::{Credential, GenerateRequest};
//! use tubescribe_interface::TubescribeDriver;
//! use tubescribe_models::OpenAIClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAIClient::new(
//!     "gpt-3.5-turbo-instruct",
//!     "https://api.openai.com/v1",
//!     Duration::from_secs(60),
//! )?;
//! let credential = Credential::new(std::env::var("OPENAI_API_KEY")?).unwrap();
//! let request = GenerateRequest::builder()
//!     .prompt("write me a youtube video title about tide pools")
//!     .temperature(Some(0.9))
//!     .build()?;
//! let response = client.generate(&credential, &request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::{
    ApiErrorBody, ApiErrorDetail, CompletionChoice, CompletionRequest, CompletionRequestBuilder,
    CompletionResponse, OpenAIClient, error_from_status, from_completion_response,
    to_completion_request,
};
