//! Tubescribe: YouTube titles and scripts from a topic.
//!
//! Given a topic, Tubescribe asks a language model for a video title, looks
//! the topic up on Wikipedia, and asks the model for a script built from
//! the title and the research. Each generator keeps a history of its
//! exchanges for the lifetime of a session.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tubescribe::{ApiAccess, PipelineOutcome, TubescribeConfig, build_session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TubescribeConfig::load()?;
//!     let mut session = build_session(&config)?;
//!     let access = ApiAccess::from_token(std::env::var("OPENAI_API_KEY").ok().as_deref());
//!
//!     if let PipelineOutcome::Completed(result) = session.run("tide pools", &access).await {
//!         println!("{}\n\n{}", result.title(), result.script());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `tubescribe_error` - Error types
//! - `tubescribe_core` - Requests, responses, credential gate
//! - `tubescribe_interface` - Language-model and reference-source traits
//! - `tubescribe_models` - OpenAI completions client
//! - `tubescribe_research` - Wikipedia client
//! - `tubescribe_pipeline` - Templates, histories, session, configuration
//!
//! This crate re-exports all of them and ships the `tubescribe` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod logging;
mod render;
mod setup;

pub use logging::init_logging;
pub use render::{MISSING_KEY_WARNING, failure_lines, render_human, render_json};
pub use setup::{LiveSession, build_session};

pub use tubescribe_core::*;
pub use tubescribe_error::*;
pub use tubescribe_interface::*;
pub use tubescribe_models::*;
pub use tubescribe_pipeline::*;
pub use tubescribe_research::*;
