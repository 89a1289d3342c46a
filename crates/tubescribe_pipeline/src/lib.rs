//! Title and script generation pipeline.
//!
//! A [`PipelineSession`] turns a topic into a video title and script:
//!
//! 1. the title [`Generator`] fills its template with the topic,
//! 2. the [`ReferenceSource`](tubescribe_interface::ReferenceSource) looks
//!    up the raw topic,
//! 3. the script [`Generator`] fills its template with the title and the
//!    lookup text.
//!
//! Steps 1 and 2 run concurrently. Each generator keeps an append-only
//! [`ConversationHistory`] for display. Without a credential the session
//! returns [`PipelineOutcome::Disabled`] and makes no remote call.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod generator;
mod history;
mod outcome;
mod session;
mod template;

pub use config::{ModelConfig, ResearchConfig, TemplateConfig, TubescribeConfig};
pub use generator::{GENERATION_TEMPERATURE, Generator, RESEARCH_KEY, TITLE_KEY, TOPIC_KEY};
pub use history::{ConversationHistory, HistoryEntry};
pub use outcome::{PipelineOutcome, PipelineResult, StageFailure};
pub use session::PipelineSession;
pub use template::{DEFAULT_SCRIPT_TEMPLATE, DEFAULT_TITLE_TEMPLATE, PromptTemplate};
