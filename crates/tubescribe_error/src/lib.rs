//! Error types for the Tubescribe pipeline.
//!
//! This crate provides the error types shared by every Tubescribe crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use tubescribe_error::{HttpError, TubescribeResult};
//!
//! fn fetch_data() -> TubescribeResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod message;
mod models;
mod pipeline;
mod research;

pub use error::{TubescribeError, TubescribeErrorKind, TubescribeResult};
pub use message::{ConfigError, HttpError, IoError, JsonError};
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use pipeline::{PipelineError, PipelineErrorKind, Stage};
pub use research::{ResearchError, ResearchErrorKind, ResearchResult};
