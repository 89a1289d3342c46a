//! Core data types for the Tubescribe pipeline.
//!
//! This crate provides the types shared between the language-model client,
//! the encyclopedia adapter and the pipeline: generation requests and
//! responses, and the credential gate that enables or disables remote calls.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credential;
mod request;

pub use credential::{ApiAccess, Credential};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerateResponseBuilder,
    TokenUsage,
};
