//! Trait definitions for the Tubescribe pipeline.
//!
//! The pipeline talks to two remote services through these seams: a
//! language model ([`TubescribeDriver`]) and an encyclopedia
//! ([`ReferenceSource`]). Concrete clients live in `tubescribe_models` and
//! `tubescribe_research`; tests substitute scripted mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ReferenceSource, TubescribeDriver};
