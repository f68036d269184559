//! # annotations-core
//!
//! Core types, traits, and abstractions for the public annotations API.
//!
//! This crate provides the annotation data model and the trait definitions
//! that the pipeline, store, and API crates depend on.

pub mod error;
pub mod lifecycles;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{Annotation, IndustryClassification};
pub use traits::{AnnotationsRepository, ReadResult};
