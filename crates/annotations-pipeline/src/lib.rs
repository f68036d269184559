//! # annotations-pipeline
//!
//! The per-request resolution pipeline for public annotations.
//!
//! The underlying store may hold multiple, sometimes contradictory,
//! annotation records for the same (content, concept) pair, produced by
//! different authoring lifecycles, predicate types, and target
//! publications. This crate reduces that raw list to the set a public API
//! should expose:
//! - Lifecycle precedence and caller-requested lifecycle narrowing
//! - Importance-based resolution of competing predicates per concept
//! - Publication scoping with default inclusion for legacy records
//! - Baseline deduplication by (predicate, concept)
//!
//! ## Example
//!
//! ```ignore
//! use annotations_pipeline::ResolutionRequest;
//!
//! let resolved = ResolutionRequest::new()
//!     .with_lifecycles(vec!["pac".to_string()])
//!     .with_publications(publications, show_publication)
//!     .resolve(raw_annotations);
//! ```

pub mod chain;
pub mod dedup;
pub mod lifecycle;
pub mod predicate;
pub mod publication;
pub mod resolve;

// Re-export core types
pub use annotations_core::*;

// Re-export pipeline types
pub use chain::{AnnotationFilter, FilterChain};
pub use dedup::DedupFilter;
pub use lifecycle::LifecycleFilter;
pub use predicate::{ImportanceConfig, PredicateImportanceFilter};
pub use publication::{PublicationFilter, DEFAULT_PUBLICATION};
pub use resolve::ResolutionRequest;
