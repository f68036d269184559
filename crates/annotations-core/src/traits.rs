//! Repository trait for annotation retrieval.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Annotation;

/// Raw annotations for one piece of content, as read from the store.
#[derive(Debug, Clone, Default)]
pub struct ReadResult {
    /// Raw annotation records, prior to any filtering.
    pub annotations: Vec<Annotation>,
    /// Whether the store holds annotation rows for the content at all.
    /// `false` with no error means the content has no annotations, which
    /// callers report differently from an empty post-filter result.
    pub found: bool,
}

/// Read-side access to the annotations store.
#[async_trait]
pub trait AnnotationsRepository: Send + Sync {
    /// Read the raw annotations for a content UUID.
    ///
    /// `bookmark` is an optional causal-consistency token; a reader
    /// presenting one observes every write that token witnessed.
    async fn read(&self, content_uuid: &str, bookmark: Option<&str>) -> Result<ReadResult>;

    /// Verify the backing store is reachable and answering queries.
    async fn check_connectivity(&self) -> Result<()>;
}
