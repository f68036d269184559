//! Assembling the filter chain for one resolution request.

use annotations_core::Annotation;

use crate::chain::{AnnotationFilter, FilterChain};
use crate::dedup::DedupFilter;
use crate::lifecycle::LifecycleFilter;
use crate::predicate::PredicateImportanceFilter;
use crate::publication::PublicationFilter;

/// How one raw annotation list should be resolved.
///
/// Carries the caller's narrowing choices and assembles the chain in the
/// fixed stage order: caller-supplied extra filters, then lifecycle, then
/// predicate importance, then publication, with deduplication always
/// appended as the final baseline pass. Every call builds a fresh chain,
/// so nothing is shared between concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ResolutionRequest {
    lifecycles: Vec<String>,
    publications: Vec<String>,
    show_publication: bool,
}

impl ResolutionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Public lifecycle names to narrow to. An unknown name matches
    /// nothing; callers wanting a 400 instead validate names against the
    /// lifecycle table before constructing the request.
    pub fn with_lifecycles(mut self, lifecycles: Vec<String>) -> Self {
        self.lifecycles = lifecycles;
        self
    }

    /// Publication UUIDs to narrow to, and whether surviving records keep
    /// their publication field.
    pub fn with_publications(mut self, publications: Vec<String>, show_publication: bool) -> Self {
        self.publications = publications;
        self.show_publication = show_publication;
        self
    }

    /// The chain for this request.
    pub fn chain(&self) -> FilterChain {
        self.chain_with(Vec::new())
    }

    /// The chain for this request, with caller filters running first.
    pub fn chain_with(&self, extra: Vec<Box<dyn AnnotationFilter>>) -> FilterChain {
        let mut filters = extra;
        filters.push(Box::new(LifecycleFilter::with_lifecycles(&self.lifecycles)));
        filters.push(Box::new(PredicateImportanceFilter::new()));
        filters.push(Box::new(PublicationFilter::new(
            self.publications.clone(),
            self.show_publication,
        )));
        filters.push(Box::new(DedupFilter));
        FilterChain::new(filters)
    }

    /// Resolves one raw annotation list with the default chain.
    pub fn resolve(&self, annotations: Vec<Annotation>) -> Vec<Annotation> {
        self.chain().run(annotations)
    }
}
