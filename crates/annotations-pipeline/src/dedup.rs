//! Duplicate annotation removal.

use std::collections::HashSet;

use annotations_core::Annotation;
use tracing::debug;

use crate::chain::AnnotationFilter;

/// Drops any record whose (predicate, concept id) pair has already been
/// emitted, preserving first-seen order. All other fields are ignored for
/// the identity comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct DedupFilter;

impl AnnotationFilter for DedupFilter {
    fn apply(&self, annotations: Vec<Annotation>) -> Vec<Annotation> {
        let input_count = annotations.len();
        let mut seen: HashSet<(String, String)> = HashSet::with_capacity(input_count);
        let mut out = Vec::with_capacity(input_count);

        for ann in annotations {
            if seen.insert((ann.predicate.clone(), ann.id.clone())) {
                out.push(ann);
            }
        }

        if out.len() < input_count {
            debug!(
                filter = "dedup",
                input_count,
                output_count = out.len(),
                "dropped duplicate annotations"
            );
        }
        out
    }
}
