//! Lifecycle precedence and caller-requested lifecycle narrowing.

use annotations_core::lifecycles::{lifecycle_tag, PAC_LIFECYCLE, V2_LIFECYCLE};
use annotations_core::Annotation;
use tracing::debug;

use crate::chain::AnnotationFilter;

/// Chooses which authoring pipeline's records to honor.
///
/// Applies two steps in order. First the editorial-precedence rule: if any
/// record carries the pac lifecycle, only pac and co-equal v2 records
/// survive. Then, if the caller requested specific lifecycles, the result
/// is narrowed to those.
///
/// Requesting a lifecycle the precedence step already excluded (v1 while a
/// pac record exists) legitimately yields an empty result.
#[derive(Debug, Clone, Default)]
pub struct LifecycleFilter {
    requested: Vec<String>,
    narrowing: bool,
}

impl LifecycleFilter {
    /// A filter applying only the editorial-precedence rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter that additionally narrows to the given public lifecycle
    /// names. Names are mapped through the lifecycle name table here; an
    /// unknown name matches nothing, so a request made up entirely of
    /// unknown names yields an empty result.
    pub fn with_lifecycles(names: &[String]) -> Self {
        let requested = names
            .iter()
            .filter_map(|name| lifecycle_tag(name))
            .map(String::from)
            .collect();
        Self {
            requested,
            // Narrowing is decided by the request, not by how many names
            // mapped. An all-unknown request must narrow to nothing.
            narrowing: !names.is_empty(),
        }
    }
}

impl AnnotationFilter for LifecycleFilter {
    fn apply(&self, annotations: Vec<Annotation>) -> Vec<Annotation> {
        let input_count = annotations.len();
        let mut current = annotations;

        if current.iter().any(|a| a.lifecycle == PAC_LIFECYCLE) {
            current.retain(|a| a.lifecycle == PAC_LIFECYCLE || a.lifecycle == V2_LIFECYCLE);
        }

        if self.narrowing {
            current.retain(|a| self.requested.iter().any(|tag| tag == &a.lifecycle));
        }

        if current.len() < input_count {
            debug!(
                filter = "lifecycle",
                input_count,
                output_count = current.len(),
                "narrowed annotations by lifecycle"
            );
        }
        current
    }
}
