//! Narrowing annotations to a requested set of target publications.

use annotations_core::Annotation;
use tracing::debug;

use crate::chain::AnnotationFilter;

/// UUID of the default publication (FT Pink). Legacy annotations carry no
/// publication list and are treated as implicitly belonging to it.
pub const DEFAULT_PUBLICATION: &str = "88fdde6c-2aa4-4f78-af02-9f680097cfd6";

/// Keeps annotations scoped to any of the requested publications.
///
/// With an empty requested set every record passes. Otherwise a record
/// passes when its publication list intersects the requested set, or when
/// it is unscoped and the requested set includes [`DEFAULT_PUBLICATION`].
/// Each surviving record is emitted exactly once however many requested
/// publications it matches.
///
/// Unless `show_publication` is set, the publication field is cleared on
/// every surviving record, on the narrowing and the pass-through path
/// alike. The field is response hygiene, not a filtering outcome.
#[derive(Debug, Clone, Default)]
pub struct PublicationFilter {
    requested: Vec<String>,
    show_publication: bool,
}

impl PublicationFilter {
    pub fn new(requested: Vec<String>, show_publication: bool) -> Self {
        Self {
            requested,
            show_publication,
        }
    }
}

impl AnnotationFilter for PublicationFilter {
    fn apply(&self, mut annotations: Vec<Annotation>) -> Vec<Annotation> {
        let input_count = annotations.len();

        if !self.requested.is_empty() {
            let default_requested = self.requested.iter().any(|p| p == DEFAULT_PUBLICATION);
            annotations.retain(|a| {
                a.publication.iter().any(|p| self.requested.contains(p))
                    || (a.publication.is_empty() && default_requested)
            });
        }

        if !self.show_publication {
            for a in &mut annotations {
                a.publication.clear();
            }
        }

        if annotations.len() < input_count {
            debug!(
                filter = "publication",
                input_count,
                output_count = annotations.len(),
                "narrowed annotations by publication"
            );
        }
        annotations
    }
}
