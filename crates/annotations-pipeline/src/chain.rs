//! Filter trait and the chain driver.
//!
//! The chain is an explicit ordered list of stages applied by a driver
//! loop; each stage receives the previous stage's output. There is no
//! continuation passing and a stage cannot re-enter the chain.

use annotations_core::Annotation;

/// One resolution stage.
///
/// Filtering is a total function over any input, including an empty list:
/// a filter never fails, and records it cannot match are excluded from the
/// result rather than treated as fatal.
pub trait AnnotationFilter: Send + Sync {
    fn apply(&self, annotations: Vec<Annotation>) -> Vec<Annotation>;
}

/// An ordered sequence of filters, each executed exactly once.
pub struct FilterChain {
    filters: Vec<Box<dyn AnnotationFilter>>,
}

impl FilterChain {
    pub fn new(filters: Vec<Box<dyn AnnotationFilter>>) -> Self {
        Self { filters }
    }

    /// Runs every stage in order, passing stage *i*'s output to stage
    /// *i+1*. With no stages this is the identity function.
    pub fn run(&self, annotations: Vec<Annotation>) -> Vec<Annotation> {
        self.filters
            .iter()
            .fold(annotations, |current, filter| filter.apply(current))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Keeps only annotations with the given predicate.
    struct KeepPredicate(&'static str);

    impl AnnotationFilter for KeepPredicate {
        fn apply(&self, annotations: Vec<Annotation>) -> Vec<Annotation> {
            annotations
                .into_iter()
                .filter(|a| a.predicate == self.0)
                .collect()
        }
    }

    /// Tags every annotation's lifecycle with a marker, recording order.
    struct AppendMarker(&'static str);

    impl AnnotationFilter for AppendMarker {
        fn apply(&self, annotations: Vec<Annotation>) -> Vec<Annotation> {
            annotations
                .into_iter()
                .map(|mut a| {
                    a.lifecycle.push_str(self.0);
                    a
                })
                .collect()
        }
    }

    fn annotation(predicate: &str, id: &str) -> Annotation {
        Annotation {
            predicate: predicate.to_string(),
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = FilterChain::new(Vec::new());
        let input = vec![annotation("about", "a"), annotation("mentions", "b")];
        let output = chain.run(input.clone());
        assert_eq!(output, input);
        assert!(chain.is_empty());
    }

    #[test]
    fn test_single_stage_is_applied() {
        let chain = FilterChain::new(vec![Box::new(KeepPredicate("about"))]);
        let output = chain.run(vec![
            annotation("about", "a"),
            annotation("mentions", "b"),
        ]);
        assert_eq!(output, vec![annotation("about", "a")]);
    }

    #[test]
    fn test_stages_run_in_declaration_order() {
        let chain = FilterChain::new(vec![
            Box::new(AppendMarker("x")),
            Box::new(AppendMarker("y")),
        ]);
        let output = chain.run(vec![annotation("about", "a")]);
        assert_eq!(output[0].lifecycle, "xy");
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_stage_output_feeds_next_stage() {
        // The second stage only sees what the first let through.
        let chain = FilterChain::new(vec![
            Box::new(KeepPredicate("about")),
            Box::new(AppendMarker("seen")),
        ]);
        let output = chain.run(vec![
            annotation("about", "a"),
            annotation("mentions", "b"),
        ]);
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].lifecycle, "seen");
    }

    #[test]
    fn test_chain_handles_empty_input() {
        let chain = FilterChain::new(vec![Box::new(KeepPredicate("about"))]);
        assert!(chain.run(Vec::new()).is_empty());
    }
}
