//! End-to-end resolution suite for the default filter chain.
//!
//! This test suite validates:
//! - Idempotence of the full chain under re-application
//! - The deduplication guarantee on (predicate, concept) pairs
//! - Lifecycle precedence across mixed authoring pipelines
//! - Importance resolution within and across predicate groups
//! - Publication scoping with default inclusion for legacy records
//! - Caller-supplied filters running ahead of the default stages

use annotations_pipeline::{
    Annotation, AnnotationFilter, ResolutionRequest, DEFAULT_PUBLICATION,
};

const ABOUT: &str = "http://www.ft.com/ontology/annotation/about";
const MAJOR_MENTIONS: &str = "http://www.ft.com/ontology/annotation/majorMentions";
const MENTIONS: &str = "http://www.ft.com/ontology/annotation/mentions";
const HAS_AUTHOR: &str = "http://www.ft.com/ontology/annotation/hasAuthor";
const IS_CLASSIFIED_BY: &str = "http://www.ft.com/ontology/classification/isClassifiedBy";

fn annotation(predicate: &str, id: &str, lifecycle: &str) -> Annotation {
    Annotation {
        predicate: predicate.to_string(),
        id: id.to_string(),
        lifecycle: lifecycle.to_string(),
        ..Default::default()
    }
}

fn mixed_input() -> Vec<Annotation> {
    vec![
        annotation(MENTIONS, "concept-a", "annotations-v1"),
        annotation(ABOUT, "concept-a", "annotations-v1"),
        annotation(MAJOR_MENTIONS, "concept-b", "annotations-v2"),
        annotation(HAS_AUTHOR, "concept-c", "annotations-v2"),
        annotation(HAS_AUTHOR, "concept-c", "annotations-v2"),
        annotation(IS_CLASSIFIED_BY, "concept-d", "annotations-v1"),
    ]
}

// ============================================================================
// CHAIN PROPERTIES
// ============================================================================

#[test]
fn test_resolution_is_idempotent() {
    let request = ResolutionRequest::new();
    let once = request.resolve(mixed_input());
    let twice = request.resolve(once.clone());
    assert_eq!(twice, once);
}

#[test]
fn test_output_has_no_duplicate_predicate_concept_pairs() {
    let mut input = mixed_input();
    input.extend(mixed_input());

    let output = ResolutionRequest::new().resolve(input);

    for (i, a) in output.iter().enumerate() {
        for b in &output[i + 1..] {
            assert!(
                a.predicate != b.predicate || a.id != b.id,
                "duplicate pair ({}, {})",
                a.predicate,
                a.id
            );
        }
    }
}

#[test]
fn test_duplicate_records_collapse_to_one() {
    let output = ResolutionRequest::new().resolve(vec![
        annotation(HAS_AUTHOR, "concept-a", "annotations-pac"),
        annotation(HAS_AUTHOR, "concept-a", "annotations-pac"),
    ]);
    assert_eq!(output.len(), 1);
}

// ============================================================================
// LIFECYCLE PRECEDENCE
// ============================================================================

#[test]
fn test_pac_record_excludes_v1_records() {
    let output = ResolutionRequest::new().resolve(vec![
        annotation(ABOUT, "concept-a", "annotations-pac"),
        annotation(ABOUT, "concept-b", "annotations-v1"),
    ]);
    assert_eq!(output, vec![annotation(ABOUT, "concept-a", "annotations-pac")]);
}

#[test]
fn test_requested_lifecycle_narrows_output() {
    let request = ResolutionRequest::new().with_lifecycles(vec!["v1".to_string()]);
    let output = request.resolve(vec![
        annotation(ABOUT, "concept-a", "annotations-v1"),
        annotation(ABOUT, "concept-b", "annotations-v2"),
    ]);
    assert_eq!(output, vec![annotation(ABOUT, "concept-a", "annotations-v1")]);
}

#[test]
fn test_requesting_lifecycle_suppressed_by_precedence_yields_empty() {
    let request = ResolutionRequest::new().with_lifecycles(vec!["v1".to_string()]);
    let output = request.resolve(vec![
        annotation(ABOUT, "concept-a", "annotations-pac"),
        annotation(ABOUT, "concept-b", "annotations-v1"),
    ]);
    assert!(output.is_empty());
}

// ============================================================================
// PREDICATE IMPORTANCE
// ============================================================================

#[test]
fn test_about_wins_its_group_for_a_concept() {
    let output = ResolutionRequest::new().resolve(vec![
        annotation(MENTIONS, "concept-a", "annotations-v1"),
        annotation(MAJOR_MENTIONS, "concept-a", "annotations-v1"),
        annotation(ABOUT, "concept-a", "annotations-v1"),
    ]);
    assert_eq!(output, vec![annotation(ABOUT, "concept-a", "annotations-v1")]);
}

#[test]
fn test_mentions_beaten_by_about_for_same_concept() {
    let output = ResolutionRequest::new().resolve(vec![
        annotation(MENTIONS, "concept-a", "annotations-v1"),
        annotation(ABOUT, "concept-a", "annotations-v1"),
    ]);
    assert_eq!(output, vec![annotation(ABOUT, "concept-a", "annotations-v1")]);
}

#[test]
fn test_ungrouped_predicate_unaffected_by_group_resolution() {
    let output = ResolutionRequest::new().resolve(vec![
        annotation(ABOUT, "concept-a", "annotations-v1"),
        annotation(HAS_AUTHOR, "concept-a", "annotations-v1"),
    ]);
    assert_eq!(
        output,
        vec![
            annotation(ABOUT, "concept-a", "annotations-v1"),
            annotation(HAS_AUTHOR, "concept-a", "annotations-v1"),
        ]
    );
}

// ============================================================================
// PUBLICATION SCOPING
// ============================================================================

#[test]
fn test_unscoped_record_included_for_default_publication() {
    let request =
        ResolutionRequest::new().with_publications(vec![DEFAULT_PUBLICATION.to_string()], true);
    let output = request.resolve(vec![annotation(ABOUT, "concept-a", "annotations-v2")]);
    assert_eq!(output.len(), 1);
}

#[test]
fn test_unscoped_record_excluded_for_other_publication() {
    let request = ResolutionRequest::new()
        .with_publications(vec!["8e6c705e-1132-42a2-8db0-c295e29e8658".to_string()], true);
    let output = request.resolve(vec![annotation(ABOUT, "concept-a", "annotations-v2")]);
    assert!(output.is_empty());
}

#[test]
fn test_publication_field_cleared_unless_requested() {
    let mut scoped = annotation(ABOUT, "concept-a", "annotations-v2");
    scoped.publication = vec![DEFAULT_PUBLICATION.to_string()];

    let shown = ResolutionRequest::new()
        .with_publications(vec![DEFAULT_PUBLICATION.to_string()], true)
        .resolve(vec![scoped.clone()]);
    assert_eq!(shown[0].publication, vec![DEFAULT_PUBLICATION.to_string()]);

    let hidden = ResolutionRequest::new()
        .with_publications(vec![DEFAULT_PUBLICATION.to_string()], false)
        .resolve(vec![scoped]);
    assert!(hidden[0].publication.is_empty());
}

// ============================================================================
// CALLER FILTERS
// ============================================================================

struct KeepConcept(&'static str);

impl AnnotationFilter for KeepConcept {
    fn apply(&self, annotations: Vec<Annotation>) -> Vec<Annotation> {
        annotations.into_iter().filter(|a| a.id == self.0).collect()
    }
}

#[test]
fn test_extra_filters_run_before_default_stages() {
    let chain = ResolutionRequest::new().chain_with(vec![Box::new(KeepConcept("concept-b"))]);
    let output = chain.run(vec![
        annotation(ABOUT, "concept-a", "annotations-v1"),
        annotation(MAJOR_MENTIONS, "concept-b", "annotations-v2"),
    ]);
    assert_eq!(
        output,
        vec![annotation(MAJOR_MENTIONS, "concept-b", "annotations-v2")]
    );
}

// ============================================================================
// COMBINED SCENARIO
// ============================================================================

#[test]
fn test_full_resolution_of_mixed_editorial_state() {
    let mut pac_about = annotation(ABOUT, "concept-a", "annotations-pac");
    pac_about.publication = vec![DEFAULT_PUBLICATION.to_string()];
    let mut pac_mentions = annotation(MENTIONS, "concept-a", "annotations-pac");
    pac_mentions.publication = vec![DEFAULT_PUBLICATION.to_string()];
    let mut v2_author = annotation(HAS_AUTHOR, "concept-b", "annotations-v2");
    v2_author.publication = vec![DEFAULT_PUBLICATION.to_string()];
    let v1_leftover = annotation(ABOUT, "concept-c", "annotations-v1");
    let unscoped = annotation(IS_CLASSIFIED_BY, "concept-d", "annotations-pac");

    let request = ResolutionRequest::new()
        .with_publications(vec![DEFAULT_PUBLICATION.to_string()], false);
    let output = request.resolve(vec![
        pac_about,
        pac_mentions,
        v2_author,
        v1_leftover,
        unscoped,
    ]);

    // v1 dropped by precedence, mentions lost to about, all survivors keep
    // no publication field.
    let mut survived: Vec<(String, String)> = output
        .iter()
        .map(|a| (a.predicate.clone(), a.id.clone()))
        .collect();
    survived.sort();
    assert_eq!(
        survived,
        vec![
            (ABOUT.to_string(), "concept-a".to_string()),
            (HAS_AUTHOR.to_string(), "concept-b".to_string()),
            (IS_CLASSIFIED_BY.to_string(), "concept-d".to_string()),
        ]
    );
    assert!(output.iter().all(|a| a.publication.is_empty()));
}
