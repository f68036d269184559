//! Importance-based resolution of competing predicates for a concept.

use std::collections::HashMap;

use annotations_core::Annotation;
use tracing::debug;

use crate::chain::AnnotationFilter;

// ===== PREDICATE URIS =====

pub const MENTIONS: &str = "http://www.ft.com/ontology/annotation/mentions";
pub const MAJOR_MENTIONS: &str = "http://www.ft.com/ontology/annotation/majormentions";
pub const ABOUT: &str = "http://www.ft.com/ontology/annotation/about";
pub const IS_CLASSIFIED_BY: &str = "http://www.ft.com/ontology/classification/isclassifiedby";
pub const IS_PRIMARILY_CLASSIFIED_BY: &str =
    "http://www.ft.com/ontology/classification/isprimarilyclassifiedby";
pub const IMPLICITLY_CLASSIFIED_BY: &str = "http://www.ft.com/ontology/implicitlyclassifiedby";
/// Brand relationships are asserted with the isClassifiedBy URI. The alias is
/// kept so the group tables read the way the ontology is discussed.
pub const HAS_BRAND: &str = IS_CLASSIFIED_BY;

// ===== CONFIGURATION =====

/// Which predicates compete with each other, and who wins.
///
/// `groups` holds ordered lists of predicate names, least to most important;
/// a predicate's position in its group is its importance rank. `members`
/// enumerates every predicate that participates in importance resolution at
/// all. Anything outside `members` passes through the filter untouched.
///
/// A predicate may appear more than once in a group (aliases such as
/// [`HAS_BRAND`]); the first occurrence decides its rank.
#[derive(Debug, Clone)]
pub struct ImportanceConfig {
    members: Vec<String>,
    groups: Vec<Vec<String>>,
}

impl Default for ImportanceConfig {
    fn default() -> Self {
        Self::new(
            &[
                MENTIONS,
                MAJOR_MENTIONS,
                ABOUT,
                IS_CLASSIFIED_BY,
                HAS_BRAND,
                IMPLICITLY_CLASSIFIED_BY,
                IS_PRIMARILY_CLASSIFIED_BY,
            ],
            &[
                &[MENTIONS, MAJOR_MENTIONS, ABOUT],
                &[
                    IMPLICITLY_CLASSIFIED_BY,
                    HAS_BRAND,
                    IS_CLASSIFIED_BY,
                    IS_PRIMARILY_CLASSIFIED_BY,
                ],
            ],
        )
    }
}

impl ImportanceConfig {
    /// Builds a configuration from explicit member and group tables. Names
    /// are lowercased here so lookups can compare exactly.
    pub fn new(members: &[&str], groups: &[&[&str]]) -> Self {
        Self {
            members: members.iter().map(|m| m.to_lowercase()).collect(),
            groups: groups
                .iter()
                .map(|g| g.iter().map(|p| p.to_lowercase()).collect())
                .collect(),
        }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    fn is_member(&self, predicate: &str) -> bool {
        self.members.iter().any(|m| m == predicate)
    }

    /// First (group, rank) whose table lists the predicate.
    fn group_and_rank(&self, predicate: &str) -> Option<(usize, usize)> {
        self.groups.iter().enumerate().find_map(|(group, table)| {
            table
                .iter()
                .position(|p| p == predicate)
                .map(|rank| (group, rank))
        })
    }

    fn rank_in_group(&self, predicate: &str, group: usize) -> Option<usize> {
        self.groups[group].iter().position(|p| p == predicate)
    }
}

// ===== FILTER =====

/// Keeps, per concept and importance group, only the most important
/// annotation; everything outside the configured membership passes through
/// once per occurrence.
///
/// Ties keep the incumbent, so the first record seen at a given rank wins.
/// Accumulation is one fixed-size slot array per concept, indexed by group.
#[derive(Debug, Clone, Default)]
pub struct PredicateImportanceFilter {
    config: ImportanceConfig,
}

impl PredicateImportanceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ImportanceConfig) -> Self {
        Self { config }
    }
}

impl AnnotationFilter for PredicateImportanceFilter {
    fn apply(&self, annotations: Vec<Annotation>) -> Vec<Annotation> {
        let input_count = annotations.len();
        let group_count = self.config.group_count();
        let mut slots: HashMap<String, Vec<Option<Annotation>>> = HashMap::new();
        let mut concept_order: Vec<String> = Vec::new();
        let mut unfiltered: Vec<Annotation> = Vec::new();

        for ann in annotations {
            let predicate = ann.predicate.to_lowercase();
            if !self.config.is_member(&predicate) {
                unfiltered.push(ann);
                continue;
            }
            let Some((group, rank)) = self.config.group_and_rank(&predicate) else {
                // Member without a group entry cannot be ranked.
                debug!(
                    filter = "predicate",
                    predicate = %ann.predicate,
                    concept_uuid = %ann.id,
                    "predicate has no importance group, dropping annotation"
                );
                continue;
            };

            let concept_slots = slots.entry(ann.id.clone()).or_insert_with(|| {
                concept_order.push(ann.id.clone());
                vec![None; group_count]
            });
            let wins = match &concept_slots[group] {
                None => true,
                Some(incumbent) => {
                    let incumbent_rank = self
                        .config
                        .rank_in_group(&incumbent.predicate.to_lowercase(), group);
                    incumbent_rank.is_none_or(|prev| prev < rank)
                }
            };
            if wins {
                concept_slots[group] = Some(ann);
            }
        }

        let mut out = Vec::with_capacity(input_count);
        for concept in &concept_order {
            if let Some(winners) = slots.remove(concept) {
                out.extend(winners.into_iter().flatten());
            }
        }
        out.extend(unfiltered);

        if out.len() < input_count {
            debug!(
                filter = "predicate",
                input_count,
                output_count = out.len(),
                "resolved competing predicates"
            );
        }
        out
    }
}
