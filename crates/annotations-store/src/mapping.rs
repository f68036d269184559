//! Mapping raw query rows into public annotation records.

use annotations_core::{Annotation, Error, IndustryClassification, Result};
use serde::Deserialize;

use crate::ontology;

/// Prefix of every public concept identifier.
pub const ID_PREFIX: &str = "http://api.ft.com/things/";

/// Relationship type to public predicate URI. Relationships not listed here
/// are not public annotations and their rows are skipped.
const PREDICATES: &[(&str, &str)] = &[
    ("MENTIONS", "http://www.ft.com/ontology/annotation/mentions"),
    ("MAJOR_MENTIONS", "http://www.ft.com/ontology/annotation/majorMentions"),
    ("ABOUT", "http://www.ft.com/ontology/annotation/about"),
    ("HAS_AUTHOR", "http://www.ft.com/ontology/annotation/hasAuthor"),
    ("HAS_CONTRIBUTOR", "http://www.ft.com/ontology/hasContributor"),
    ("HAS_DISPLAY_TAG", "http://www.ft.com/ontology/hasDisplayTag"),
    ("HAS_REFERENCE", "http://www.ft.com/ontology/annotation/hasReference"),
    ("IS_CLASSIFIED_BY", "http://www.ft.com/ontology/classification/isClassifiedBy"),
    ("HAS_BRAND", "http://www.ft.com/ontology/classification/isClassifiedBy"),
    (
        "IS_PRIMARILY_CLASSIFIED_BY",
        "http://www.ft.com/ontology/classification/isPrimarilyClassifiedBy",
    ),
    ("IMPLICITLY_CLASSIFIED_BY", "http://www.ft.com/ontology/implicitlyClassifiedBy"),
    ("IMPLICITLY_ABOUT", "http://www.ft.com/ontology/implicitlyAbout"),
    ("IS_SPONSORED_BY", "http://www.ft.com/ontology/annotation/isSponsoredBy"),
    ("HAS_SOURCE", "http://www.ft.com/ontology/annotation/hasSource"),
];

fn predicate_uri(relationship: &str) -> Option<&'static str> {
    PREDICATES
        .iter()
        .find(|(rel, _)| *rel == relationship)
        .map(|(_, uri)| *uri)
}

/// One row of the annotations query, keyed by the statement's column
/// aliases. Missing node properties come back as JSON nulls.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct NeoAnnotation {
    pub id: String,
    pub predicate: String,
    pub types: Vec<String>,
    #[serde(rename = "prefLabel")]
    pub pref_label: Option<String>,
    #[serde(rename = "isDeprecated")]
    pub is_deprecated: Option<bool>,
    #[serde(rename = "geonamesFeatureCode")]
    pub geonames_feature_code: Option<String>,
    #[serde(rename = "leiCode")]
    pub lei_code: Option<String>,
    pub figi: Option<String>,
    #[serde(rename = "naicsIdentifier")]
    pub naics_identifier: Option<String>,
    #[serde(rename = "naicsPrefLabel")]
    pub naics_pref_label: Option<String>,
    #[serde(rename = "naicsRank")]
    pub naics_rank: Option<i32>,
    pub lifecycle: Option<String>,
    pub publication: Option<Vec<String>>,
}

/// Builds the public record for one row. Fails when the row cannot be
/// expressed publicly: an unlisted relationship type or a concept without
/// any known type label.
pub(crate) fn map_annotation(neo: NeoAnnotation, base_url: &str) -> Result<Annotation> {
    let api_url = ontology::api_url(&neo.id, &neo.types, base_url).ok_or_else(|| {
        Error::InvalidInput(format!(
            "could not construct api url for uuid {} with types {:?}",
            neo.id, neo.types
        ))
    })?;

    let types = ontology::type_uris(&neo.types).ok_or_else(|| {
        Error::InvalidInput(format!(
            "could not map type URIs for uuid {} with types {:?}",
            neo.id, neo.types
        ))
    })?;

    let predicate = predicate_uri(&neo.predicate).ok_or_else(|| {
        Error::InvalidInput(format!(
            "no public predicate for relationship {} on uuid {}",
            neo.predicate, neo.id
        ))
    })?;

    let naics = match neo.naics_identifier.filter(|id| !id.is_empty()) {
        Some(identifier) => vec![IndustryClassification {
            identifier,
            pref_label: neo.naics_pref_label.unwrap_or_default(),
            rank: neo.naics_rank.unwrap_or_default(),
        }],
        None => Vec::new(),
    };

    Ok(Annotation {
        predicate: predicate.to_string(),
        id: format!("{}{}", ID_PREFIX, neo.id),
        api_url,
        types: Some(types),
        lei_code: neo.lei_code.filter(|c| !c.is_empty()),
        figi: neo.figi.filter(|c| !c.is_empty()),
        naics,
        pref_label: neo.pref_label.filter(|l| !l.is_empty()),
        geonames_feature_code: neo.geonames_feature_code.filter(|c| !c.is_empty()),
        is_deprecated: neo.is_deprecated.unwrap_or_default(),
        publication: neo.publication.unwrap_or_default(),
        lifecycle: neo.lifecycle.unwrap_or_default(),
    })
}
