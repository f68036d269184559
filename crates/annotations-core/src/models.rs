//! Core data models for the public annotations API.
//!
//! The wire shape of [`Annotation`] is a public contract: field names,
//! omission rules, and the always-present `types`/`apiUrl` fields must not
//! change without a coordinated API version bump.

use serde::{Deserialize, Serialize};

/// An industry classification attached to an organisation concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IndustryClassification {
    pub identifier: String,
    #[serde(rename = "prefLabel")]
    pub pref_label: String,
    pub rank: i32,
}

/// One (content → concept) relationship as asserted by an upstream
/// authoring pipeline.
///
/// `predicate` + `id` identify a record for deduplication purposes; all
/// other fields are descriptive metadata the filters pass through untouched,
/// except `publication`, which the publication filter may clear before the
/// record is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Annotation {
    /// Relationship type URI, e.g. `http://www.ft.com/ontology/annotation/about`.
    pub predicate: String,
    /// Canonical concept identifier, `http://api.ft.com/things/<uuid>`.
    pub id: String,
    #[serde(rename = "apiUrl")]
    pub api_url: String,
    /// Concept type URI hierarchy, least to most specific. Serialized as
    /// `null` when unset, matching the legacy wire shape.
    pub types: Option<Vec<String>>,
    #[serde(rename = "leiCode", skip_serializing_if = "Option::is_none")]
    pub lei_code: Option<String>,
    #[serde(rename = "FIGI", skip_serializing_if = "Option::is_none")]
    pub figi: Option<String>,
    #[serde(rename = "NAICS", skip_serializing_if = "Vec::is_empty")]
    pub naics: Vec<IndustryClassification>,
    #[serde(rename = "prefLabel", skip_serializing_if = "Option::is_none")]
    pub pref_label: Option<String>,
    #[serde(rename = "geonamesFeatureCode", skip_serializing_if = "Option::is_none")]
    pub geonames_feature_code: Option<String>,
    #[serde(rename = "isDeprecated", skip_serializing_if = "std::ops::Not::not")]
    pub is_deprecated: bool,
    /// Publication UUIDs this annotation is scoped to; empty means the
    /// record predates publication scoping and applies everywhere.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub publication: Vec<String>,
    /// Authoring pipeline that produced the record. Used for filtering,
    /// never exposed in the public response.
    #[serde(skip)]
    pub lifecycle: String,
}
