//! Concept type tables.
//!
//! Neo4j concept nodes carry a set of type labels (`Thing`, `Concept`,
//! `Organisation`, ...). The public API exposes each concept with the full
//! URI hierarchy of its most specific label, and routes its `apiUrl` to the
//! endpoint family serving that type. Both lookups live here as one fixed
//! table.

/// Which public endpoint family serves a concept type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlFamily {
    People,
    Organisations,
    Brands,
    Things,
}

impl UrlFamily {
    fn path(self) -> &'static str {
        match self {
            UrlFamily::People => "people",
            UrlFamily::Organisations => "organisations",
            UrlFamily::Brands => "brands",
            UrlFamily::Things => "things",
        }
    }
}

struct ConceptType {
    label: &'static str,
    /// Type URIs, least to most specific. The last entry is the type itself.
    hierarchy: &'static [&'static str],
    family: UrlFamily,
}

const THING: &str = "http://www.ft.com/ontology/core/Thing";
const CONCEPT: &str = "http://www.ft.com/ontology/concept/Concept";
const CLASSIFICATION: &str = "http://www.ft.com/ontology/classification/Classification";

const CONCEPT_TYPES: &[ConceptType] = &[
    ConceptType {
        label: "Thing",
        hierarchy: &[THING],
        family: UrlFamily::Things,
    },
    ConceptType {
        label: "Concept",
        hierarchy: &[THING, CONCEPT],
        family: UrlFamily::Things,
    },
    ConceptType {
        label: "Classification",
        hierarchy: &[THING, CONCEPT, CLASSIFICATION],
        family: UrlFamily::Things,
    },
    ConceptType {
        label: "Person",
        hierarchy: &[THING, CONCEPT, "http://www.ft.com/ontology/person/Person"],
        family: UrlFamily::People,
    },
    ConceptType {
        label: "Organisation",
        hierarchy: &[
            THING,
            CONCEPT,
            "http://www.ft.com/ontology/organisation/Organisation",
        ],
        family: UrlFamily::Organisations,
    },
    ConceptType {
        label: "Company",
        hierarchy: &[
            THING,
            CONCEPT,
            "http://www.ft.com/ontology/organisation/Organisation",
            "http://www.ft.com/ontology/company/Company",
        ],
        family: UrlFamily::Organisations,
    },
    ConceptType {
        label: "PublicCompany",
        hierarchy: &[
            THING,
            CONCEPT,
            "http://www.ft.com/ontology/organisation/Organisation",
            "http://www.ft.com/ontology/company/Company",
            "http://www.ft.com/ontology/company/PublicCompany",
        ],
        family: UrlFamily::Organisations,
    },
    ConceptType {
        label: "PrivateCompany",
        hierarchy: &[
            THING,
            CONCEPT,
            "http://www.ft.com/ontology/organisation/Organisation",
            "http://www.ft.com/ontology/company/Company",
            "http://www.ft.com/ontology/company/PrivateCompany",
        ],
        family: UrlFamily::Organisations,
    },
    ConceptType {
        label: "Brand",
        hierarchy: &[
            THING,
            CONCEPT,
            CLASSIFICATION,
            "http://www.ft.com/ontology/product/Brand",
        ],
        family: UrlFamily::Brands,
    },
    ConceptType {
        label: "Subject",
        hierarchy: &[
            THING,
            CONCEPT,
            CLASSIFICATION,
            "http://www.ft.com/ontology/Subject",
        ],
        family: UrlFamily::Things,
    },
    ConceptType {
        label: "Section",
        hierarchy: &[
            THING,
            CONCEPT,
            CLASSIFICATION,
            "http://www.ft.com/ontology/Section",
        ],
        family: UrlFamily::Things,
    },
    ConceptType {
        label: "Genre",
        hierarchy: &[
            THING,
            CONCEPT,
            CLASSIFICATION,
            "http://www.ft.com/ontology/Genre",
        ],
        family: UrlFamily::Things,
    },
    ConceptType {
        label: "SpecialReport",
        hierarchy: &[
            THING,
            CONCEPT,
            CLASSIFICATION,
            "http://www.ft.com/ontology/SpecialReport",
        ],
        family: UrlFamily::Things,
    },
    ConceptType {
        label: "AlphavilleSeries",
        hierarchy: &[
            THING,
            CONCEPT,
            CLASSIFICATION,
            "http://www.ft.com/ontology/AlphavilleSeries",
        ],
        family: UrlFamily::Things,
    },
    ConceptType {
        label: "Topic",
        hierarchy: &[THING, CONCEPT, "http://www.ft.com/ontology/Topic"],
        family: UrlFamily::Things,
    },
    ConceptType {
        label: "Location",
        hierarchy: &[THING, CONCEPT, "http://www.ft.com/ontology/Location"],
        family: UrlFamily::Things,
    },
];

/// The most specific known concept type among a node's labels. Unknown
/// labels are ignored; hierarchy depth decides specificity.
fn most_specific(labels: &[String]) -> Option<&'static ConceptType> {
    labels
        .iter()
        .filter_map(|l| CONCEPT_TYPES.iter().find(|ct| ct.label == l))
        .max_by_key(|ct| ct.hierarchy.len())
}

/// Full type URI hierarchy for a node's labels, least to most specific.
/// `None` when no label is a known concept type.
pub fn type_uris(labels: &[String]) -> Option<Vec<String>> {
    most_specific(labels).map(|ct| ct.hierarchy.iter().map(|uri| uri.to_string()).collect())
}

/// The public API URL for a concept, routed by its most specific type.
pub fn api_url(uuid: &str, labels: &[String], base_url: &str) -> Option<String> {
    let concept_type = most_specific(labels)?;
    Some(format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        concept_type.family.path(),
        uuid
    ))
}
