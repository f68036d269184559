//! The annotations read query and its driver.

use annotations_core::{Annotation, AnnotationsRepository, ReadResult, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::client::{Neo4jClient, QueryResponse};
use crate::mapping::{map_annotation, NeoAnnotation};

/// Five result families in one statement: direct relationships, brand
/// ancestry, brands implying ABOUT topics, broader topics of ABOUT
/// concepts, and containing locations of ABOUT locations. Every branch
/// returns the same column list so the union is well formed.
const ANNOTATIONS_QUERY: &str = "
MATCH (content:Content{uuid:$contentUUID})-[rel]-(:Concept)-[:EQUIVALENT_TO]->(canonicalConcept:Concept)
OPTIONAL MATCH (canonicalConcept)<-[:EQUIVALENT_TO]-(:Concept)<-[:ISSUED_BY]-(figi:FinancialInstrument)
OPTIONAL MATCH (canonicalConcept)<-[:EQUIVALENT_TO]-(:Concept)-[naicsRel:HAS_INDUSTRY_CLASSIFICATION{rank:1}]->(NAICSIndustryClassification)-[:EQUIVALENT_TO]->(naics:NAICSIndustryClassification)
RETURN
	canonicalConcept.prefUUID as id,
	canonicalConcept.isDeprecated as isDeprecated,
	type(rel) as predicate,
	labels(canonicalConcept) as types,
	canonicalConcept.prefLabel as prefLabel,
	canonicalConcept.geonamesFeatureCode as geonamesFeatureCode,
	canonicalConcept.leiCode as leiCode,
	figi.figiCode as figi,
	naics.industryIdentifier as naicsIdentifier,
	naics.prefLabel as naicsPrefLabel,
	naicsRel.rank as naicsRank,
	rel.lifecycle as lifecycle,
	rel.publication as publication
UNION
MATCH (content:Content{uuid:$contentUUID})-[rel]-(:Concept)-[:EQUIVALENT_TO]->(canonicalBrand:Brand)
OPTIONAL MATCH (canonicalBrand)<-[:EQUIVALENT_TO]-(leafBrand:Brand)-[r:HAS_PARENT*0..]->(parentBrand:Brand)-[:EQUIVALENT_TO]->(canonicalParent:Brand)
RETURN
	DISTINCT canonicalParent.prefUUID as id,
	canonicalParent.isDeprecated as isDeprecated,
	\"IMPLICITLY_CLASSIFIED_BY\" as predicate,
	labels(canonicalParent) as types,
	canonicalParent.prefLabel as prefLabel,
	null as geonamesFeatureCode,
	null as leiCode,
	null as figi,
	null as naicsIdentifier,
	null as naicsPrefLabel,
	null as naicsRank,
	rel.lifecycle as lifecycle,
	rel.publication as publication
UNION
MATCH (content:Content{uuid:$contentUUID})-[rel:ABOUT]-(:Concept)-[:EQUIVALENT_TO]->(canonicalConcept:Concept)
MATCH (canonicalConcept)<-[:EQUIVALENT_TO]-(leafConcept:Topic)<-[:IMPLIED_BY*1..]-(impliedByBrand:Brand)-[:EQUIVALENT_TO]->(canonicalBrand:Brand)
RETURN
	DISTINCT canonicalBrand.prefUUID as id,
	canonicalBrand.isDeprecated as isDeprecated,
	\"IMPLICITLY_CLASSIFIED_BY\" as predicate,
	labels(canonicalBrand) as types,
	canonicalBrand.prefLabel as prefLabel,
	null as geonamesFeatureCode,
	null as leiCode,
	null as figi,
	null as naicsIdentifier,
	null as naicsPrefLabel,
	null as naicsRank,
	rel.lifecycle as lifecycle,
	rel.publication as publication
UNION
MATCH (content:Content{uuid:$contentUUID})-[rel:ABOUT]-(:Concept)-[:EQUIVALENT_TO]->(canonicalConcept:Concept)
MATCH (canonicalConcept)<-[:EQUIVALENT_TO]-(leafConcept:Concept)-[:HAS_BROADER*1..]->(implicit:Concept)-[:EQUIVALENT_TO]->(canonicalImplicit)
WHERE NOT (canonicalImplicit)<-[:EQUIVALENT_TO]-(:Concept)<-[:ABOUT]-(content) // filter out the original abouts
RETURN
	DISTINCT canonicalImplicit.prefUUID as id,
	canonicalImplicit.isDeprecated as isDeprecated,
	\"IMPLICITLY_ABOUT\" as predicate,
	labels(canonicalImplicit) as types,
	canonicalImplicit.prefLabel as prefLabel,
	canonicalImplicit.geonamesFeatureCode as geonamesFeatureCode,
	null as leiCode,
	null as figi,
	null as naicsIdentifier,
	null as naicsPrefLabel,
	null as naicsRank,
	rel.lifecycle as lifecycle,
	rel.publication as publication
UNION
MATCH (content:Content{uuid:$contentUUID})-[rel:ABOUT]-(:Concept)-[:EQUIVALENT_TO]->(canonicalConcept:Concept)
MATCH (canonicalConcept)<-[:EQUIVALENT_TO]-(leafConcept:Location)-[:IS_PART_OF*1..]->(implicit:Concept)-[:EQUIVALENT_TO]->(canonicalImplicit)
WHERE NOT (canonicalImplicit)<-[:EQUIVALENT_TO]-(:Concept)<-[:ABOUT]-(content) // filter out the original abouts
RETURN
	DISTINCT canonicalImplicit.prefUUID as id,
	canonicalImplicit.isDeprecated as isDeprecated,
	\"IMPLICITLY_ABOUT\" as predicate,
	labels(canonicalImplicit) as types,
	canonicalImplicit.prefLabel as prefLabel,
	canonicalImplicit.geonamesFeatureCode as geonamesFeatureCode,
	null as leiCode,
	null as figi,
	null as naicsIdentifier,
	null as naicsPrefLabel,
	null as naicsRank,
	rel.lifecycle as lifecycle,
	rel.publication as publication
";

/// Reads public annotations for content from Neo4j.
#[derive(Debug, Clone)]
pub struct CypherDriver {
    client: Neo4jClient,
    base_url: String,
}

impl CypherDriver {
    /// `base_url` is the public API root used to build each concept's
    /// `apiUrl`.
    pub fn new(client: Neo4jClient, base_url: String) -> Self {
        Self { client, base_url }
    }
}

/// Maps every well-formed row, skipping the rest. `found` reports whether
/// any row mapped, so content with rows that are all unmappable reads the
/// same as content with no rows.
fn collect_annotations(response: &QueryResponse, base_url: &str) -> (Vec<Annotation>, bool) {
    let mut annotations = Vec::new();
    let mut found = false;

    for row in response.rows() {
        let neo: NeoAnnotation = match serde_json::from_value(Value::Object(row)) {
            Ok(neo) => neo,
            Err(e) => {
                debug!(error = %e, "skipping malformed annotation row");
                continue;
            }
        };
        match map_annotation(neo, base_url) {
            Ok(ann) => {
                found = true;
                annotations.push(ann);
            }
            Err(e) => debug!(error = %e, "skipping unmappable annotation row"),
        }
    }

    (annotations, found)
}

#[async_trait]
impl AnnotationsRepository for CypherDriver {
    #[instrument(skip(self), fields(subsystem = "store", op = "read", content_uuid = %content_uuid))]
    async fn read(&self, content_uuid: &str, bookmark: Option<&str>) -> Result<ReadResult> {
        let bookmarks: Vec<String> = bookmark.map(String::from).into_iter().collect();
        let response = self
            .client
            .run(
                ANNOTATIONS_QUERY,
                json!({ "contentUUID": content_uuid }),
                &bookmarks,
            )
            .await?;

        let (annotations, found) = collect_annotations(&response, &self.base_url);
        debug!(
            row_count = response.data.values.len(),
            output_count = annotations.len(),
            found,
            "annotations read"
        );
        Ok(ReadResult { annotations, found })
    }

    async fn check_connectivity(&self) -> Result<()> {
        self.client.run("RETURN 1", json!({}), &[]).await.map(|_| ())
    }
}
