//! # annotations-store
//!
//! Neo4j-backed persistence for public annotations:
//!
//! - [`client`]: HTTP client for the Neo4j Query API
//! - [`cypher`]: the annotations read query and its repository driver
//! - [`mapping`]: Neo4j rows to wire-format annotations
//! - [`ontology`]: concept type hierarchies and public API URLs

pub mod client;
pub mod cypher;
pub mod mapping;
pub mod ontology;

pub use annotations_core::*;

pub use client::{Neo4jClient, QueryResponse, DEFAULT_NEO_DATABASE, DEFAULT_NEO_URL};
pub use cypher::CypherDriver;
pub use mapping::ID_PREFIX;
pub use ontology::{api_url, type_uris};
