//! Structured logging schema and field name constants.
//!
//! All crates use these field names for structured logging so log
//! aggregation tools can query by standardized names across the service.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, request still served |
//! | INFO  | Lifecycle events (startup, shutdown), request completions |
//! | DEBUG | Filter decisions, dropped rows, intermediate counts |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID propagated from the inbound request to the response.
/// Format: UUIDv7 (time-ordered) when generated by this service.
pub const REQUEST_ID: &str = "request_id";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Content UUID whose annotations are being resolved.
pub const CONTENT_UUID: &str = "content_uuid";

/// Concept UUID of an annotation target.
pub const CONCEPT_UUID: &str = "concept_uuid";

/// Annotation predicate (relationship name or URI).
pub const PREDICATE: &str = "predicate";

/// Annotation lifecycle tag.
pub const LIFECYCLE: &str = "lifecycle";

// ─── Pipeline fields ───────────────────────────────────────────────────────

/// Filter stage emitting the event.
pub const FILTER: &str = "filter";

/// Number of records entering a filter stage.
pub const INPUT_COUNT: &str = "input_count";

/// Number of records leaving a filter stage.
pub const OUTPUT_COUNT: &str = "output_count";

// ─── Store fields ──────────────────────────────────────────────────────────

/// Number of rows returned by a store query.
pub const ROW_COUNT: &str = "row_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
