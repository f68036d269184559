//! Annotation lifecycle tags and the public lifecycle name table.
//!
//! A lifecycle identifies the authoring pipeline that wrote an annotation.
//! Relationships in the store carry the full tag (`annotations-pac`); the
//! API accepts the short public names (`pac`) and maps them through
//! [`lifecycle_tag`].

// =============================================================================
// LIFECYCLE TAGS
// =============================================================================

/// Human-curated editorial annotations. Takes precedence over machine
/// lifecycles when present.
pub const PAC_LIFECYCLE: &str = "annotations-pac";

/// First-generation machine annotations.
pub const V1_LIFECYCLE: &str = "annotations-v1";

/// Second-generation machine annotations, co-equal with pac.
pub const V2_LIFECYCLE: &str = "annotations-v2";

/// Video pipeline annotations.
pub const NEXT_VIDEO_LIFECYCLE: &str = "annotations-next-video";

/// Manually written annotations.
pub const MANUAL_LIFECYCLE: &str = "annotations-manual";

// =============================================================================
// PUBLIC NAME TABLE
// =============================================================================

/// Maps a public lifecycle name, as accepted in `lifecycle` query
/// parameters, to the tag stored on annotation relationships. Returns
/// `None` for unrecognized names; callers treat that as a client error.
pub fn lifecycle_tag(name: &str) -> Option<&'static str> {
    match name {
        "next-video" => Some(NEXT_VIDEO_LIFECYCLE),
        "v1" => Some(V1_LIFECYCLE),
        "pac" => Some(PAC_LIFECYCLE),
        "v2" => Some(V2_LIFECYCLE),
        "manual" => Some(MANUAL_LIFECYCLE),
        _ => None,
    }
}
