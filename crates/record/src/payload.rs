//! Payload types
//!
//! `Payload` is the value threaded through a pipeline's stages. Each stage
//! consumes one payload and produces another (or fails). The enriched
//! variant is produced by transform-family stages only and carries the
//! original value plus enrichment metadata.

use std::fmt;

/// A value flowing through the pipeline
///
/// The set of shapes is closed: absent input, raw text (JSON-like,
/// CSV-like, free-text stream data, or a summary string fed back in by
/// chaining), or an enriched record.
///
/// # Example
///
/// ```
/// use trellis_record::Payload;
///
/// let payload = Payload::text("user,action,timestamp");
/// assert_eq!(payload.as_text(), Some("user,action,timestamp"));
/// assert!(!payload.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    /// Absent input. Rejected by the input stage.
    #[default]
    Empty,

    /// Raw text record
    Text(String),

    /// Output of a transform-family stage
    Enriched(EnrichedRecord),
}

impl Payload {
    /// Create a text payload
    #[inline]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Get the raw text, if this is a text payload
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the enriched record, if this payload has been enriched
    #[inline]
    pub fn as_enriched(&self) -> Option<&EnrichedRecord> {
        match self {
            Self::Enriched(record) => Some(record),
            _ => None,
        }
    }

    /// Check whether this payload is absent
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A payload wrapped with enrichment metadata
///
/// Transform stages wrap their input rather than replace it: the original
/// value is kept in `payload` and the `meta` flags describe what the stage
/// did to it.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    /// The original value this record was built from
    pub payload: Box<Payload>,

    /// Enrichment/validation flags
    pub meta: RecordMeta,
}

impl EnrichedRecord {
    /// Wrap a payload with the given metadata flags
    pub fn new(payload: Payload, meta: RecordMeta) -> Self {
        Self {
            payload: Box::new(payload),
            meta,
        }
    }

    /// Wrap a payload as fully enriched and validated
    pub fn enriched(payload: Payload) -> Self {
        Self::new(payload, RecordMeta::ENRICHED)
    }

    /// Wrap a payload in degraded mode (no enrichment, no validation)
    pub fn degraded(payload: Payload) -> Self {
        Self::new(payload, RecordMeta::DEGRADED)
    }
}

/// Metadata flags attached to an enriched record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordMeta {
    /// Whether the record was enriched by the transform stage
    pub enriched: bool,

    /// Whether the record passed transform-stage validation
    pub validated: bool,
}

impl RecordMeta {
    /// Flags set by the default transform stage
    pub const ENRICHED: Self = Self {
        enriched: true,
        validated: true,
    };

    /// Flags set by the fallback transform stage
    pub const DEGRADED: Self = Self {
        enriched: false,
        validated: false,
    };
}

impl fmt::Display for RecordMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "enriched={}, validated={}",
            self.enriched, self.validated
        )
    }
}
