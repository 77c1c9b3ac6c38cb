//! Wire payloads accepted by the intake endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{ManualFallbackDraft, TicketRequestDraft};

/// Fixed tag identifying this origin system downstream.
pub const ORIGIN_TAG: &str = "passe-facil-wizard";

/// Serialized form of a completed ticket draft: every draft field plus the
/// formatted guardian tax ID, the submission instant, and the origin tag.
#[derive(Debug, Serialize)]
pub struct TicketSubmission<'a> {
    #[serde(flatten)]
    pub draft: &'a TicketRequestDraft,
    pub guardian_tax_id: &'a str,
    pub submitted_at: DateTime<Utc>,
    pub origin: &'static str,
}

/// Serialized form of a completed manual fallback draft. The guardian tax ID
/// already lives inside the draft on this path.
#[derive(Debug, Serialize)]
pub struct ManualSubmission<'a> {
    #[serde(flatten)]
    pub draft: &'a ManualFallbackDraft,
    pub submitted_at: DateTime<Utc>,
    pub origin: &'static str,
}
