use thiserror::Error;

use crate::core::wizard::WizardStep;
use crate::domain::draft::InvalidShift;

/// Failures raised by the external gateway collaborators.
///
/// Every variant is recoverable; the wizard stays in its pre-action step and
/// the user may retry the same action.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("student lookup unavailable: {0}")]
    LookupUnavailable(String),
    #[error("address lookup unavailable: {0}")]
    AddressLookupUnavailable(String),
    #[error("submission endpoint unavailable: {0}")]
    SubmissionUnavailable(String),
    #[error("submission rejected with status {status}")]
    SubmissionRejected { status: u16 },
}

/// Required-field check failure listing the offending field names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

/// Error type covering every wizard operation.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("`{operation}` is not allowed in step {step:?}")]
    StepMismatch {
        operation: &'static str,
        step: WizardStep,
    },
    #[error("field `{0}` is read-only")]
    ReadOnlyField(&'static str),
    #[error("no candidate at position {0}")]
    UnknownCandidate(usize),
    #[error("tax ID must contain at least one digit")]
    EmptyTaxId,
    #[error("postal code must normalize to exactly 8 digits")]
    MalformedPostalCode,
    #[error(transparent)]
    Shift(#[from] InvalidShift),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
