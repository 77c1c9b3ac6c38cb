//! Required-field gate run before each submission path.
//!
//! Presence is judged on the formatted value only; digit counts are not
//! checked here (the masks are cosmetic by design).

use crate::domain::{ManualFallbackDraft, ManualField, TicketField, TicketRequestDraft};
use crate::errors::ValidationError;

/// Checks the ticket draft's required set. Complement is optional.
pub fn check_ticket(draft: &TicketRequestDraft) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = TicketField::REQUIRED
        .iter()
        .filter(|field| draft.value(**field).trim().is_empty())
        .map(|field| field.label())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}

/// Checks the manual fallback draft; every field is required.
pub fn check_manual(draft: &ManualFallbackDraft) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = ManualField::REQUIRED
        .iter()
        .filter(|field| draft.value(**field).trim().is_empty())
        .map(|field| field.label())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}
