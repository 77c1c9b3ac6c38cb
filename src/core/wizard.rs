//! Step state machine driving the requisition wizard.
//!
//! One controller instance per session owns the step, both drafts, the
//! candidate list, and the bound record. Transitions follow the fixed graph
//! `search -> select | display | manual`, `select -> display`,
//! `display -> success`, `manual -> success`, `success -> search` (reset);
//! operations invoked outside their legal step are rejected with a typed
//! error.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::submission::{ManualSubmission, TicketSubmission, ORIGIN_TAG};
use crate::core::validator;
use crate::domain::{
    ManualFallbackDraft, ManualField, StudentRecord, TicketField, TicketRequestDraft,
};
use crate::errors::WizardError;
use crate::gateway::{AddressDirectory, IntakeEndpoint, StudentDirectory};
use crate::masks;

/// Wizard position. `Search` is initial; `Success` is terminal until reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Search,
    Select,
    Display,
    Manual,
    Success,
}

/// How a lookup settled, for presentation-layer notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// No match; the wizard moved to manual entry.
    NoMatch,
    /// Exactly one match was bound; carries the student name.
    Bound(String),
    /// Several matches; the wizard awaits a choice. Carries the count.
    Ambiguous(usize),
}

/// How a postal-code resolution settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressOutcome {
    /// Address fields were overwritten from the directory.
    Filled,
    /// Directory answered with its not-found sentinel; fields untouched.
    NotFound,
}

/// External collaborators the controller drives.
pub struct Gateways {
    pub students: Box<dyn StudentDirectory>,
    pub addresses: Box<dyn AddressDirectory>,
    pub intake: Box<dyn IntakeEndpoint>,
}

/// Owns the wizard state machine and the records being assembled.
pub struct WizardController {
    session: Uuid,
    step: WizardStep,
    guardian_tax_id: String,
    candidates: Vec<StudentRecord>,
    bound: Option<StudentRecord>,
    ticket: TicketRequestDraft,
    manual: ManualFallbackDraft,
    gateways: Gateways,
}

impl WizardController {
    pub fn new(gateways: Gateways) -> Self {
        Self {
            session: Uuid::new_v4(),
            step: WizardStep::Search,
            guardian_tax_id: String::new(),
            candidates: Vec::new(),
            bound: None,
            ticket: TicketRequestDraft::default(),
            manual: ManualFallbackDraft::default(),
            gateways,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The queried guardian tax ID in its masked form; empty before a lookup.
    pub fn guardian_tax_id(&self) -> &str {
        &self.guardian_tax_id
    }

    pub fn candidates(&self) -> &[StudentRecord] {
        &self.candidates
    }

    pub fn bound_record(&self) -> Option<&StudentRecord> {
        self.bound.as_ref()
    }

    pub fn ticket_draft(&self) -> &TicketRequestDraft {
        &self.ticket
    }

    pub fn manual_draft(&self) -> &ManualFallbackDraft {
        &self.manual
    }

    /// Looks the guardian tax ID up in the student directory and settles the
    /// next step from the match count: none -> manual entry, one -> bound
    /// display, many -> candidate selection. A gateway failure leaves the
    /// wizard in `Search` with the query retained for retry.
    pub fn submit_lookup_query(&mut self, tax_id: &str) -> Result<LookupOutcome, WizardError> {
        self.require_step("lookup", &[WizardStep::Search])?;
        let digits = masks::digits_only(tax_id);
        if digits.is_empty() {
            return Err(WizardError::EmptyTaxId);
        }
        self.guardian_tax_id = masks::tax_id(&digits);

        let mut matches = self.gateways.students.find_by_guardian_tax_id(&digits)?;
        match matches.len() {
            0 => {
                self.manual.guardian_tax_id = self.guardian_tax_id.clone();
                self.step = WizardStep::Manual;
                info!(session = %self.session, "no record matched, switching to manual entry");
                Ok(LookupOutcome::NoMatch)
            }
            1 => {
                let record = matches.remove(0);
                let name = record.name.clone();
                self.bind(record);
                Ok(LookupOutcome::Bound(name))
            }
            count => {
                self.candidates = matches;
                self.step = WizardStep::Select;
                info!(session = %self.session, count, "multiple records matched");
                Ok(LookupOutcome::Ambiguous(count))
            }
        }
    }

    /// Binds one of the stored candidates. Only legal in `Select`.
    pub fn choose_candidate(&mut self, index: usize) -> Result<(), WizardError> {
        self.require_step("choose candidate", &[WizardStep::Select])?;
        if index >= self.candidates.len() {
            return Err(WizardError::UnknownCandidate(index));
        }
        let record = self.candidates.remove(index);
        self.candidates.clear();
        self.bind(record);
        Ok(())
    }

    /// Writes a ticket-draft field. Fields owned by the bound record reject
    /// mutation; masked fields re-derive their display form on every write.
    pub fn update_ticket_field(
        &mut self,
        field: TicketField,
        value: &str,
    ) -> Result<(), WizardError> {
        self.require_step("update field", &[WizardStep::Display])?;
        if field.is_record_owned() && self.bound.is_some() {
            return Err(WizardError::ReadOnlyField(field.label()));
        }
        self.ticket.set(field, value)?;
        Ok(())
    }

    /// Writes a manual-draft field. The guardian tax ID stays immutable once
    /// pre-filled from the query.
    pub fn update_manual_field(
        &mut self,
        field: ManualField,
        value: &str,
    ) -> Result<(), WizardError> {
        self.require_step("update field", &[WizardStep::Manual])?;
        if field == ManualField::GuardianTaxId {
            return Err(WizardError::ReadOnlyField(field.label()));
        }
        self.manual.set(field, value)?;
        Ok(())
    }

    /// Resolves a postal code and, on a hit, overwrites the draft's street,
    /// district, city, and region. A not-found sentinel leaves those fields
    /// untouched and is reported as a non-fatal notice.
    pub fn resolve_postal_code(&mut self, code: &str) -> Result<AddressOutcome, WizardError> {
        self.require_step("resolve postal code", &[WizardStep::Display])?;
        let digits = masks::digits_only(code);
        if digits.len() != 8 {
            return Err(WizardError::MalformedPostalCode);
        }
        self.ticket.postal_code = masks::postal_code(&digits);

        match self.gateways.addresses.resolve(&digits)? {
            Some(address) => {
                self.ticket.street = address.street;
                self.ticket.district = address.district;
                self.ticket.city = address.city;
                self.ticket.region = address.region;
                info!(session = %self.session, code = %digits, "postal code resolved");
                Ok(AddressOutcome::Filled)
            }
            None => {
                warn!(session = %self.session, code = %digits, "postal code not found");
                Ok(AddressOutcome::NotFound)
            }
        }
    }

    /// Validates the active draft and hands it to the intake endpoint. Any
    /// failure leaves the wizard in place with the draft intact for retry.
    pub fn submit(&mut self) -> Result<(), WizardError> {
        self.require_step("submit", &[WizardStep::Display, WizardStep::Manual])?;

        let payload = if self.step == WizardStep::Display {
            validator::check_ticket(&self.ticket).map_err(|err| {
                warn!(session = %self.session, %err, "submission blocked by validation");
                err
            })?;
            serde_json::to_value(TicketSubmission {
                draft: &self.ticket,
                guardian_tax_id: &self.guardian_tax_id,
                submitted_at: Utc::now(),
                origin: ORIGIN_TAG,
            })?
        } else {
            validator::check_manual(&self.manual).map_err(|err| {
                warn!(session = %self.session, %err, "submission blocked by validation");
                err
            })?;
            serde_json::to_value(ManualSubmission {
                draft: &self.manual,
                submitted_at: Utc::now(),
                origin: ORIGIN_TAG,
            })?
        };

        self.gateways.intake.submit(&payload)?;
        self.step = WizardStep::Success;
        info!(session = %self.session, origin = ORIGIN_TAG, "requisition submitted");
        Ok(())
    }

    /// Returns to `Search` with both drafts, the candidate list, the bound
    /// record, and the query cleared. Legal from any step as an escape hatch.
    pub fn reset(&mut self) {
        self.step = WizardStep::Search;
        self.guardian_tax_id.clear();
        self.candidates.clear();
        self.bound = None;
        self.ticket = TicketRequestDraft::default();
        self.manual = ManualFallbackDraft::default();
        info!(session = %self.session, "wizard reset");
    }

    fn bind(&mut self, record: StudentRecord) {
        self.ticket.student_name = record.name.clone();
        self.ticket.course = record.course.clone();
        self.ticket.mobile_phone = record.contact_phone.clone();
        self.bound = Some(record);
        self.step = WizardStep::Display;
        info!(session = %self.session, "record bound, entering display step");
    }

    fn require_step(
        &self,
        operation: &'static str,
        allowed: &[WizardStep],
    ) -> Result<(), WizardError> {
        if allowed.contains(&self.step) {
            Ok(())
        } else {
            Err(WizardError::StepMismatch {
                operation,
                step: self.step,
            })
        }
    }
}
