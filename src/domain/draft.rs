use std::fmt;

use serde::{Deserialize, Serialize};

use crate::masks;

/// Session a student attends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Morning,
    Afternoon,
}

impl Shift {
    pub fn parse(input: &str) -> Option<Shift> {
        match input.trim().to_lowercase().as_str() {
            "morning" | "manha" | "manhã" => Some(Shift::Morning),
            "afternoon" | "tarde" => Some(Shift::Afternoon),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Afternoon => "afternoon",
        }
    }
}

/// Raised when a shift value matches neither session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidShift(pub String);

impl fmt::Display for InvalidShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized shift `{}` (use morning or afternoon)",
            self.0
        )
    }
}

impl std::error::Error for InvalidShift {}

/// Addressable fields of the ticket draft.
///
/// Labels feed prompts and missing-field reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketField {
    StudentName,
    Course,
    Shift,
    RegistrationNumber,
    DocumentNumber,
    DocumentIssueDate,
    StudentTaxId,
    MobilePhone,
    LandlinePhone,
    GuardianName,
    PostalCode,
    Street,
    HouseNumber,
    Complement,
    District,
    City,
    Region,
}

impl TicketField {
    /// Every required field, in prompt order. Complement is optional.
    pub const REQUIRED: [TicketField; 16] = [
        TicketField::StudentName,
        TicketField::Course,
        TicketField::Shift,
        TicketField::RegistrationNumber,
        TicketField::DocumentNumber,
        TicketField::DocumentIssueDate,
        TicketField::StudentTaxId,
        TicketField::MobilePhone,
        TicketField::LandlinePhone,
        TicketField::GuardianName,
        TicketField::PostalCode,
        TicketField::Street,
        TicketField::HouseNumber,
        TicketField::District,
        TicketField::City,
        TicketField::Region,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TicketField::StudentName => "student name",
            TicketField::Course => "course",
            TicketField::Shift => "shift",
            TicketField::RegistrationNumber => "registration number",
            TicketField::DocumentNumber => "identity document number",
            TicketField::DocumentIssueDate => "identity document issue date",
            TicketField::StudentTaxId => "student tax ID",
            TicketField::MobilePhone => "mobile phone",
            TicketField::LandlinePhone => "landline phone",
            TicketField::GuardianName => "responsible-party name",
            TicketField::PostalCode => "postal code",
            TicketField::Street => "street",
            TicketField::HouseNumber => "house number",
            TicketField::Complement => "complement",
            TicketField::District => "district",
            TicketField::City => "city",
            TicketField::Region => "region",
        }
    }

    /// Fields owned by the bound student record once one is selected.
    pub fn is_record_owned(&self) -> bool {
        matches!(
            self,
            TicketField::StudentName | TicketField::Course | TicketField::MobilePhone
        )
    }
}

/// The mutable record assembled for submission when a student record was
/// found.
///
/// Created empty at wizard start, populated incrementally, frozen and sent at
/// submission, discarded on reset or success acknowledgement. Structured
/// fields hold their masked display form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketRequestDraft {
    pub student_name: String,
    pub course: String,
    pub shift: Option<Shift>,
    pub registration_number: String,
    pub document_number: String,
    pub document_issue_date: String,
    pub student_tax_id: String,
    pub mobile_phone: String,
    pub landline_phone: String,
    pub guardian_name: String,
    pub postal_code: String,
    pub street: String,
    pub house_number: String,
    pub complement: String,
    pub district: String,
    pub city: String,
    pub region: String,
}

impl TicketRequestDraft {
    /// Formatted display value for `field`; empty when unset.
    pub fn value(&self, field: TicketField) -> String {
        match field {
            TicketField::StudentName => self.student_name.clone(),
            TicketField::Course => self.course.clone(),
            TicketField::Shift => self
                .shift
                .map(|shift| shift.label().to_string())
                .unwrap_or_default(),
            TicketField::RegistrationNumber => self.registration_number.clone(),
            TicketField::DocumentNumber => self.document_number.clone(),
            TicketField::DocumentIssueDate => self.document_issue_date.clone(),
            TicketField::StudentTaxId => self.student_tax_id.clone(),
            TicketField::MobilePhone => self.mobile_phone.clone(),
            TicketField::LandlinePhone => self.landline_phone.clone(),
            TicketField::GuardianName => self.guardian_name.clone(),
            TicketField::PostalCode => self.postal_code.clone(),
            TicketField::Street => self.street.clone(),
            TicketField::HouseNumber => self.house_number.clone(),
            TicketField::Complement => self.complement.clone(),
            TicketField::District => self.district.clone(),
            TicketField::City => self.city.clone(),
            TicketField::Region => self.region.clone(),
        }
    }

    /// Writes `value` into `field`, re-deriving the masked form for the
    /// structured fields from the raw digit stream.
    pub fn set(&mut self, field: TicketField, value: &str) -> Result<(), InvalidShift> {
        match field {
            TicketField::StudentName => self.student_name = value.trim().to_string(),
            TicketField::Course => self.course = value.trim().to_string(),
            TicketField::Shift => {
                self.shift =
                    Some(Shift::parse(value).ok_or_else(|| InvalidShift(value.to_string()))?);
            }
            TicketField::RegistrationNumber => {
                self.registration_number = value.trim().to_string()
            }
            TicketField::DocumentNumber => self.document_number = masks::document_number(value),
            TicketField::DocumentIssueDate => self.document_issue_date = masks::date(value),
            TicketField::StudentTaxId => self.student_tax_id = masks::tax_id(value),
            TicketField::MobilePhone => self.mobile_phone = value.trim().to_string(),
            TicketField::LandlinePhone => self.landline_phone = value.trim().to_string(),
            TicketField::GuardianName => self.guardian_name = value.trim().to_string(),
            TicketField::PostalCode => self.postal_code = masks::postal_code(value),
            TicketField::Street => self.street = value.trim().to_string(),
            TicketField::HouseNumber => self.house_number = value.trim().to_string(),
            TicketField::Complement => self.complement = value.trim().to_string(),
            TicketField::District => self.district = value.trim().to_string(),
            TicketField::City => self.city = value.trim().to_string(),
            TicketField::Region => self.region = value.trim().to_string(),
        }
        Ok(())
    }
}

/// Addressable fields of the manual fallback draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualField {
    StudentName,
    GuardianName,
    GuardianTaxId,
    Address,
    Phone,
    Email,
    School,
    Grade,
    Shift,
}

impl ManualField {
    /// Every field is required on the fallback path.
    pub const REQUIRED: [ManualField; 9] = [
        ManualField::StudentName,
        ManualField::GuardianName,
        ManualField::GuardianTaxId,
        ManualField::Address,
        ManualField::Phone,
        ManualField::Email,
        ManualField::School,
        ManualField::Grade,
        ManualField::Shift,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ManualField::StudentName => "student name",
            ManualField::GuardianName => "responsible-party name",
            ManualField::GuardianTaxId => "responsible-party tax ID",
            ManualField::Address => "address",
            ManualField::Phone => "phone",
            ManualField::Email => "email",
            ManualField::School => "school name",
            ManualField::Grade => "grade/series",
            ManualField::Shift => "shift",
        }
    }
}

/// Alternate record used only when no student record matches the queried tax
/// ID. The guardian tax ID is pre-filled from the query and stays immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManualFallbackDraft {
    pub student_name: String,
    pub guardian_name: String,
    pub guardian_tax_id: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub school: String,
    pub grade: String,
    pub shift: Option<Shift>,
}

impl ManualFallbackDraft {
    /// Formatted display value for `field`; empty when unset.
    pub fn value(&self, field: ManualField) -> String {
        match field {
            ManualField::StudentName => self.student_name.clone(),
            ManualField::GuardianName => self.guardian_name.clone(),
            ManualField::GuardianTaxId => self.guardian_tax_id.clone(),
            ManualField::Address => self.address.clone(),
            ManualField::Phone => self.phone.clone(),
            ManualField::Email => self.email.clone(),
            ManualField::School => self.school.clone(),
            ManualField::Grade => self.grade.clone(),
            ManualField::Shift => self
                .shift
                .map(|shift| shift.label().to_string())
                .unwrap_or_default(),
        }
    }

    /// Writes `value` into `field`. The guardian tax ID is not settable here;
    /// the controller rejects it as read-only before this point.
    pub fn set(&mut self, field: ManualField, value: &str) -> Result<(), InvalidShift> {
        match field {
            ManualField::StudentName => self.student_name = value.trim().to_string(),
            ManualField::GuardianName => self.guardian_name = value.trim().to_string(),
            ManualField::GuardianTaxId => self.guardian_tax_id = masks::tax_id(value),
            ManualField::Address => self.address = value.trim().to_string(),
            ManualField::Phone => self.phone = value.trim().to_string(),
            ManualField::Email => self.email = value.trim().to_string(),
            ManualField::School => self.school = value.trim().to_string(),
            ManualField::Grade => self.grade = value.trim().to_string(),
            ManualField::Shift => {
                self.shift =
                    Some(Shift::parse(value).ok_or_else(|| InvalidShift(value.to_string()))?);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_parses_both_sessions_and_rejects_noise() {
        assert_eq!(Shift::parse("Morning"), Some(Shift::Morning));
        assert_eq!(Shift::parse("tarde"), Some(Shift::Afternoon));
        assert_eq!(Shift::parse("night"), None);
    }

    #[test]
    fn ticket_set_masks_structured_fields() {
        let mut draft = TicketRequestDraft::default();
        draft.set(TicketField::StudentTaxId, "39053344705").unwrap();
        draft.set(TicketField::PostalCode, "01310100").unwrap();
        draft.set(TicketField::DocumentNumber, "123456789").unwrap();
        draft.set(TicketField::DocumentIssueDate, "05032019").unwrap();
        assert_eq!(draft.student_tax_id, "390.533.447-05");
        assert_eq!(draft.postal_code, "01310-100");
        assert_eq!(draft.document_number, "12.345.678-9");
        assert_eq!(draft.document_issue_date, "05/03/2019");
    }

    #[test]
    fn value_round_trips_every_ticket_field() {
        let mut draft = TicketRequestDraft::default();
        draft.set(TicketField::Street, "Av. Paulista").unwrap();
        draft.set(TicketField::Shift, "morning").unwrap();
        assert_eq!(draft.value(TicketField::Street), "Av. Paulista");
        assert_eq!(draft.value(TicketField::Shift), "morning");
        assert_eq!(draft.value(TicketField::Complement), "");
    }
}
