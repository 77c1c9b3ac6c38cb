use serde::{Deserialize, Serialize};

use crate::domain::common::Displayable;

/// A student row produced by the directory lookup.
///
/// Read-only to the wizard; identity is the student code, unique per record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentRecord {
    pub name: String,
    pub student_code: i64,
    pub course: String,
    /// Responsible party's tax ID, digits only.
    pub guardian_tax_id: String,
    pub contact_phone: String,
    pub contact_email: String,
}

impl Displayable for StudentRecord {
    fn display_label(&self) -> String {
        format!(
            "{} ({}, code {})",
            self.name, self.course, self.student_code
        )
    }
}
