use std::sync::{Arc, Mutex};

use passe_core::core::{Gateways, WizardController};
use passe_core::domain::{ResolvedAddress, StudentRecord};
use passe_core::errors::GatewayError;
use passe_core::gateway::{AddressDirectory, IntakeEndpoint, StudentDirectory};

pub fn student(name: &str, code: i64, course: &str, guardian_digits: &str) -> StudentRecord {
    StudentRecord {
        name: name.to_string(),
        student_code: code,
        course: course.to_string(),
        guardian_tax_id: guardian_digits.to_string(),
        contact_phone: "(11) 98888-7777".to_string(),
        contact_email: "guardian@example.com".to_string(),
    }
}

pub fn paulista() -> ResolvedAddress {
    ResolvedAddress {
        street: "Avenida Paulista".to_string(),
        district: "Bela Vista".to_string(),
        city: "São Paulo".to_string(),
        region: "SP".to_string(),
    }
}

/// Directory fake matching on the digits-only guardian tax ID.
pub struct FakeStudents {
    pub rows: Vec<StudentRecord>,
    pub fail: bool,
}

impl StudentDirectory for FakeStudents {
    fn find_by_guardian_tax_id(
        &self,
        digits: &str,
    ) -> Result<Vec<StudentRecord>, GatewayError> {
        if self.fail {
            return Err(GatewayError::LookupUnavailable("store offline".into()));
        }
        Ok(self
            .rows
            .iter()
            .filter(|row| row.guardian_tax_id == digits)
            .cloned()
            .collect())
    }
}

/// Postal directory fake keyed by 8-digit codes; unknown codes answer the
/// not-found sentinel.
pub struct FakeAddresses {
    pub known: Vec<(String, ResolvedAddress)>,
    pub fail: bool,
}

impl AddressDirectory for FakeAddresses {
    fn resolve(&self, digits: &str) -> Result<Option<ResolvedAddress>, GatewayError> {
        if self.fail {
            return Err(GatewayError::AddressLookupUnavailable(
                "directory offline".into(),
            ));
        }
        Ok(self
            .known
            .iter()
            .find(|(code, _)| code == digits)
            .map(|(_, address)| address.clone()))
    }
}

/// Intake fake recording every payload it accepts.
#[derive(Default)]
pub struct RecordingIntake {
    pub received: Mutex<Vec<serde_json::Value>>,
    pub reject_status: Mutex<Option<u16>>,
}

impl RecordingIntake {
    pub fn payloads(&self) -> Vec<serde_json::Value> {
        self.received.lock().expect("intake lock").clone()
    }

    pub fn reject_with(&self, status: u16) {
        *self.reject_status.lock().expect("intake lock") = Some(status);
    }
}

impl IntakeEndpoint for RecordingIntake {
    fn submit(&self, payload: &serde_json::Value) -> Result<(), GatewayError> {
        if let Some(status) = *self.reject_status.lock().expect("intake lock") {
            return Err(GatewayError::SubmissionRejected { status });
        }
        self.received
            .lock()
            .expect("intake lock")
            .push(payload.clone());
        Ok(())
    }
}

pub struct Harness {
    pub wizard: WizardController,
    pub intake: Arc<RecordingIntake>,
}

/// Wizard wired to fakes: the given store rows plus a postal directory that
/// knows CEP 01310-100.
pub fn harness(rows: Vec<StudentRecord>) -> Harness {
    harness_with_addresses(rows, vec![("01310100".to_string(), paulista())], false)
}

pub fn harness_with_addresses(
    rows: Vec<StudentRecord>,
    known: Vec<(String, ResolvedAddress)>,
    addresses_fail: bool,
) -> Harness {
    let intake = Arc::new(RecordingIntake::default());
    let gateways = Gateways {
        students: Box::new(FakeStudents { rows, fail: false }),
        addresses: Box::new(FakeAddresses {
            known,
            fail: addresses_fail,
        }),
        intake: Box::new(Arc::clone(&intake)),
    };
    Harness {
        wizard: WizardController::new(gateways),
        intake,
    }
}

pub fn harness_with_failing_lookup() -> Harness {
    let intake = Arc::new(RecordingIntake::default());
    let gateways = Gateways {
        students: Box::new(FakeStudents {
            rows: Vec::new(),
            fail: true,
        }),
        addresses: Box::new(FakeAddresses {
            known: Vec::new(),
            fail: false,
        }),
        intake: Box::new(Arc::clone(&intake)),
    };
    Harness {
        wizard: WizardController::new(gateways),
        intake,
    }
}
