//! External collaborator seams for the wizard.
//!
//! The controller only sees these traits; the HTTP implementations live in
//! [`http`] and in-memory fakes back the test suite.

pub mod http;

use crate::domain::{ResolvedAddress, StudentRecord};
use crate::errors::GatewayError;

/// Queries the student-record store by responsible-party tax ID.
pub trait StudentDirectory: Send + Sync {
    /// Equality lookup on the guardian tax ID, digits only, no punctuation.
    /// Returns every matching row.
    fn find_by_guardian_tax_id(&self, digits: &str)
        -> Result<Vec<StudentRecord>, GatewayError>;
}

/// Resolves an 8-digit postal code to a partial address.
pub trait AddressDirectory: Send + Sync {
    /// `Ok(None)` is the store's "not found" sentinel.
    fn resolve(&self, digits: &str) -> Result<Option<ResolvedAddress>, GatewayError>;
}

/// Accepts a finished request payload for downstream processing.
pub trait IntakeEndpoint: Send + Sync {
    fn submit(&self, payload: &serde_json::Value) -> Result<(), GatewayError>;
}

impl<T: IntakeEndpoint + ?Sized> IntakeEndpoint for std::sync::Arc<T> {
    fn submit(&self, payload: &serde_json::Value) -> Result<(), GatewayError> {
        (**self).submit(payload)
    }
}
