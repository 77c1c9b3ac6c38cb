#![doc(test(attr(deny(warnings))))]

//! Passe Core implements the student transit-ticket requisition wizard:
//! record lookup by guardian tax ID, postal-code address auto-fill, field
//! masking and validation, and submission to the intake endpoint.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod gateway;
pub mod masks;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Passe Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
