pub mod submission;
pub mod validator;
pub mod wizard;

pub use wizard::{AddressOutcome, Gateways, LookupOutcome, WizardController, WizardStep};
