pub mod address;
pub mod common;
pub mod draft;
pub mod student;

pub use address::ResolvedAddress;
pub use draft::{ManualFallbackDraft, ManualField, Shift, TicketField, TicketRequestDraft};
pub use student::StudentRecord;
