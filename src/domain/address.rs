use serde::{Deserialize, Serialize};

/// Partial address returned by the postal-code directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub street: String,
    pub district: String,
    pub city: String,
    pub region: String,
}
