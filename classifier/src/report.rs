//! Classification result paired with its input.

use serde::{Deserialize, Serialize};
use std::fmt;

use addrcheck_types::AddressType;

use crate::classify::validate;

/// An address and the label it was classified as.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub address: String,
    #[serde(rename = "type")]
    pub kind: AddressType,
}

impl Report {
    /// Classify `address` and capture the result.
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        let kind = validate(&address);
        Self { address, kind }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address: {}\nType: {}", self.address, self.kind)
    }
}
