//! Parallel batch validation.
//!
//! Classification holds no shared state, so a batch is split across the
//! rayon thread pool with no coordination. Output order matches input order.

use rayon::prelude::*;

use addrcheck_types::AddressType;

use crate::classify::validate;
use crate::report::Report;

/// Classify every address in `addresses`.
pub fn validate_batch<S: AsRef<str> + Sync>(addresses: &[S]) -> Vec<AddressType> {
    addresses.par_iter().map(|a| validate(a.as_ref())).collect()
}

/// Classify every address in `addresses`, keeping each input alongside its label.
pub fn report_batch<S: AsRef<str> + Sync>(addresses: &[S]) -> Vec<Report> {
    addresses.par_iter().map(|a| Report::new(a.as_ref())).collect()
}
