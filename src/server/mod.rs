//! Connection acceptance
//!
//! This module owns the listening socket and the admission gate that caps
//! how many connections are handled at once.

pub mod admission;
pub mod listener;

pub use admission::{Admission, AdmissionSlot};
