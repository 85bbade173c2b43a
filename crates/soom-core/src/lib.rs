//! soom-core
//!
//! Pure domain types for the clinic intake workflow: fixed vocabularies,
//! patient intake, the filtered AI suggestion, the clinician-confirmed final
//! plan and the per-session context. No network dependency.

pub mod error;
pub mod models;
pub mod reconcile;
pub mod vocab;
