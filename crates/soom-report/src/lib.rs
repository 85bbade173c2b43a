//! soom-report
//!
//! Plain-text rendering of the AI suggestion panel and the final
//! three-section report.

pub mod error;
pub mod render;
