//! soom-gemini
//!
//! Prompt construction, the generative-language completion client, and
//! recovery of structured output from free-text completions.

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod generate;
pub mod prompt;
