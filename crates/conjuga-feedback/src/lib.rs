//! # conjuga-feedback
//!
//! [`IFeedbackGateway`](conjuga_core::traits::IFeedbackGateway) over a
//! Gemini-compatible `generateContent` endpoint.
//!
//! The gateway makes one bounded request per critique and never retries.
//! Upstream output is parsed leniently: strict JSON first, then the
//! outermost JSON span found in the text.

pub mod client;
pub mod parse;
pub mod prompt;
mod wire;

pub use client::{GeminiConfig, GeminiGateway};
pub use parse::{parse_critique, parse_generate_response};
pub use prompt::build_prompt;
