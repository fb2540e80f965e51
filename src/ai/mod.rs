//! AI module for turning natural-language tasks into shell commands.
//!
//! This module builds prompts, talks to the OpenAI-compatible chat API,
//! and parses the structured response into a command suggestion.

pub mod client;
pub mod parser;
pub mod prompt;

pub use client::{AiClient, GeneratedCommand};
