//! Prompt construction helpers for IdeaBox.
//!
//! * [`builder::PromptBuilder`] – fixed-format instruction text.
//! * [`chain::PromptChain`] – ordered composition of message fragments.

pub mod builder;
pub mod chain;
