//! Ready-made prompts and helpers built on top of `ideabox-core`.
//!
//! * [`fragments`] – small reusable [`IntoPrompt`](ideabox_core::template::IntoPrompt) pieces.
//! * [`templates`] – the four marketing tasks, each with its fixed budget.
//! * [`copy`] – [`MarketingCopy`], one-call task helpers for any generator.
//! * [`password`] – the password-strength validator.

pub mod copy;
pub mod fragments;
pub mod password;
pub mod templates;

pub use copy::MarketingCopy;
