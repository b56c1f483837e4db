//! Provider-agnostic core of the IdeaBox copy generator.
//!
//! | Module        | What it provides                                                   |
//! |---------------|--------------------------------------------------------------------|
//! | [`model`]     | Static model table, [`ProviderId`](model::ProviderId)              |
//! | [`config`]    | Provider credentials read from the environment                     |
//! | [`registry`]  | Availability filtering, default pick, model resolution             |
//! | [`generic`]   | Normalised request / response types                                |
//! | [`provider`]  | Adapter traits and the object-safe [`TextGeneration`] seam         |
//! | [`template`]  | Prompt templates with a fixed generation budget                    |
//! | [`gateway`]   | [`GenerationGateway`], the single dispatch point                   |
//! | [`error`]     | [`GenerationError`] and the wire-level [`ErrorCode`]               |
//!
//! Provider implementations live in `ideabox-providers`.

pub mod config;
pub mod error;
pub mod gateway;
pub mod generic;
pub mod model;
pub mod provider;
pub mod registry;
pub mod template;

pub use error::{ErrorCode, GenerationError, Result};
pub use gateway::GenerationGateway;
pub use provider::{PromptExecution, TextGeneration};
