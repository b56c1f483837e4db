//! Abstractions that tie a **prompt** to a fixed **generation budget**.
//!
//! A developer usually needs only two traits to go from "some typed
//! parameters" to "ready-to-send request":
//!
//! 1. [`IntoPrompt`] – turns *any* value into a list of chat messages.
//! 2. [`PromptTemplate`] – adds the temperature / max-token budget the task
//!    always runs with.
//!
//! ```rust
//! use ideabox_core::generic::Message;
//! use ideabox_core::template::{IntoPrompt, PromptTemplate, TaskBudget};
//!
//! struct Hello;
//!
//! impl IntoPrompt for Hello {
//!     type Message = Message;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![Message::user("Say hello!")]
//!     }
//! }
//!
//! impl PromptTemplate for Hello {
//!     const BUDGET: TaskBudget = TaskBudget::new(0.5, 20);
//! }
//!
//! let request = Hello.into_request(None);
//! assert_eq!(request.sampling.max_tokens, Some(20));
//! ```

use crate::generic::{GenerationRequest, Message};

/// Fixed sampling budget of a task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskBudget {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl TaskBudget {
    pub const fn new(temperature: f64, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

/// Converts a value into a series of chat messages.
///
/// The `Message` type is an associated type so prompt fragments can be
/// chained generically (see `ideabox-prompt`'s `PromptChain`).
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A prompt with a fixed budget that the gateway can run directly.
pub trait PromptTemplate: IntoPrompt<Message = Message> + Sized {
    const BUDGET: TaskBudget;

    /// Build the request: the prompt's messages, the budget, and an optional
    /// pinned model.
    fn into_request(self, model: Option<String>) -> GenerationRequest {
        let mut request = GenerationRequest::new(self.into_prompt())
            .with_temperature(Self::BUDGET.temperature)
            .with_max_tokens(Self::BUDGET.max_tokens);
        request.model = model;
        request
    }
}

/// Lets a single [`Message`] be passed wherever a prompt is expected.
impl IntoPrompt for Message {
    type Message = Message;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}

impl IntoPrompt for Vec<Message> {
    type Message = Message;

    fn into_prompt(self) -> Vec<Self::Message> {
        self
    }
}
