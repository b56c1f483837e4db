//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`](ideabox_core::template::IntoPrompt).
//!
//! ```text
//! ┌───────────────┐    IntoPrompt     ┌────────────────┐
//! │ StaticFragment│ ─────────────────►│ Vec<Message>   │
//! ├───────────────┤                   ├────────────────┤
//! │ Message       │ ─────────────────►│ Vec<Message>   │
//! ├───────────────┤                   ├────────────────┤
//! │ …             │ ─────────────────►│ Vec<Message>   │
//! └───────────────┘                   └────────────────┘
//!            ▲                                     │
//!            └────────── PromptChain::build() ◄────┘
//! ```
//!
//! # Motivation
//!
//! Every marketing prompt is a fixed system instruction followed by a
//! parameterised user instruction. `PromptChain` lines these fragments up in
//! a clear, linear fashion **without** mutable vectors or verbose `extend()`
//! calls.
//!
//! # Usage
//!
//! ```rust
//! use ideabox_prompt::chain::PromptChain;
//! use ideabox_core::generic::{Message, Role};
//!
//! let messages: Vec<Message> = PromptChain::new()
//!     .with(Message::system("你是一个专业的标题生成专家。"))
//!     .with(Message::user("关键词：咖啡"))
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].role, Role::System);
//! ```
//!
//! The generic parameter `Message` allows back-ends to plug in their own, richer
//! message types while reusing the same chaining logic.
use ideabox_core::template::IntoPrompt;

/// Lightweight container that accumulates messages produced by
/// [`IntoPrompt`] implementors.
///
/// The single `Vec` field is kept private so the only way to obtain the result
/// is through [`Self::build`], ensuring the builder API remains fluent.
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    ///
    /// The method takes `self` **by value** to encourage concise
    /// call-chaining:
    ///
    /// ```rust
    /// # use ideabox_prompt::chain::PromptChain;
    /// # use ideabox_core::generic::Message;
    /// let vec = PromptChain::new()
    ///     .with(Message::user("hi"))
    ///     .build();
    /// assert_eq!(vec.len(), 1);
    /// ```
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
