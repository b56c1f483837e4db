//! Builder‐style helper for constructing **fixed-format prompt text**.
//!
//! Writing multi-line instructions inline is tedious and error‐prone.
//! `PromptBuilder` offers a fluent API that lets you focus on the *content*
//! instead of the layout. Every method returns `self`, enabling
//! call-chaining:
//!
//! ```rust
//! use ideabox_prompt::builder::PromptBuilder;
//!
//! let text = PromptBuilder::new()
//!     .add_labeled("关键词", "咖啡")
//!     .add_labeled("平台", "小红书")
//!     .add_blank_line()
//!     .add_line("请生成一个符合要求的标题。")
//!     .finalize();
//!
//! assert_eq!(text, "关键词：咖啡\n平台：小红书\n\n请生成一个符合要求的标题。");
//! ```
//!
//! The builder performs **no validation** and no smart formatting: values are
//! inserted verbatim and newlines are emitted exactly as requested, so equal
//! inputs always give byte-identical output. Lines are joined with `\n`; no
//! trailing newline is added.

use std::fmt::{Display, Write as _};

/// Full-width colon used between a label and its value.
pub const LABEL_SEPARATOR: char = '：';

/// Fluent helper to produce prompt text.
///
/// Internally it owns a list of lines. Once you’re done, call
/// [`Self::finalize`] to obtain the assembled text.
#[derive(Debug, Default, Clone)]
pub struct PromptBuilder {
    lines: Vec<String>,
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain line of text.
    pub fn add_line(mut self, line: impl Display) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Add `label：value`.
    pub fn add_labeled(mut self, label: impl Display, value: impl Display) -> Self {
        let mut line = String::new();
        let _ = write!(line, "{label}{LABEL_SEPARATOR}{value}");
        self.lines.push(line);
        self
    }

    /// Add `1. first`, `2. second`, … one item per line.
    pub fn add_numbered<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        for (index, item) in items.into_iter().enumerate() {
            self.lines.push(format!("{}. {item}", index + 1));
        }
        self
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.lines.join("\n")
    }
}
