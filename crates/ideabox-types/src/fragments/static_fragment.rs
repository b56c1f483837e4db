//! A minimal fragment that injects a *static* string into the prompt.
//!
//! Every task template opens with one of these: the fixed instruction that
//! tells the model what kind of copywriter it is.
//!
//! ```rust
//! use ideabox_core::generic::Role;
//! use ideabox_types::fragments::StaticFragment;
//!
//! let fragment = StaticFragment::new("你是一个专业的广告语创作专家。", Role::System);
//! ```
//!
//! The `From<&str>` impl defaults to [`Role::System`] since system
//! instructions are the most common static fragments.

use ideabox_core::{
    generic::{Message, Role},
    template::IntoPrompt,
};

/// A borrowed static string bundled with a chat role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticFragment<'a> {
    text: &'a str,
    role: Role,
}

impl<'a> From<&'a str> for StaticFragment<'a> {
    fn from(value: &'a str) -> Self {
        Self::new(value, Role::System)
    }
}

impl<'a> StaticFragment<'a> {
    pub fn new(text: &'a str, role: Role) -> Self {
        Self { text, role }
    }
}

impl IntoPrompt for StaticFragment<'_> {
    type Message = Message;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![Message::new(self.text, self.role)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_defaults_to_system() {
        let messages = StaticFragment::from("固定指令").into_prompt();
        assert_eq!(messages, vec![Message::system("固定指令")]);
    }
}
