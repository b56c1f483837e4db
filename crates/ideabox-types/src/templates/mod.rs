//! The four marketing tasks.
//!
//! Every template renders the same shape:
//!
//! ```text
//! system: <role intro>
//!
//!         要求：
//!         1. …
//!         5. …
//!
//!         请只返回生成的<artifact>，不要包含其他解释。
//! user:   <label>：<value>
//!         …
//!
//!         <request sentence>
//! ```
//!
//! Inputs are inserted verbatim, so identical inputs give byte-identical
//! prompts.

use ideabox_core::generic::Message;
use ideabox_prompt::{builder::PromptBuilder, chain::PromptChain};

use crate::fragments::StaticFragment;

mod brand_name;
mod creative_prompt;
mod slogan;
mod title;

pub use brand_name::BrandNamePrompt;
pub use creative_prompt::CreativePromptPrompt;
pub use slogan::SloganPrompt;
pub use title::TitlePrompt;

/// Fixed instruction block of a task.
struct Instruction {
    intro: &'static str,
    requirements: [&'static str; 5],
    artifact: &'static str,
}

impl Instruction {
    fn render(&self) -> String {
        PromptBuilder::new()
            .add_line(self.intro)
            .add_blank_line()
            .add_line("要求：")
            .add_numbered(self.requirements)
            .add_blank_line()
            .add_line(format!("请只返回生成的{}，不要包含其他解释。", self.artifact))
            .finalize()
    }
}

fn task_messages(instruction: &Instruction, fields: &[(&str, &str)], request: &str) -> Vec<Message> {
    let user = fields
        .iter()
        .fold(PromptBuilder::new(), |builder, (label, value)| {
            builder.add_labeled(label, value)
        })
        .add_blank_line()
        .add_line(request)
        .finalize();

    let system = instruction.render();
    PromptChain::new()
        .with(StaticFragment::from(system.as_str()))
        .with(Message::user(user))
        .build()
}
