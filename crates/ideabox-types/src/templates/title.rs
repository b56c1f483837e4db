use ideabox_core::{
    generic::Message,
    template::{IntoPrompt, PromptTemplate, TaskBudget},
};
use serde::{Deserialize, Serialize};

use super::{Instruction, task_messages};

const INSTRUCTION: Instruction = Instruction {
    intro: "你是一个专业的标题生成专家。请根据用户提供的关键词、平台和风格要求，生成吸引人的标题。",
    requirements: [
        "标题要符合指定平台的风格特点",
        "包含用户提供的关键词",
        "符合指定的风格要求",
        "长度适中，通常在10-30字之间",
        "具有吸引力和点击率",
    ],
    artifact: "标题",
};

/// Headline for a given platform and style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlePrompt {
    pub keywords: String,
    pub platform: String,
    pub style: String,
}

impl TitlePrompt {
    pub fn new(
        keywords: impl Into<String>,
        platform: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            keywords: keywords.into(),
            platform: platform.into(),
            style: style.into(),
        }
    }
}

impl IntoPrompt for TitlePrompt {
    type Message = Message;

    fn into_prompt(self) -> Vec<Self::Message> {
        task_messages(
            &INSTRUCTION,
            &[
                ("关键词", self.keywords.as_str()),
                ("平台", self.platform.as_str()),
                ("风格", self.style.as_str()),
            ],
            "请生成一个符合要求的标题。",
        )
    }
}

impl PromptTemplate for TitlePrompt {
    const BUDGET: TaskBudget = TaskBudget::new(0.8, 100);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_lists_inputs_verbatim() {
        let messages = TitlePrompt::new("咖啡", "小红书", "活泼").into_prompt();
        assert_eq!(
            messages[1].content,
            "关键词：咖啡\n平台：小红书\n风格：活泼\n\n请生成一个符合要求的标题。"
        );
        assert!(messages[0].content.starts_with("你是一个专业的标题生成专家。"));
        assert!(messages[0].content.contains("4. 长度适中，通常在10-30字之间"));
        assert!(messages[0].content.ends_with("请只返回生成的标题，不要包含其他解释。"));
    }

    #[test]
    fn request_carries_budget() {
        let request = TitlePrompt::new("咖啡", "小红书", "活泼").into_request(None);
        assert_eq!(request.sampling.temperature, Some(0.8));
        assert_eq!(request.sampling.max_tokens, Some(100));
        assert!(request.model.is_none());
    }
}
