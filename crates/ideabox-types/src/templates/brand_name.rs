use ideabox_core::{
    generic::Message,
    template::{IntoPrompt, PromptTemplate, TaskBudget},
};
use serde::{Deserialize, Serialize};

use super::{Instruction, task_messages};

const INSTRUCTION: Instruction = Instruction {
    intro: "你是一个专业的品牌命名专家。请根据产品描述和命名风格，生成独特的品牌名称。",
    requirements: [
        "品牌名要简洁易记",
        "符合指定的命名风格",
        "与产品描述相关",
        "具有商业价值",
        "避免与现有品牌重名",
    ],
    artifact: "品牌名",
};

/// Brand name for a product description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandNamePrompt {
    pub description: String,
    pub style: String,
}

impl BrandNamePrompt {
    pub fn new(description: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            style: style.into(),
        }
    }
}

impl IntoPrompt for BrandNamePrompt {
    type Message = Message;

    fn into_prompt(self) -> Vec<Self::Message> {
        task_messages(
            &INSTRUCTION,
            &[("产品描述", self.description.as_str()), ("命名风格", self.style.as_str())],
            "请生成一个符合要求的品牌名称。",
        )
    }
}

impl PromptTemplate for BrandNamePrompt {
    const BUDGET: TaskBudget = TaskBudget::new(0.7, 50);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_and_budget() {
        let prompt = BrandNamePrompt::new("手冲咖啡", "文艺");
        assert_eq!(
            prompt.clone().into_prompt()[1].content,
            "产品描述：手冲咖啡\n命名风格：文艺\n\n请生成一个符合要求的品牌名称。"
        );

        let request = prompt.into_request(Some("qwen-plus".into()));
        assert_eq!(request.sampling.temperature, Some(0.7));
        assert_eq!(request.sampling.max_tokens, Some(50));
        assert_eq!(request.model.as_deref(), Some("qwen-plus"));
    }
}
