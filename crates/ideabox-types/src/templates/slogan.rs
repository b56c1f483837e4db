use ideabox_core::{
    generic::Message,
    template::{IntoPrompt, PromptTemplate, TaskBudget},
};
use serde::{Deserialize, Serialize};

use super::{Instruction, task_messages};

const INSTRUCTION: Instruction = Instruction {
    intro: "你是一个专业的广告语创作专家。请根据品牌名称、卖点和语气要求，创作吸引人的广告语。",
    requirements: [
        "突出品牌卖点",
        "符合指定的语气风格",
        "简洁有力，易于传播",
        "与品牌名称协调",
        "具有记忆点",
    ],
    artifact: "广告语",
};

/// Slogan built around a brand's selling points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SloganPrompt {
    pub brand_name: String,
    pub selling_points: String,
    pub tone: String,
}

impl SloganPrompt {
    pub fn new(
        brand_name: impl Into<String>,
        selling_points: impl Into<String>,
        tone: impl Into<String>,
    ) -> Self {
        Self {
            brand_name: brand_name.into(),
            selling_points: selling_points.into(),
            tone: tone.into(),
        }
    }
}

impl IntoPrompt for SloganPrompt {
    type Message = Message;

    fn into_prompt(self) -> Vec<Self::Message> {
        task_messages(
            &INSTRUCTION,
            &[
                ("品牌名称", self.brand_name.as_str()),
                ("核心卖点", self.selling_points.as_str()),
                ("语气风格", self.tone.as_str()),
            ],
            "请创作一个符合要求的广告语。",
        )
    }
}

impl PromptTemplate for SloganPrompt {
    const BUDGET: TaskBudget = TaskBudget::new(0.8, 100);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_and_budget() {
        let prompt = SloganPrompt::new("豆语", "现磨 新鲜", "温暖");
        assert_eq!(
            prompt.clone().into_prompt()[1].content,
            "品牌名称：豆语\n核心卖点：现磨 新鲜\n语气风格：温暖\n\n请创作一个符合要求的广告语。"
        );
        let request = prompt.into_request(None);
        assert_eq!(request.sampling.temperature, Some(0.8));
        assert_eq!(request.sampling.max_tokens, Some(100));
    }
}
