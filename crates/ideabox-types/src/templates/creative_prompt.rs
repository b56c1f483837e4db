use ideabox_core::{
    generic::Message,
    template::{IntoPrompt, PromptTemplate, TaskBudget},
};
use serde::{Deserialize, Serialize};

use super::{Instruction, task_messages};

const INSTRUCTION: Instruction = Instruction {
    intro: "你是一个创意提示生成专家。请根据场景、受众和角度，生成有创意的提示词。",
    requirements: [
        "结合场景特点",
        "考虑受众需求",
        "从指定角度切入",
        "激发创意灵感",
        "实用且可操作",
    ],
    artifact: "创意提示",
};

/// Creative brief for a scene, audience and angle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativePromptPrompt {
    pub scene: String,
    pub audience: String,
    pub angle: String,
}

impl CreativePromptPrompt {
    pub fn new(
        scene: impl Into<String>,
        audience: impl Into<String>,
        angle: impl Into<String>,
    ) -> Self {
        Self {
            scene: scene.into(),
            audience: audience.into(),
            angle: angle.into(),
        }
    }
}

impl IntoPrompt for CreativePromptPrompt {
    type Message = Message;

    fn into_prompt(self) -> Vec<Self::Message> {
        task_messages(
            &INSTRUCTION,
            &[
                ("场景", self.scene.as_str()),
                ("受众", self.audience.as_str()),
                ("角度", self.angle.as_str()),
            ],
            "请生成一个创意提示。",
        )
    }
}

impl PromptTemplate for CreativePromptPrompt {
    const BUDGET: TaskBudget = TaskBudget::new(0.9, 150);
}
