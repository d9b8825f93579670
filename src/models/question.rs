use super::choice::ChoiceSet;
use serde::{Deserialize, Serialize};

/// 题库中的一道题
///
/// `question_en` / `question_ko` / `answer` 在导入时生成；
/// `choices_ko` 由增强流程补齐，`answer` 可能被追加解析。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question_en: String,
    #[serde(default)]
    pub question_ko: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices_ko: Option<ChoiceSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        question_en: impl Into<String>,
        question_ko: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question_en: question_en.into(),
            question_ko: question_ko.into(),
            answer: answer.into(),
            choices_ko: None,
            image_path: None,
        }
    }

    pub fn with_choices_ko(mut self, choices_ko: ChoiceSet) -> Self {
        self.choices_ko = Some(choices_ko);
        self
    }

    pub fn with_image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }

    /// 预先翻译好的韩语选项（为空时视为不存在）
    pub fn precomputed_choices_ko(&self) -> Option<&ChoiceSet> {
        self.choices_ko.as_ref().filter(|set| !set.is_empty())
    }
}

/// 选项解析结果：题干 + 选项
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuestion {
    pub body: String,
    pub choices: ChoiceSet,
}

impl ParsedQuestion {
    /// 无选项的题目（HOTSPOT 或自由作答）
    pub fn without_choices(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            choices: ChoiceSet::new(),
        }
    }

    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }
}
