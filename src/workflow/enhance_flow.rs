//! 题目增强流程 - 流程层
//!
//! 核心职责：定义"一道题"的增强流程
//!
//! 流程顺序：
//! 1. 解析英文选项
//! 2. 判断是否需要（重新）翻译韩语选项 → 翻译
//! 3. 为答案补充解析

use tracing::{debug, info};

use crate::models::{contains_hangul, ChoiceSet, Question};
use crate::services::explanation_service::expand_explanation;
use crate::services::phrase_translator::has_glued_suffix;
use crate::services::{choice_parser, PhraseTranslator};

/// 单道题的增强结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnhanceOutcome {
    /// 韩语选项已（重新）翻译
    pub translated: bool,
    /// 答案已补充解析
    pub explained: bool,
}

impl EnhanceOutcome {
    pub fn changed(&self) -> bool {
        self.translated || self.explained
    }
}

/// 题目增强流程
///
/// - 只处理单个 Question
/// - 不做文件读写
/// - 只依赖业务能力（services）
pub struct EnhanceFlow {
    translator: PhraseTranslator,
    verbose_logging: bool,
}

impl EnhanceFlow {
    /// 创建新的增强流程
    pub fn new(translator: PhraseTranslator, verbose_logging: bool) -> Self {
        Self {
            translator,
            verbose_logging,
        }
    }

    /// 原地增强一道题
    pub fn run(&self, question: &mut Question) -> EnhanceOutcome {
        let mut outcome = EnhanceOutcome::default();

        // ========== 步骤 1: 韩语选项 ==========
        let choices_en = choice_parser::parse(&question.question_en).choices;
        if should_translate(&choices_en, question.choices_ko.as_ref()) {
            let translated: ChoiceSet = choices_en
                .iter()
                .map(|(letter, text)| (letter, self.translator.translate(text)))
                .collect();

            // 译文与现有选项相同（如 "RMSE" 这类没有韩文的译文）时不算修改
            if question.choices_ko.as_ref() != Some(&translated) {
                if self.verbose_logging {
                    info!("[题目 {}] 🔤 翻译 {} 个选项", question.id, translated.len());
                }
                question.choices_ko = Some(translated);
                outcome.translated = true;
            }
        }

        // ========== 步骤 2: 答案解析 ==========
        let expanded = expand_explanation(&question.answer);
        if expanded != question.answer {
            debug!("[题目 {}] 补充答案解析: {}", question.id, expanded);
            question.answer = expanded;
            outcome.explained = true;
        }

        outcome
    }
}

/// 是否需要翻译韩语选项
///
/// 英文没有选项时不翻译；韩语选项不存在时翻译；
/// 已存在时，只有首个选项不含韩文或任一选项带有英文后缀残留时重新翻译
pub fn should_translate(choices_en: &ChoiceSet, choices_ko: Option<&ChoiceSet>) -> bool {
    if choices_en.is_empty() {
        return false;
    }

    let Some(existing) = choices_ko.filter(|set| !set.is_empty()) else {
        return true;
    };

    let first = existing.first_text().unwrap_or_default();
    if first.is_empty() {
        return false;
    }

    !contains_hangul(first) || existing.iter().any(|(_, text)| has_glued_suffix(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Letter;

    fn flow() -> EnhanceFlow {
        EnhanceFlow::new(PhraseTranslator::rules_only(), false)
    }

    fn set(entries: &[(Letter, &str)]) -> ChoiceSet {
        entries
            .iter()
            .map(|(letter, text)| (*letter, text.to_string()))
            .collect()
    }

    #[test]
    fn test_should_translate_rules() {
        let en = set(&[(Letter::A, "Training"), (Letter::B, "Inference")]);

        assert!(should_translate(&en, None));
        assert!(should_translate(&en, Some(&ChoiceSet::new())));
        assert!(should_translate(&en, Some(&set(&[(Letter::A, "Training")]))));
        assert!(should_translate(
            &en,
            Some(&set(&[(Letter::A, "학습"), (Letter::B, "추론ing")]))
        ));
        assert!(!should_translate(
            &en,
            Some(&set(&[(Letter::A, "학습"), (Letter::B, "추론")]))
        ));
        // 首个选项为空时保留原值
        assert!(!should_translate(&en, Some(&set(&[(Letter::A, "")]))));
        assert!(!should_translate(&ChoiceSet::new(), None));
    }

    #[test]
    fn test_run_translates_and_explains() {
        let mut question = Question::new(
            "1",
            "Which step? • A. Training • B. Inference",
            "어떤 단계입니까? • A. 학습 • B. 추론",
            "B. Inference",
        );

        let outcome = flow().run(&mut question);
        assert!(outcome.translated);
        assert!(outcome.explained);

        let choices_ko = question.choices_ko.as_ref().unwrap();
        assert_eq!(choices_ko.get(Letter::A), Some("학습"));
        assert_eq!(choices_ko.get(Letter::B), Some("추론"));
        assert!(question.answer.starts_with("B. Inference ("));
    }

    #[test]
    fn test_second_run_is_noop() {
        let mut question = Question::new(
            "2",
            "Which step? • A. Training • B. Inference",
            "",
            "A. Training",
        );

        let flow = flow();
        flow.run(&mut question);
        let snapshot = question.clone();

        let outcome = flow.run(&mut question);
        assert!(!outcome.changed());
        assert_eq!(question, snapshot);
    }

    #[test]
    fn test_second_run_is_noop_without_hangul_translation() {
        let mut question = Question::new("5", "Q • A. RMSE • B. Accuracy", "", "A. RMSE");

        let flow = flow();
        assert!(flow.run(&mut question).translated);
        assert_eq!(
            question.choices_ko.as_ref().unwrap().get(Letter::A),
            Some("RMSE")
        );
        let snapshot = question.clone();

        let outcome = flow.run(&mut question);
        assert_eq!(outcome, EnhanceOutcome::default());
        assert_eq!(question, snapshot);
    }

    #[test]
    fn test_bad_suffix_is_retranslated_once() {
        let mut question = Question::new("3", "Pick • A. Training • B. Inference", "", "")
            .with_choices_ko(set(&[(Letter::A, "학습ing"), (Letter::B, "추론")]));

        let flow = flow();
        assert!(flow.run(&mut question).translated);
        assert_eq!(
            question.choices_ko.as_ref().unwrap().get(Letter::A),
            Some("학습")
        );
        assert!(!flow.run(&mut question).translated);
    }

    #[test]
    fn test_hotspot_is_untouched() {
        let mut question = Question::new("4", "HOTSPOT Select the steps", "HOTSPOT", "");
        let outcome = flow().run(&mut question);
        assert_eq!(outcome, EnhanceOutcome::default());
        assert!(question.choices_ko.is_none());
    }
}
