//! 显示语言选择服务 - 业务能力层
//!
//! 按显示模式组合题干和选项。选项回退顺序：
//! 预先翻译的选项 → 当前语言解析出的选项 → 英文解析出的选项

use super::choice_parser;
use crate::models::{ChoiceSet, DisplayMode, Language, ParsedQuestion, Question};
use rand::Rng;
use tracing::warn;

/// 选项来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceSource {
    /// 增强流程预先翻译的韩语选项
    Precomputed,
    /// 从某种语言的题目文本中解析
    Parsed(Language),
    /// 没有任何选项（HOTSPOT 或自由作答）
    None,
}

impl ChoiceSource {
    /// 选项文本的语言
    pub fn language(self) -> Option<Language> {
        match self {
            ChoiceSource::Precomputed => Some(Language::Ko),
            ChoiceSource::Parsed(language) => Some(language),
            ChoiceSource::None => None,
        }
    }
}

/// 用于显示的题目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayQuestion {
    /// 题干实际使用的语言
    pub language: Language,
    pub body: String,
    pub choices: ChoiceSet,
    pub choice_source: ChoiceSource,
}

impl DisplayQuestion {
    /// 选项语言与题干语言不一致
    pub fn is_mismatched(&self) -> bool {
        self.choice_source
            .language()
            .is_some_and(|language| language != self.language)
    }

    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }
}

/// 显示语言选择服务
///
/// 随机数源在构造时注入，混合模式下每道题以 50% 概率选择韩语
pub struct LanguageSelector<R: Rng> {
    mode: DisplayMode,
    rng: R,
}

impl<R: Rng> LanguageSelector<R> {
    /// 创建新的语言选择服务
    pub fn new(mode: DisplayMode, rng: R) -> Self {
        Self { mode, rng }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// 按当前模式选择题干和选项
    pub fn select(
        &mut self,
        question_en: &str,
        question_ko: &str,
        precomputed_ko: Option<&ChoiceSet>,
    ) -> DisplayQuestion {
        match self.mode {
            DisplayMode::En => english_display(question_en, question_ko, precomputed_ko),
            DisplayMode::Ko => korean_display(question_en, question_ko, precomputed_ko),
            DisplayMode::Mixed => {
                if self.rng.gen_bool(0.5) {
                    let parsed_ko = choice_parser::parse(question_ko);
                    if parsed_ko.body.is_empty() {
                        return english_display(question_en, question_ko, precomputed_ko);
                    }
                    korean_display(question_en, question_ko, precomputed_ko)
                } else {
                    english_display(question_en, question_ko, precomputed_ko)
                }
            }
        }
    }

    /// 对题库记录调用 `select`
    pub fn select_question(&mut self, question: &Question) -> DisplayQuestion {
        self.select(
            &question.question_en,
            &question.question_ko,
            question.precomputed_choices_ko(),
        )
    }
}

fn english_display(
    question_en: &str,
    question_ko: &str,
    precomputed_ko: Option<&ChoiceSet>,
) -> DisplayQuestion {
    let parsed_en = choice_parser::parse(question_en);

    if parsed_en.has_choices() {
        return DisplayQuestion {
            language: Language::En,
            body: parsed_en.body,
            choices: parsed_en.choices,
            choice_source: ChoiceSource::Parsed(Language::En),
        };
    }

    // 英文中没有选项但韩语有：使用韩语选项并标记为不一致
    let (choices, choice_source) = korean_choices(question_ko, precomputed_ko)
        .unwrap_or((ChoiceSet::new(), ChoiceSource::None));

    if choice_source != ChoiceSource::None {
        warn!(
            "⚠️ 英文题干没有解析出选项，改用韩语选项 ({:?}): {}",
            choice_source,
            crate::utils::logging::truncate_text(&parsed_en.body, 60)
        );
    }

    DisplayQuestion {
        language: Language::En,
        body: parsed_en.body,
        choices,
        choice_source,
    }
}

fn korean_display(
    question_en: &str,
    question_ko: &str,
    precomputed_ko: Option<&ChoiceSet>,
) -> DisplayQuestion {
    let parsed_en = choice_parser::parse(question_en);
    let parsed_ko = choice_parser::parse(question_ko);

    let (language, body) = if parsed_ko.body.is_empty() {
        (Language::En, parsed_en.body.clone())
    } else {
        (Language::Ko, parsed_ko.body.clone())
    };

    let (choices, choice_source) = pick_korean_choices(&parsed_ko, precomputed_ko)
        .unwrap_or_else(|| english_choices(parsed_en));

    DisplayQuestion {
        language,
        body,
        choices,
        choice_source,
    }
}

fn korean_choices(
    question_ko: &str,
    precomputed_ko: Option<&ChoiceSet>,
) -> Option<(ChoiceSet, ChoiceSource)> {
    pick_korean_choices(&choice_parser::parse(question_ko), precomputed_ko)
}

fn pick_korean_choices(
    parsed_ko: &ParsedQuestion,
    precomputed_ko: Option<&ChoiceSet>,
) -> Option<(ChoiceSet, ChoiceSource)> {
    if let Some(precomputed) = precomputed_ko.filter(|set| !set.is_empty()) {
        return Some((precomputed.clone(), ChoiceSource::Precomputed));
    }
    if parsed_ko.has_choices() {
        return Some((parsed_ko.choices.clone(), ChoiceSource::Parsed(Language::Ko)));
    }
    None
}

fn english_choices(parsed_en: ParsedQuestion) -> (ChoiceSet, ChoiceSource) {
    if parsed_en.has_choices() {
        (parsed_en.choices, ChoiceSource::Parsed(Language::En))
    } else {
        (ChoiceSet::new(), ChoiceSource::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Letter;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EN: &str = "Which step? • A. Training • B. Inference";
    const KO: &str = "어떤 단계입니까? • A. 학습 • B. 추론";

    /// gen_bool(0.5) 总是返回 true（选择韩语）
    fn always_korean() -> StepRng {
        StepRng::new(0, 0)
    }

    /// gen_bool(0.5) 总是返回 false（选择英语）
    fn always_english() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn precomputed() -> ChoiceSet {
        vec![
            (Letter::A, "모델 학습".to_string()),
            (Letter::B, "모델 추론".to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_english_mode() {
        let mut selector = LanguageSelector::new(DisplayMode::En, always_korean());
        let shown = selector.select(EN, KO, Some(&precomputed()));
        assert_eq!(shown.language, Language::En);
        assert_eq!(shown.body, "Which step?");
        assert_eq!(shown.choices.get(Letter::A), Some("Training"));
        assert_eq!(shown.choice_source, ChoiceSource::Parsed(Language::En));
        assert!(!shown.is_mismatched());
    }

    #[test]
    fn test_korean_mode_prefers_precomputed() {
        let mut selector = LanguageSelector::new(DisplayMode::Ko, always_english());
        let shown = selector.select(EN, KO, Some(&precomputed()));
        assert_eq!(shown.language, Language::Ko);
        assert_eq!(shown.body, "어떤 단계입니까?");
        assert_eq!(shown.choices.get(Letter::A), Some("모델 학습"));
        assert_eq!(shown.choice_source, ChoiceSource::Precomputed);
    }

    #[test]
    fn test_korean_mode_empty_precomputed_uses_parsed_korean() {
        let mut selector = LanguageSelector::new(DisplayMode::Ko, always_english());
        let shown = selector.select(EN, KO, Some(&ChoiceSet::new()));
        assert_eq!(shown.choices.get(Letter::B), Some("추론"));
        assert_eq!(shown.choice_source, ChoiceSource::Parsed(Language::Ko));
    }

    #[test]
    fn test_korean_mode_falls_back_to_english() {
        let mut selector = LanguageSelector::new(DisplayMode::Ko, always_english());
        let shown = selector.select(EN, "", None);
        assert_eq!(shown.language, Language::En);
        assert_eq!(shown.body, "Which step?");
        assert_eq!(shown.choices.get(Letter::A), Some("Training"));
        assert_eq!(shown.choice_source, ChoiceSource::Parsed(Language::En));
    }

    #[test]
    fn test_korean_body_with_english_choices_is_mismatched() {
        let mut selector = LanguageSelector::new(DisplayMode::Ko, always_english());
        let shown = selector.select(EN, "어떤 단계입니까?", None);
        assert_eq!(shown.language, Language::Ko);
        assert_eq!(shown.choice_source, ChoiceSource::Parsed(Language::En));
        assert!(shown.is_mismatched());
    }

    #[test]
    fn test_english_without_choices_flags_korean_fallback() {
        let mut selector = LanguageSelector::new(DisplayMode::En, always_english());
        let shown = selector.select("Which step?", KO, None);
        assert_eq!(shown.choice_source, ChoiceSource::Parsed(Language::Ko));
        assert!(shown.is_mismatched());
        assert_eq!(shown.choices.len(), 2);
    }

    #[test]
    fn test_no_choices_anywhere() {
        let mut selector = LanguageSelector::new(DisplayMode::Ko, always_english());
        let shown = selector.select("HOTSPOT Select the steps", "HOTSPOT 단계 선택", None);
        assert!(!shown.has_choices());
        assert_eq!(shown.choice_source, ChoiceSource::None);
        assert!(!shown.is_mismatched());
    }

    #[test]
    fn test_mixed_mode_branches() {
        let mut korean = LanguageSelector::new(DisplayMode::Mixed, always_korean());
        assert_eq!(korean.select(EN, KO, None).language, Language::Ko);

        let mut english = LanguageSelector::new(DisplayMode::Mixed, always_english());
        assert_eq!(english.select(EN, KO, None).language, Language::En);
    }

    #[test]
    fn test_mixed_mode_korean_without_body_falls_back_silently() {
        let mut selector = LanguageSelector::new(DisplayMode::Mixed, always_korean());
        let shown = selector.select(EN, "", Some(&precomputed()));
        assert_eq!(shown.language, Language::En);
        assert_eq!(shown.body, "Which step?");
        assert_eq!(shown.choices.get(Letter::A), Some("Training"));
    }

    #[test]
    fn test_mixed_mode_is_roughly_even_and_reproducible() {
        let run = |seed: u64| -> Vec<Language> {
            let mut selector =
                LanguageSelector::new(DisplayMode::Mixed, StdRng::seed_from_u64(seed));
            (0..1000).map(|_| selector.select(EN, KO, None).language).collect()
        };

        let first = run(42);
        assert_eq!(first, run(42));

        let korean = first.iter().filter(|l| **l == Language::Ko).count();
        assert!((400..=600).contains(&korean), "korean count: {}", korean);
    }

    #[test]
    fn test_select_question_uses_record_fields() {
        let question = Question::new("1", EN, KO, "A").with_choices_ko(precomputed());
        let mut selector = LanguageSelector::new(DisplayMode::Ko, always_english());
        let shown = selector.select_question(&question);
        assert_eq!(shown.choice_source, ChoiceSource::Precomputed);
    }
}
