//! 翻译词典构建器 - 编排层
//!
//! ## 职责
//!
//! 从题库收集所有英文选项，生成待人工填写的翻译词典文件：
//!
//! 1. 收集所有不重复的非空英文选项
//! 2. 已有的正确韩语翻译直接沿用（首次出现的为准）
//! 3. 按键排序输出，未翻译的值为空字符串

use crate::models::{contains_hangul, load_corpus, save_translations, Question, TranslationDict};
use crate::services::choice_parser;
use crate::utils::logging::print_final_stats;
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;

/// 翻译到一半的错误模式，如 "증가 the epochs"
static BAD_TRANSLATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[가-힣]+\s+(the|a|an|to|for|with|by|of|in|on|at)\s+[a-zA-Z]")
        .expect("错误翻译正则无效")
});

/// 词典构建统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryStats {
    /// 不重复的英文选项数
    pub total: usize,
    /// 沿用已有翻译的数量
    pub existing: usize,
    /// 仍需翻译的数量
    pub needed: usize,
}

/// 已有翻译是否可以沿用
pub fn is_acceptable_translation(choice_ko: &str) -> bool {
    contains_hangul(choice_ko) && !BAD_TRANSLATION_RE.is_match(choice_ko)
}

/// 从题库构建翻译词典
pub fn build_dictionary(questions: &[Question]) -> (TranslationDict, DictionaryStats) {
    let mut all_choices = BTreeSet::new();
    let mut existing: BTreeMap<String, String> = BTreeMap::new();

    for question in questions {
        let choices_en = choice_parser::parse_choices(&question.question_en);
        for (letter, choice_en) in choices_en.iter() {
            if choice_en.is_empty() {
                continue;
            }
            all_choices.insert(choice_en.to_string());

            let Some(choice_ko) = question.choices_ko.as_ref().and_then(|ko| ko.get(letter))
            else {
                continue;
            };
            if is_acceptable_translation(choice_ko) && !existing.contains_key(choice_en) {
                existing.insert(choice_en.to_string(), choice_ko.to_string());
            }
        }
    }

    let stats = DictionaryStats {
        total: all_choices.len(),
        existing: existing.len(),
        needed: all_choices.len() - existing.len(),
    };

    let dict = all_choices
        .into_iter()
        .map(|choice_en| {
            let choice_ko = existing.remove(&choice_en).unwrap_or_default();
            (choice_en, choice_ko)
        })
        .collect();

    (dict, stats)
}

/// 读取题库，生成翻译词典文件
///
/// # 参数
/// - `corpus_path`: 题库文件
/// - `output_path`: 词典输出文件
pub async fn build_dictionary_file(corpus_path: &Path, output_path: &Path) -> Result<DictionaryStats> {
    info!("\n📁 正在读取题库: {}", corpus_path.display());
    let questions = load_corpus(corpus_path)
        .await
        .with_context(|| format!("无法加载题库: {}", corpus_path.display()))?;

    let (dict, stats) = build_dictionary(&questions);

    save_translations(output_path, &dict)
        .await
        .with_context(|| format!("无法保存翻译词典: {}", output_path.display()))?;

    print_final_stats(
        "翻译词典生成统计",
        &[
            ("不重复选项", stats.total),
            ("沿用已有翻译", stats.existing),
            ("需要翻译", stats.needed),
        ],
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChoiceSet, Letter};

    fn ko(entries: &[(Letter, &str)]) -> ChoiceSet {
        entries
            .iter()
            .map(|(letter, text)| (*letter, text.to_string()))
            .collect()
    }

    #[test]
    fn test_acceptable_translation() {
        assert!(is_acceptable_translation("학습"));
        assert!(!is_acceptable_translation("Training"));
        assert!(!is_acceptable_translation("증가 the epochs"));
        assert!(is_acceptable_translation("Amazon Bedrock 사용"));
    }

    #[test]
    fn test_build_dictionary() {
        let questions = vec![
            Question::new("1", "Q1 • A. Training • B. Inference", "", "A").with_choices_ko(ko(&[
                (Letter::A, "학습"),
                (Letter::B, "증가 the inference"),
            ])),
            Question::new("2", "Q2 • A. Inference • B. Training", "", "B")
                .with_choices_ko(ko(&[(Letter::A, "추론"), (Letter::B, "훈련")])),
            Question::new("3", "HOTSPOT no choices", "", ""),
            Question::new("4", "Q4 • A. Tokens • B. Embeddings", "", "A"),
        ];

        let (dict, stats) = build_dictionary(&questions);

        assert_eq!(
            stats,
            DictionaryStats {
                total: 4,
                existing: 2,
                needed: 2
            }
        );
        // 首次出现的翻译为准
        assert_eq!(dict["Training"], "학습");
        // 第 1 题的错误翻译被跳过，沿用第 2 题
        assert_eq!(dict["Inference"], "추론");
        assert_eq!(dict["Tokens"], "");
        let keys: Vec<&str> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Embeddings", "Inference", "Tokens", "Training"]);
    }
}
