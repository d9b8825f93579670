//! 选项翻译服务 - 业务能力层
//!
//! 先查翻译词典，查不到时走规则翻译：
//! 1. 保护：产品名替换为占位符
//! 2. 替换：短语表按长度从长到短，命中第一条即停止
//! 3. 还原：占位符换回产品名
//!
//! 之后清理粘在韩文后面的英文后缀，并为纯产品名补充韩语说明。

use super::phrase_rules::{PHRASE_TRANSLATIONS, PRODUCT_DESCRIPTIONS, PRODUCT_NAMES};
use crate::models::{contains_hangul, TranslationDict};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static GLUED_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([가-힣]+)(ing|ment|tion|sion|ness|ity|ly|ed|er|est)\b")
        .expect("英文后缀正则无效")
});

/// 一条已编译的短语规则
struct PhraseRule {
    /// 产品名已替换为占位符的小写短语（用于整句比较）
    protected_lower: String,
    /// 单词边界、不区分大小写的匹配
    pattern: Regex,
    replacement: &'static str,
}

/// 选项翻译服务
///
/// 词典在构造时注入，之后只读
pub struct PhraseTranslator {
    dictionary: TranslationDict,
    rules: Vec<PhraseRule>,
}

impl PhraseTranslator {
    /// 创建新的翻译服务
    pub fn new(dictionary: TranslationDict) -> Self {
        let mut phrases: Vec<(&str, &'static str)> = PHRASE_TRANSLATIONS.to_vec();
        phrases.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let rules = phrases
            .into_iter()
            .filter_map(|(phrase_en, phrase_ko)| {
                let (protected, _) = protect_products(phrase_en);
                let source = format!(r"(?i)\b{}\b", regex::escape(&protected));
                match Regex::new(&source) {
                    Ok(pattern) => Some(PhraseRule {
                        protected_lower: protected.to_lowercase(),
                        pattern,
                        replacement: phrase_ko,
                    }),
                    Err(e) => {
                        warn!("短语规则编译失败 '{}': {}", phrase_en, e);
                        None
                    }
                }
            })
            .collect();

        Self { dictionary, rules }
    }

    /// 不带词典的翻译服务（只用规则）
    pub fn rules_only() -> Self {
        Self::new(TranslationDict::new())
    }

    /// 翻译单个英文选项
    ///
    /// 词典和规则都没有命中时返回原文
    pub fn translate(&self, choice_en: &str) -> String {
        if choice_en.is_empty() {
            return String::new();
        }

        if let Some(hit) = self.dictionary.get(choice_en).filter(|v| !v.is_empty()) {
            return hit.clone();
        }

        let translated = match self.substitute(choice_en) {
            Some(translated) => translated,
            None => choice_en.to_string(),
        };

        let translated = strip_glued_suffixes(&translated);
        let translated = describe_product(&translated).unwrap_or(translated);

        debug!("规则翻译: '{}' → '{}'", choice_en, translated);
        translated
    }

    /// 保护 → 替换 → 还原；没有规则命中时返回 `None`
    fn substitute(&self, choice_en: &str) -> Option<String> {
        let (protected, placeholders) = protect_products(choice_en);
        let protected_lower = protected.trim().to_lowercase();

        let mut translated = None;
        for rule in &self.rules {
            if rule.protected_lower == protected_lower {
                translated = Some(rule.replacement.to_string());
                break;
            }
            if let Some(m) = rule.pattern.find(&protected) {
                translated = Some(format!(
                    "{}{}{}",
                    &protected[..m.start()],
                    rule.replacement,
                    &protected[m.end()..]
                ));
                break;
            }
        }

        translated.map(|text| restore_products(text, &placeholders))
    }
}

/// 文本中是否有韩文后面紧跟英文后缀（如 "학습ing"）
pub fn has_glued_suffix(text: &str) -> bool {
    GLUED_SUFFIX_RE.is_match(text)
}

/// 去掉韩文后面紧跟的英文后缀
pub fn strip_glued_suffixes(text: &str) -> String {
    GLUED_SUFFIX_RE.replace_all(text, "$1").into_owned()
}

/// 产品名替换为占位符，返回 (替换后文本, [(占位符, 产品名)])
fn protect_products(text: &str) -> (String, Vec<(String, &'static str)>) {
    let mut protected = text.to_string();
    let mut placeholders = Vec::new();

    for (i, product) in PRODUCT_NAMES.iter().enumerate() {
        if protected.contains(product) {
            let placeholder = format!("__AWS_PRODUCT_{}__", i);
            protected = protected.replace(product, &placeholder);
            placeholders.push((placeholder, *product));
        }
    }

    (protected, placeholders)
}

fn restore_products(mut text: String, placeholders: &[(String, &'static str)]) -> String {
    for (placeholder, product) in placeholders {
        text = text.replace(placeholder.as_str(), product);
    }
    text
}

/// 选项只有产品名（可带 " Service"）时附加韩语说明
fn describe_product(text: &str) -> Option<String> {
    if contains_hangul(text) || text.contains('(') || text.contains('（') {
        return None;
    }

    let stripped = text.trim();
    let (name, description) = PRODUCT_DESCRIPTIONS
        .get_entry(stripped)
        .or_else(|| {
            stripped
                .strip_suffix(" Service")
                .and_then(|name| PRODUCT_DESCRIPTIONS.get_entry(name))
        })?;

    Some(format!("{} ({})", name, description))
}
