//! 答案提取服务 - 业务能力层
//!
//! 从答案文本中提取正确选项字母，以及判断题目是否为多选题

use crate::models::{AnswerKey, Letter};

/// 多选题标记（英文 / 韩文）
const MULTIPLE_MARKERS: [&str; 4] = ["(choose two)", "(2개 선택)", "(choose three)", "(3개 선택)"];

/// 从答案文本中提取正确选项
///
/// 扫描所有独立的大写字母 A–E（前后都不是字母），按首次出现顺序返回，去重。
/// 空文本或找不到字母时返回 `None`。
///
/// 注意：正文里的独立字母（如 "A customer needs..." 中的 A）同样会被提取。
pub fn extract(answer_text: Option<&str>) -> Option<AnswerKey> {
    let text = answer_text?;
    if text.trim().is_empty() {
        return None;
    }

    let chars: Vec<char> = text.chars().collect();
    let letters = chars.iter().enumerate().filter_map(|(i, &c)| {
        let letter = Letter::from_char(c)?;
        let before_ok = i == 0 || !chars[i - 1].is_alphabetic();
        let after_ok = chars.get(i + 1).map_or(true, |next| !next.is_alphabetic());
        (before_ok && after_ok).then_some(letter)
    });

    let key = AnswerKey::from_letters(letters);
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// 题目文本是否带有多选标记（不区分大小写）
pub fn is_multiple(question_text: &str) -> bool {
    let lower = question_text.to_lowercase();
    MULTIPLE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// 英文和韩文题干任一带有多选标记即为多选题
pub fn is_multiple_any(question_en: &str, question_ko: &str) -> bool {
    is_multiple(question_en) || is_multiple(question_ko)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(text: &str) -> Vec<Letter> {
        extract(Some(text))
            .map(|key| key.letters().to_vec())
            .unwrap_or_default()
    }

    #[test]
    fn test_comma_separated() {
        assert_eq!(letters("A, C"), vec![Letter::A, Letter::C]);
    }

    #[test]
    fn test_letter_in_prose() {
        assert_eq!(letters("The answer is B because..."), vec![Letter::B]);
    }

    #[test]
    fn test_empty_and_missing() {
        assert!(extract(Some("")).is_none());
        assert!(extract(Some("   ")).is_none());
        assert!(extract(None).is_none());
    }

    #[test]
    fn test_no_letters() {
        assert!(extract(Some("see explanation below")).is_none());
        assert!(extract(Some("F. none of these")).is_none());
    }

    #[test]
    fn test_answer_with_explanation() {
        let text = "B. Partial dependence plots (PDPs) D. Decision trees";
        assert_eq!(letters(text), vec![Letter::B, Letter::D]);
    }

    #[test]
    fn test_korean_context_is_boundary_only_for_non_letters() {
        // 韩文音节属于字母，紧贴时不算独立字母
        assert_eq!(letters("정답은 C입니다"), Vec::<Letter>::new());
        assert_eq!(letters("정답: C. 추론"), vec![Letter::C]);
    }

    #[test]
    fn test_digits_and_punctuation_are_boundaries() {
        assert_eq!(letters("1A,(E)"), vec![Letter::A, Letter::E]);
    }

    #[test]
    fn test_duplicates_are_removed_keeping_first_order() {
        assert_eq!(letters("D, A, D"), vec![Letter::D, Letter::A]);
    }

    #[test]
    fn test_incidental_letter_is_extracted() {
        assert_eq!(
            letters("A customer needs C."),
            vec![Letter::A, Letter::C]
        );
    }

    #[test]
    fn test_is_multiple_markers() {
        assert!(is_multiple("Which steps? (Choose two) • A. x"));
        assert!(is_multiple("Which steps? (CHOOSE THREE)"));
        assert!(is_multiple("어떤 단계입니까? (2개 선택)"));
        assert!(is_multiple("어떤 단계입니까? (3개 선택)"));
        assert!(!is_multiple("Which step? Choose wisely."));
    }

    #[test]
    fn test_is_multiple_checks_both_languages() {
        let en = "Which steps should be taken? (Choose two)";
        let ko = "어떤 단계를 수행해야 합니까?";
        assert!(!is_multiple(ko));
        assert!(is_multiple_any(en, ko));
        assert!(is_multiple_any("", "두 가지 (2개 선택)"));
        assert!(!is_multiple_any("Which one?", ko));
    }
}
