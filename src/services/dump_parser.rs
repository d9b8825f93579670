//! 题库导出文本解析服务 - 业务能力层
//!
//! 把文档提取出的全文拆成一道道题目记录。每道题的格式：
//!
//! ```text
//! 121. A manufacturing company ... 요약: ... 전체 번역: ... 정답: B. ...
//! ```

use super::choice_parser::collapse_whitespace;
use crate::models::Question;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// 题号开头："数字. 大写字母"
static QUESTION_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,3}\.\s[A-Z]").expect("题号正则无效"));

static LEADING_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)").expect("题号正则无效"));

static ANSWER_HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"정답:\s*([A-E,\s\.]+)").expect("答案正则无效"));

/// 答案之后出现的下一个题号
static NEXT_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\d{1,3}\.").expect("题号正则无效"));

static EN_HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("题号正则无效"));

const SUMMARY_LABEL: &str = "요약:";
const TRANSLATION_LABEL: &str = "전체 번역:";
const ANSWER_LABEL: &str = "정답:";

/// 解析全文，缺少任一字段的题目块会被跳过
pub fn parse_dump(full_text: &str) -> Vec<Question> {
    split_blocks(full_text)
        .into_iter()
        .filter_map(|block| {
            let cleaned = clean_text(block);
            let parsed = parse_block(&cleaned);
            if parsed.is_none() {
                debug!(
                    "跳过无法解析的题目块: {}",
                    crate::utils::logging::truncate_text(&cleaned, 60)
                );
            }
            parsed
        })
        .collect()
}

/// 修正提取时损坏的符号，并压缩空白
pub fn clean_text(text: &str) -> String {
    let replaced = text.replace('㏙', "(").replace('㏚', ")").replace('㎿', "-");
    collapse_whitespace(&replaced)
}

/// 按题号切分，题号之前的内容丢弃
fn split_blocks(full_text: &str) -> Vec<&str> {
    let starts: Vec<usize> = QUESTION_START_RE
        .find_iter(full_text)
        .map(|m| m.start())
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(full_text.len());
            &full_text[start..end]
        })
        .collect()
}

fn parse_block(block: &str) -> Option<Question> {
    let id = LEADING_ID_RE.captures(block)?.get(1)?.as_str().to_string();
    let answer = extract_answer(block)?;
    let question_ko = text_between(block, TRANSLATION_LABEL, ANSWER_LABEL)?;
    let question_en = extract_english(block)?;

    Some(Question::new(id, question_en, question_ko, answer))
}

/// `정답:` 之后的答案字母，连同后续说明，直到下一个题号或结尾
fn extract_answer(block: &str) -> Option<String> {
    let caps = ANSWER_HEAD_RE.captures(block)?;
    let head = caps.get(1)?;
    let rest = &block[head.end()..];
    let tail_end = NEXT_NUMBER_RE.find(rest).map_or(rest.len(), |m| m.start());

    let answer = format!("{}{}", head.as_str(), &rest[..tail_end]);
    Some(answer.trim().to_string())
}

/// 题号之后到 `요약:` 之前
fn extract_english(block: &str) -> Option<String> {
    let head = EN_HEAD_RE.find(block)?;
    let rest = &block[head.end()..];
    let end = rest.find(SUMMARY_LABEL)?;
    Some(rest[..end].trim().to_string())
}

/// `start_label` 之后到 `end_label` 之前
fn text_between(block: &str, start_label: &str, end_label: &str) -> Option<String> {
    let start = block.find(start_label)? + start_label.len();
    let rest = &block[start..];
    let end = rest.find(end_label)?;
    Some(rest[..end].trim().to_string())
}
