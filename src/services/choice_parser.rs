//! 选项解析服务 - 业务能力层
//!
//! 把原始题目文本拆成"题干 + 选项"。
//! 选项标记形如 `• A. `（项目符号 `•` 或 `·`，大写字母 A–E，句点，至少一个空白）。

use crate::models::{ChoiceSet, Letter, ParsedQuestion};
use regex::Regex;
use std::sync::LazyLock;

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[•·]\s*([A-E])\.\s+").expect("选项标记正则无效"));

const HOTSPOT_MARKER: &str = "HOTSPOT";

/// 选项最少数量，少于该数量视为无选项题
const MIN_CHOICES: usize = 2;

/// 一个选项标记在文本中的位置
struct Marker {
    start: usize,
    end: usize,
    letter: Letter,
}

/// 解析题目文本
///
/// - HOTSPOT 题：题干为去空白后的全文，无选项
/// - 标记少于 2 个，或有效选项少于 2 个：题干为压缩空白后的全文，无选项
/// - 其余：题干为第一个标记之前的文本（压缩空白），选项按出现顺序保存
///
/// 任何输入都不会报错
pub fn parse(text: &str) -> ParsedQuestion {
    let normalized = text.replace('\0', "");
    let text = normalized.trim();

    if is_hotspot(text) {
        return ParsedQuestion::without_choices(text);
    }

    let markers = find_markers(text);
    if markers.len() < MIN_CHOICES {
        return ParsedQuestion::without_choices(collapse_whitespace(text));
    }

    let mut choices = ChoiceSet::new();
    for (i, marker) in markers.iter().enumerate() {
        let span_end = markers.get(i + 1).map_or(text.len(), |next| next.start);
        let choice_text = clean_span(&text[marker.end..span_end]);

        if !choice_text.is_empty() {
            choices.insert(marker.letter, choice_text);
        }
    }

    // 空选项被丢弃或字母重复后可能只剩 1 个，不允许出现单选项结果
    if choices.len() < MIN_CHOICES {
        return ParsedQuestion::without_choices(collapse_whitespace(text));
    }

    ParsedQuestion {
        body: collapse_whitespace(&text[..markers[0].start]),
        choices,
    }
}

/// 只取选项（题干丢弃）
pub fn parse_choices(text: &str) -> ChoiceSet {
    parse(text).choices
}

/// 文本是否以 HOTSPOT 开头（不区分大小写）
pub fn is_hotspot(text: &str) -> bool {
    text.get(..HOTSPOT_MARKER.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(HOTSPOT_MARKER))
}

/// 把连续空白压缩为单个空格，并去掉首尾空白
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn find_markers(text: &str) -> Vec<Marker> {
    MARKER_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let letter = caps
                .get(1)
                .and_then(|m| m.as_str().chars().next())
                .and_then(Letter::from_char)?;
            Some(Marker {
                start: whole.start(),
                end: whole.end(),
                letter,
            })
        })
        .collect()
}

fn clean_span(span: &str) -> &str {
    span.trim()
        .trim_end_matches(|c: char| c == '•' || c == '·' || c.is_whitespace())
}
