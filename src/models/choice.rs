//! 选项相关的数据结构
//!
//! - `Letter`：选项字母 A–E
//! - `ChoiceSet`：按出现顺序保存的 字母 → 选项文本
//! - `AnswerKey`：正确答案字母集合

use serde::{Deserialize, Serialize};
use std::fmt;

/// 选项字母
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
}

impl Letter {
    /// 从大写字符解析，仅接受 A–E
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// 解析后的选项集合
///
/// 字母唯一，插入顺序即原文出现顺序；显示时用 `sorted()` 按字母排序。
/// 序列化为 JSON 对象（`{"A": "...", "B": "..."}`），保持插入顺序。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceSet {
    entries: Vec<(Letter, String)>,
}

impl ChoiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入选项
    ///
    /// 字母已存在时替换文本，位置保持不变
    pub fn insert(&mut self, letter: Letter, text: impl Into<String>) {
        let text = text.into();
        match self.entries.iter_mut().find(|(l, _)| *l == letter) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((letter, text)),
        }
    }

    pub fn get(&self, letter: Letter) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(_, text)| text.as_str())
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.get(letter).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按插入顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (Letter, &str)> {
        self.entries.iter().map(|(l, text)| (*l, text.as_str()))
    }

    /// 按插入顺序返回所有字母
    pub fn letters(&self) -> Vec<Letter> {
        self.entries.iter().map(|(l, _)| *l).collect()
    }

    /// 第一个选项的文本（按插入顺序）
    pub fn first_text(&self) -> Option<&str> {
        self.entries.first().map(|(_, text)| text.as_str())
    }

    /// 按字母排序的选项列表（用于显示）
    pub fn sorted(&self) -> Vec<(Letter, &str)> {
        let mut sorted: Vec<(Letter, &str)> = self.iter().collect();
        sorted.sort_by_key(|(l, _)| *l);
        sorted
    }
}

impl FromIterator<(Letter, String)> for ChoiceSet {
    fn from_iter<I: IntoIterator<Item = (Letter, String)>>(iter: I) -> Self {
        let mut set = ChoiceSet::new();
        for (letter, text) in iter {
            set.insert(letter, text);
        }
        set
    }
}

impl Serialize for ChoiceSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (letter, text) in &self.entries {
            map.serialize_entry(&letter.as_char().to_string(), text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChoiceSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{MapAccess, Visitor};

        struct ChoiceSetVisitor;

        impl<'de> Visitor<'de> for ChoiceSetVisitor {
            type Value = ChoiceSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map from option letter (A-E) to option text")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                use serde::de::Error;

                let mut set = ChoiceSet::new();
                while let Some((key, text)) = access.next_entry::<String, String>()? {
                    let mut chars = key.chars();
                    let letter = match (chars.next(), chars.next()) {
                        (Some(c), None) => Letter::from_char(c),
                        _ => None,
                    }
                    .ok_or_else(|| M::Error::custom(format!("invalid option letter: {}", key)))?;
                    set.insert(letter, text);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(ChoiceSetVisitor)
    }
}

/// 正确答案字母集合
///
/// 保持首次出现顺序，不含重复字母
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerKey {
    letters: Vec<Letter>,
}

impl AnswerKey {
    pub fn from_letters(letters: impl IntoIterator<Item = Letter>) -> Self {
        let mut key = AnswerKey::default();
        for letter in letters {
            if !key.letters.contains(&letter) {
                key.letters.push(letter);
            }
        }
        key
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn is_multiple(&self) -> bool {
        self.letters.len() > 1
    }

    /// 只保留选项集合中存在的字母
    ///
    /// 选项集合为空（如 HOTSPOT）时原样返回
    pub fn restrict_to(&self, choices: &ChoiceSet) -> AnswerKey {
        if choices.is_empty() {
            return self.clone();
        }
        AnswerKey::from_letters(self.letters.iter().copied().filter(|l| choices.contains(*l)))
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.letters.iter().map(|l| l.to_string()).collect();
        write!(f, "{}", joined.join(", "))
    }
}
