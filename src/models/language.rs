use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 题目文本语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// 英语
    En,
    /// 韩语
    Ko,
}

impl Language {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ko => "한국어",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 显示语言模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// 始终英语
    En,
    /// 优先韩语，缺失时回退到英语
    Ko,
    /// 每道题随机选择语言
    Mixed,
}

impl FromStr for DisplayMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(DisplayMode::En),
            "ko" | "korean" | "한국어" => Ok(DisplayMode::Ko),
            "mixed" | "mix" => Ok(DisplayMode::Mixed),
            _ => Err(ConfigError::UnknownDisplayMode {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayMode::En => "en",
            DisplayMode::Ko => "ko",
            DisplayMode::Mixed => "mixed",
        };
        write!(f, "{}", name)
    }
}

/// 字符是否为完整的韩文音节（가–힣）
pub fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// 文本是否包含韩文音节
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(is_hangul_syllable)
}
