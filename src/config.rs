use crate::error::{AppError, AppResult, FileError};
use crate::models::DisplayMode;
use serde::Deserialize;
use std::path::Path;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题库 JSON 文件
    pub corpus_path: String,
    /// 选项翻译词典 JSON 文件
    pub translations_path: String,
    /// 错题笔记输出文件
    pub wrong_note_path: String,
    /// 题目显示语言模式
    pub display_mode: DisplayMode,
    /// 混合模式的随机种子（为空时使用系统随机数）
    pub mixed_seed: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: "data/questions.json".to_string(),
            translations_path: "data/choices_translations.json".to_string(),
            wrong_note_path: "data/wrong_answers.txt".to_string(),
            display_mode: DisplayMode::En,
            mixed_seed: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量加载，缺失项使用默认值
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载，再用环境变量覆盖
    ///
    /// 文件中缺失的字段使用默认值
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            AppError::File(FileError::TomlParseFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })
        })?;

        Ok(config.with_env_overrides())
    }

    fn with_env_overrides(self) -> Self {
        Self {
            corpus_path: std::env::var("CORPUS_PATH").unwrap_or(self.corpus_path),
            translations_path: std::env::var("TRANSLATIONS_PATH")
                .unwrap_or(self.translations_path),
            wrong_note_path: std::env::var("WRONG_NOTE_PATH").unwrap_or(self.wrong_note_path),
            display_mode: std::env::var("DISPLAY_MODE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.display_mode),
            mixed_seed: std::env::var("MIXED_SEED")
                .ok()
                .and_then(|v| v.parse().ok())
                .or(self.mixed_seed),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
        }
    }
}
