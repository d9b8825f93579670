//! 错题笔记写入服务 - 业务能力层
//!
//! 只负责"把错题写进笔记文件"能力，不关心答题流程

use crate::error::{AppError, AppResult};
use crate::models::Question;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// 错题笔记写入服务
pub struct WrongNoteWriter {
    note_file_path: PathBuf,
}

impl WrongNoteWriter {
    /// 使用默认文件路径创建
    pub fn new() -> Self {
        Self::with_path("wrong_answers.txt")
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            note_file_path: path.into(),
        }
    }

    /// 追加一份错题笔记，返回写入的题目数
    ///
    /// 没有错题时不写文件
    pub fn write(&self, questions: &[&Question]) -> AppResult<usize> {
        if questions.is_empty() {
            return Ok(0);
        }

        debug!(
            "写入错题笔记: {} 道题目 → {}",
            questions.len(),
            self.note_file_path.display()
        );

        let mut content = format!(
            "{}\nAWS Certification Wrong Answer Notes - {}\n{}\n\n",
            "=".repeat(60),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            "=".repeat(60)
        );
        for (i, question) in questions.iter().enumerate() {
            content.push_str(&format_note(i + 1, question));
        }

        let path = self.note_file_path.display().to_string();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.note_file_path)
            .map_err(|e| AppError::file_write_failed(path.clone(), e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| AppError::file_write_failed(path, e))?;

        Ok(questions.len())
    }
}

impl Default for WrongNoteWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_note(number: usize, question: &Question) -> String {
    format!(
        "Q{}. (Original ID: {})\nEN: {}\nKO: {}\nCorrect Answer: {}\n{}\n\n",
        number,
        question.id,
        question.question_en,
        question.question_ko,
        question.answer,
        "-".repeat(60)
    )
}
