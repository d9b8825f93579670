//! 文档提取器 - 基础设施层
//!
//! 只暴露"把文档读成按页划分的文本"的能力，不认识题目格式

use crate::error::{AppError, AppResult, FileError};
use std::path::Path;
use tracing::debug;

/// 分页符，`pdftotext` 在页与页之间输出
const PAGE_SEPARATOR: char = '\x0c';

/// 文档提取器
///
/// 职责：
/// - 读取一个文档文件
/// - 返回每一页的文本
/// - 不处理题目解析
pub trait DocumentExtractor {
    /// 提取文档的每一页文本
    ///
    /// # 参数
    /// - `path`: 文档路径
    ///
    /// # 返回
    /// 按页顺序的文本列表
    fn extract_pages(&self, path: &Path) -> AppResult<Vec<String>>;

    /// 提取全文，页与页之间以换行连接
    fn extract_text(&self, path: &Path) -> AppResult<String> {
        Ok(self.extract_pages(path)?.join("\n"))
    }
}

/// 纯文本提取器
///
/// 读取 UTF-8 文本文件，按分页符拆分页面
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for PlainTextExtractor {
    fn extract_pages(&self, path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Err(FileError::NotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        let pages: Vec<String> = content
            .split(PAGE_SEPARATOR)
            .filter(|page| !page.trim().is_empty())
            .map(str::to_string)
            .collect();

        debug!("提取 {} 页文本: {}", pages.len(), path.display());
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_pages_on_form_feed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "page one\x0cpage two\n\x0c  \x0c").unwrap();

        let pages = PlainTextExtractor::new().extract_pages(file.path()).unwrap();
        assert_eq!(pages, vec!["page one".to_string(), "page two\n".to_string()]);
    }

    #[test]
    fn test_extract_text_joins_pages() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1. A\x0c2. B").unwrap();

        let text = PlainTextExtractor::new().extract_text(file.path()).unwrap();
        assert_eq!(text, "1. A\n2. B");
    }

    #[test]
    fn test_missing_file() {
        let err = PlainTextExtractor::new()
            .extract_pages(Path::new("/nonexistent/dump.txt"))
            .unwrap_err();
        assert!(matches!(err, AppError::File(FileError::NotFound { .. })));
    }
}
