use crate::error::{AppError, AppResult, CorpusError, FileError};
use crate::models::question::Question;
use crate::models::TranslationDict;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// 从 JSON 文件加载题库，并校验题目 ID 唯一
pub async fn load_corpus(path: &Path) -> AppResult<Vec<Question>> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        return Err(FileError::NotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let questions: Vec<Question> = serde_json::from_str(&content)
        .map_err(|e| AppError::json_parse_failed(path.display().to_string(), e))?;

    validate_corpus(&questions)?;

    tracing::info!(
        "成功加载 {} 道题目: {}",
        questions.len(),
        path.file_name().unwrap_or_default().to_string_lossy()
    );

    Ok(questions)
}

/// 保存题库（4 空格缩进，保留非 ASCII 字符）
pub async fn save_corpus(path: &Path, questions: &[Question]) -> AppResult<()> {
    let content = to_pretty_json(&questions, b"    ")?;
    write_file(path, content).await?;
    tracing::info!("✓ 已保存 {} 道题目至: {}", questions.len(), path.display());
    Ok(())
}

/// 校验题目 ID 唯一，遇到第一个重复立即报错
pub fn validate_corpus(questions: &[Question]) -> Result<(), CorpusError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(questions.len());

    for (index, question) in questions.iter().enumerate() {
        if let Some(&first) = seen.get(question.id.as_str()) {
            return Err(CorpusError::DuplicateId {
                id: question.id.clone(),
                first,
                second: index,
            });
        }
        seen.insert(question.id.as_str(), index);
    }

    Ok(())
}

/// 加载选项翻译词典
///
/// 文件不存在时返回空词典；内容损坏时报错
pub async fn load_translations(path: &Path) -> AppResult<TranslationDict> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        tracing::warn!("⚠️ 翻译词典不存在，使用空词典: {}", path.display());
        return Ok(TranslationDict::new());
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let dict: TranslationDict = serde_json::from_str(&content)
        .map_err(|e| AppError::json_parse_failed(path.display().to_string(), e))?;

    let translated = dict.values().filter(|v| !v.is_empty()).count();
    tracing::info!("成功加载翻译词典: {} 条（已翻译 {} 条）", dict.len(), translated);

    Ok(dict)
}

/// 保存选项翻译词典（2 空格缩进，键有序）
pub async fn save_translations(path: &Path, dict: &TranslationDict) -> AppResult<()> {
    let content = to_pretty_json(dict, b"  ")?;
    write_file(path, content).await?;
    tracing::info!("✓ 已保存翻译词典 ({} 条) 至: {}", dict.len(), path.display());
    Ok(())
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: &[u8]) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

async fn write_file(path: &Path, content: Vec<u8>) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::file_write_failed(parent.display().to_string(), e))?;
    }
    fs::write(path, content)
        .await
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(id: &str) -> Question {
        Question::new(id, "What?", "", "A")
    }

    #[test]
    fn test_validate_reports_first_duplicate() {
        let questions = vec![q("1"), q("2"), q("3"), q("2"), q("1")];
        match validate_corpus(&questions) {
            Err(CorpusError::DuplicateId { id, first, second }) => {
                assert_eq!(id, "2");
                assert_eq!(first, 1);
                assert_eq!(second, 3);
            }
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_unique_ids() {
        assert!(validate_corpus(&[q("1"), q("2")]).is_ok());
        assert!(validate_corpus(&[]).is_ok());
    }

    #[tokio::test]
    async fn test_missing_translations_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let dict = load_translations(&dir.path().join("none.json")).await.unwrap();
        assert!(dict.is_empty());
    }

    #[tokio::test]
    async fn test_missing_corpus_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_corpus(&dir.path().join("none.json")).await.unwrap_err();
        assert!(matches!(err, AppError::File(FileError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_translations_roundtrip_keeps_korean() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.json");

        let mut dict = TranslationDict::new();
        dict.insert("Training".to_string(), "학습".to_string());
        dict.insert("Accuracy".to_string(), String::new());
        save_translations(&path, &dict).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("학습"));
        assert!(raw.find("Accuracy").unwrap() < raw.find("Training").unwrap());

        assert_eq!(load_translations(&path).await.unwrap(), dict);
    }
}
