//! 题库导入处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **遍历文件**：逐个提取导出文档的文本
//! 2. **解析**：把全文拆成题目记录
//! 3. **容错**：单个文件失败只记录日志并跳过
//! 4. **校验并保存**：题目 ID 重复时直接报错，不写文件

use crate::infrastructure::DocumentExtractor;
use crate::models::{save_corpus, validate_corpus, Question};
use crate::services::dump_parser;
use crate::utils::logging::print_final_stats;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// 导入统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    pub files: usize,
    pub failed_files: usize,
    pub questions: usize,
}

/// 从多个文档解析题目，不做校验
pub fn parse_documents<E: DocumentExtractor>(
    extractor: &E,
    inputs: &[PathBuf],
) -> (Vec<Question>, IngestStats) {
    let mut stats = IngestStats {
        files: inputs.len(),
        ..Default::default()
    };
    let mut questions = Vec::new();

    for (index, input) in inputs.iter().enumerate() {
        info!(
            "[文件 {}/{}] 📄 正在处理: {}",
            index + 1,
            inputs.len(),
            input.display()
        );

        match extractor.extract_text(input) {
            Ok(text) => {
                let parsed = dump_parser::parse_dump(&text);
                if parsed.is_empty() {
                    warn!("[文件 {}] ⚠️ 没有解析出任何题目", index + 1);
                } else {
                    info!("[文件 {}] ✓ 解析出 {} 道题目", index + 1, parsed.len());
                }
                questions.extend(parsed);
            }
            Err(e) => {
                error!("[文件 {}] ❌ 提取失败，已跳过: {}", index + 1, e);
                stats.failed_files += 1;
            }
        }
    }

    stats.questions = questions.len();
    (questions, stats)
}

/// 提取 → 解析 → 校验 → 保存
///
/// # 参数
/// - `extractor`: 文档提取器
/// - `inputs`: 导出文档列表
/// - `output_path`: 题库输出文件
pub async fn run_ingest<E: DocumentExtractor>(
    extractor: &E,
    inputs: &[PathBuf],
    output_path: &Path,
) -> Result<IngestStats> {
    let (questions, stats) = parse_documents(extractor, inputs);

    validate_corpus(&questions).context("导入的题目 ID 重复，已取消保存")?;

    save_corpus(output_path, &questions)
        .await
        .with_context(|| format!("无法保存题库: {}", output_path.display()))?;

    print_final_stats(
        "题库导入统计",
        &[
            ("文件总数", stats.files),
            ("失败文件", stats.failed_files),
            ("题目总数", stats.questions),
        ],
    );

    Ok(stats)
}
