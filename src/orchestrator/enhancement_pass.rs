//! 题库增强处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **加载**：读取题库和翻译词典
//! 2. **遍历题目**：对每道题执行 `EnhanceFlow`
//! 3. **保存**：写回题库文件
//! 4. **统计输出**：记录翻译/解析数量
//!
//! 对已经增强过的题库再次执行不会产生变化

use crate::models::{load_corpus, load_translations, save_corpus, Question};
use crate::services::PhraseTranslator;
use crate::utils::logging::{log_corpus_loaded, print_final_stats, truncate_text};
use crate::workflow::EnhanceFlow;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// 增强统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnhanceStats {
    pub total: usize,
    /// 有任何修改的题目数
    pub enhanced: usize,
    pub translated: usize,
    pub explained: usize,
}

/// 对内存中的题目逐一执行增强流程
pub fn enhance_all(flow: &EnhanceFlow, questions: &mut [Question]) -> EnhanceStats {
    let mut stats = EnhanceStats {
        total: questions.len(),
        ..Default::default()
    };

    for question in questions.iter_mut() {
        let outcome = flow.run(question);
        if outcome.changed() {
            stats.enhanced += 1;
            debug!(
                "[题目 {}] ✓ 已增强: {}",
                question.id,
                truncate_text(&question.question_en, 40)
            );
        }
        if outcome.translated {
            stats.translated += 1;
        }
        if outcome.explained {
            stats.explained += 1;
        }
    }

    stats
}

/// 读取题库 → 增强全部题目 → 保存
///
/// # 参数
/// - `corpus_path`: 题库文件（原地更新）
/// - `translations_path`: 翻译词典文件（不存在时只用规则翻译）
/// - `verbose_logging`: 是否输出每道题的翻译日志
pub async fn run_enhancement_pass(
    corpus_path: &Path,
    translations_path: &Path,
    verbose_logging: bool,
) -> Result<EnhanceStats> {
    info!("\n📁 正在读取题库: {}", corpus_path.display());
    let mut questions = load_corpus(corpus_path)
        .await
        .with_context(|| format!("无法加载题库: {}", corpus_path.display()))?;
    log_corpus_loaded(questions.len(), &corpus_path.display().to_string());

    let dictionary = load_translations(translations_path)
        .await
        .with_context(|| format!("无法加载翻译词典: {}", translations_path.display()))?;

    let flow = EnhanceFlow::new(PhraseTranslator::new(dictionary), verbose_logging);
    let stats = enhance_all(&flow, &mut questions);

    save_corpus(corpus_path, &questions)
        .await
        .with_context(|| format!("无法保存题库: {}", corpus_path.display()))?;

    print_final_stats(
        "题库增强统计",
        &[
            ("题目总数", stats.total),
            ("已增强", stats.enhanced),
            ("翻译选项", stats.translated),
            ("补充解析", stats.explained),
        ],
    );

    Ok(stats)
}
