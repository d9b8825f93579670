//! # AWS Quiz Prep
//!
//! AWS 认证考试刷题工具：把导出的题库文档解析成 JSON 题库，
//! 为选项补充韩语翻译，并按显示语言出题、判分。
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、选项、答案字母、显示语言
//! - `models/loaders` - 题库和翻译词典的读写与校验
//!
//! ### ② 基础设施层（Infrastructure）
//! - `infrastructure/` - 只暴露"读取文档文本"的能力
//! - `DocumentExtractor` - 按页提取文本
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单段文本或单个 Question
//! - `choice_parser` - 从题目文本中拆出题干和选项
//! - `answer_extractor` - 提取正确答案字母，判断多选
//! - `LanguageSelector` - 按显示模式选择题干和选项
//! - `PhraseTranslator` - 选项的词典 + 规则翻译
//! - `explanation_service` - 补充答案解析
//! - `dump_parser` - 把导出全文拆成题目记录
//! - `WrongNoteWriter` - 写错题笔记
//!
//! ### ④ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整处理流程
//! - `EnhanceFlow` - 翻译选项 → 补充解析
//! - `QuizSession` - 答题状态与判分
//!
//! ### ⑤ 编排层（Orchestration）
//! - `orchestrator/ingest` - 导入题库
//! - `orchestrator/enhancement_pass` - 增强整份题库
//! - `orchestrator/dictionary_builder` - 生成翻译词典
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{DocumentExtractor, PlainTextExtractor};
pub use models::{AnswerKey, ChoiceSet, DisplayMode, Language, Letter, ParsedQuestion, Question};
pub use services::{ChoiceSource, DisplayQuestion, LanguageSelector, PhraseTranslator, WrongNoteWriter};
pub use workflow::{EnhanceFlow, EnhanceOutcome, QuizSession};
