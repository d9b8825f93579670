//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责整份题库的批量处理，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `ingest` - 题库导入
//! - 遍历导出文档，提取文本并解析题目
//! - 单个文件失败时跳过
//! - 校验 ID 唯一后保存题库
//!
//! ### `enhancement_pass` - 题库增强
//! - 加载题库和翻译词典
//! - 对每道题执行 EnhanceFlow
//! - 保存并输出统计
//!
//! ### `dictionary_builder` - 翻译词典构建
//! - 收集所有英文选项
//! - 沿用已有的正确翻译
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator (处理 Vec<Question> 和文件)
//!     ↓
//! workflow::EnhanceFlow / QuizSession (处理单个 Question)
//!     ↓
//! services (能力层：parse / translate / explain / select)
//!     ↓
//! infrastructure (基础设施：DocumentExtractor)
//! ```

pub mod dictionary_builder;
pub mod enhancement_pass;
pub mod ingest;

// 重新导出主要类型
pub use dictionary_builder::{build_dictionary, build_dictionary_file, DictionaryStats};
pub use enhancement_pass::{enhance_all, run_enhancement_pass, EnhanceStats};
pub use ingest::{parse_documents, run_ingest, IngestStats};
