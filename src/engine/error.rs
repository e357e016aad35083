// ==========================================
// 施工安全合规评分系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 模板缺陷与安全判定失败必须是两种不同的出口
// ==========================================

use crate::domain::checklist::DefinitionError;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 模板完整性错误 (致命,评分前拦截) =====
    #[error("检查表模板完整性错误: {0}")]
    Definition(#[from] DefinitionError),

    // ===== 输入契约错误 (调用方必须先行守卫) =====
    #[error("风险因子组合输入为空: 至少需要一个风险因子")]
    EmptyHazardFactors,
}
