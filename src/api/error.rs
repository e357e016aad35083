// ==========================================
// 施工安全合规评分系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换引擎错误为用户可读的错误消息
// 红线: 模板缺陷不是安全判定失败,必须以独立错误出口上报
// ==========================================

use crate::domain::checklist::DefinitionError;
use crate::engine::error::EngineError;
use thiserror::Error;

/// API层错误类型
///
/// 所有错误信息必须包含显式原因 (可解释性)
#[derive(Error, Debug)]
pub enum ApiError {
    /// 检查表模板完整性错误 (评分前拦截)
    #[error("检查表模板完整性错误: {0}")]
    DefinitionIntegrity(String),

    /// 输入契约违反 (调用方守卫缺失)
    #[error("输入为空: {0}")]
    EmptyInput(String),

    /// 内部错误 (按设计不应到达)
    #[error("内部错误: {0}")]
    Internal(String),
}

/// API层统一结果类型
pub type ApiResult<T> = Result<T, ApiError>;

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match &err {
            EngineError::Definition(e) => ApiError::DefinitionIntegrity(e.to_string()),
            EngineError::EmptyHazardFactors => ApiError::EmptyInput(err.to_string()),
        }
    }
}

impl From<DefinitionError> for ApiError {
    fn from(err: DefinitionError) -> Self {
        ApiError::DefinitionIntegrity(err.to_string())
    }
}
