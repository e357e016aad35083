// ==========================================
// 施工安全合规评分系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 UI/外部集成层调用
// ==========================================

pub mod error;
pub mod safety_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use safety_api::{SafetyApi, TaskRiskAssessment};
