// ==========================================
// 施工安全合规评分系统 - 领域模型层
// ==========================================
// 依据: Safety_DSS_Master_Spec.md - PART C 数据体系
// ==========================================
// 职责: 定义领域实体、类型与模板索引
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod checklist;
pub mod hazard;
pub mod response;
pub mod scoring;
pub mod types;

// 重导出核心类型
pub use checklist::{
    ChecklistCategory, ChecklistDefinition, ChecklistIndex, ChecklistItem, ChecklistMetadata,
    DefinitionError, IndexedItem, SiteContext,
};
pub use hazard::{HazardFactor, TaskDescriptor, WeatherReading};
pub use response::ItemResponse;
pub use scoring::{EvaluationRecord, ScoringResult};
pub use types::{
    CategoryPriority, EscalationAction, HazardRiskLevel, RecommendedAction, VerificationType,
    WeatherRiskLevel,
};
