// ==========================================
// 施工安全合规评分系统 - 核心库
// ==========================================
// 依据: Safety_DSS_Master_Spec.md - 系统宪法
// 系统定位: 决策支持系统 (人工最终控制权)
// 判定核心: 加权合规评分 + 红线短路 + 处置分档
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 判定规则
pub mod engine;

// 配置层 - 评分阈值档位
pub mod config;

// 内置检查表目录
pub mod catalog;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    CategoryPriority, EscalationAction, HazardRiskLevel, RecommendedAction, VerificationType,
    WeatherRiskLevel,
};

// 领域实体
pub use domain::{
    ChecklistCategory, ChecklistDefinition, ChecklistIndex, ChecklistItem, ChecklistMetadata,
    DefinitionError, EvaluationRecord, HazardFactor, ItemResponse, ScoringResult, SiteContext,
    TaskDescriptor, WeatherReading,
};

// 引擎
pub use engine::{
    EngineError, EscalationResolver, FollowUpEngine, HazardEngine, RiskEngine, ScoringEngine,
    WeatherAssessment, WeatherEngine,
};

// 配置
pub use config::{ScoringProfile, ScoringProfileParameters};

// API
pub use api::{ApiError, ApiResult, SafetyApi, TaskRiskAssessment};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "施工安全合规评分系统";

// ==========================================
// 预编译检查
// ==========================================
