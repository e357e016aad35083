// ==========================================
// 施工安全合规评分系统 - 引擎层
// ==========================================
// 依据: Safety_DSS_Master_Spec.md - PART D 引擎体系
// ==========================================
// 职责: 实现安全判定业务规则
// 红线: 引擎无状态无IO, 所有判定必须输出 reason
// ==========================================

pub mod error;
pub mod escalation;
pub mod followup;
pub mod hazard;
pub mod risk;
pub mod scoring;
pub mod weather;

// 重导出核心引擎
pub use error::EngineError;
pub use escalation::EscalationResolver;
pub use followup::FollowUpEngine;
pub use hazard::HazardEngine;
pub use risk::RiskEngine;
pub use scoring::ScoringEngine;
pub use weather::{WeatherAssessment, WeatherEngine};
