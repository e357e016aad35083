// ==========================================
// 施工安全合规评分系统 - 配置层
// ==========================================
// 依据: Safety_DSS_Master_Spec.md - PART E 配置体系
// ==========================================
// 职责: 评分阈值档位管理
// ==========================================

pub mod scoring_profile;

// 重导出核心配置类型
pub use scoring_profile::{ScoringProfile, ScoringProfileParameters};
