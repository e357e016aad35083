// ==========================================
// 施工安全合规评分系统 - 评分结果领域模型
// ==========================================
// 依据: Safety_DSS_Master_Spec.md - PART G 判定输出
// 依据: Scoring_Engine_Specs_v1.0.md - 4. Scoring Engine
// ==========================================

use crate::domain::types::RecommendedAction;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// ScoringResult - 评分结果
// ==========================================
// 纯派生输出,创建后不再变更;
// 同一 (模板, 回执) 输入两次评估结果必须完全一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    // ===== 判定结论 =====
    pub score: i32,                           // 得分 [0,100]
    pub passed: bool,                         // 是否通过
    pub critical_failure_count: i32,          // 红线类别失败次数
    pub recommended_action: RecommendedAction, // 建议处置

    // ===== 权重口径 =====
    pub achieved_weight: f64, // 得分权重
    pub total_weight: f64,    // 参评总权重

    // ===== 数据质量 =====
    pub unknown_item_count: i32, // 无法匹配模板的回执数 (非致命,仅诊断)

    // ===== 可解释性 =====
    pub reason: String, // 判定原因 (JSON)
}

// ==========================================
// EvaluationRecord - 评估记录
// ==========================================
// 用途: 供 UI/API 层展示与留痕的只读记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub evaluation_id: String,     // 评估ID
    pub definition_id: String,     // 关联检查表模板
    pub definition_title: String,  // 模板名称
    pub response_count: i32,       // 回执数量
    pub result: ScoringResult,     // 评分结果
    pub created_at: NaiveDateTime, // 评估时间
}
