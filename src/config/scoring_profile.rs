// ==========================================
// 施工安全合规评分系统 - 评分阈值配置
// ==========================================
// 依据: Safety_DSS_Master_Spec.md - PART E 配置体系
// ==========================================
// 职责: 策略(阈值)与机制(遍历聚合算法)解耦
// 说明: 阈值随模板元数据下发,本层提供档位预设与覆写
// ==========================================

use crate::domain::checklist::ChecklistMetadata;
use serde::{Deserialize, Serialize};

/// 评分阈值档位 (可持久化对象)
///
/// 由模板发布方维护,应用到模板元数据后生效
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringProfile {
    /// 档位 ID (用于选择/引用)
    pub profile_id: String,

    /// 显示名称
    pub title: String,

    /// 说明 (可选)
    #[serde(default)]
    pub description: Option<String>,

    /// 基于哪个预设档位 (standard/strict/lenient)
    pub base_profile: String,

    /// 覆写参数 (缺省项沿用基础档位)
    #[serde(default)]
    pub parameters: ScoringProfileParameters,
}

/// 评分阈值覆写参数
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoringProfileParameters {
    /// 通过线 (百分比)
    #[serde(default)]
    pub minimum_passing_score: Option<i32>,

    /// 复训线 (百分比)
    #[serde(default)]
    pub retrain_threshold: Option<i32>,

    /// 红线失败容忍次数
    #[serde(default)]
    pub critical_failure_threshold: Option<i32>,
}

impl ScoringProfile {
    /// 将档位参数应用到模板元数据
    ///
    /// 仅覆写显式给定的参数,其余保持模板原值
    pub fn apply_to(&self, metadata: &mut ChecklistMetadata) {
        if let Some(score) = self.parameters.minimum_passing_score {
            metadata.minimum_passing_score = score;
        }
        if let Some(threshold) = self.parameters.retrain_threshold {
            metadata.retrain_threshold = threshold;
        }
        if let Some(count) = self.parameters.critical_failure_threshold {
            metadata.critical_failure_threshold = count;
        }
    }
}
