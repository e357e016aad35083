// ==========================================
// 施工安全合规评分系统 - 风险组合引擎
// ==========================================
// 依据: Scoring_Engine_Specs_v1.0.md - 2. Risk Engine
// ==========================================
// 职责: 多个风险因子 -> 代表性因子 -> 风险评分 -> 风险等级
// 红线: severity 取最大值(后果主导),probability 取均值(可能性混合)
// ==========================================

use crate::domain::hazard::HazardFactor;
use crate::domain::types::HazardRiskLevel;
use crate::engine::error::EngineError;

// ==========================================
// RiskEngine - 风险组合引擎
// ==========================================
pub struct RiskEngine {
    // 无状态引擎
}

impl RiskEngine {
    /// 创建新的风险组合引擎
    pub fn new() -> Self {
        Self {}
    }

    /// 合并风险因子
    ///
    /// 规则:
    /// - severity = 各因子最大值 (最坏后果主导)
    /// - probability = 各因子算术均值,四舍五入到整数
    ///
    /// # 错误
    /// 因子列表为空时返回 EmptyHazardFactors,调用方必须先行守卫
    pub fn combine(&self, factors: &[HazardFactor]) -> Result<HazardFactor, EngineError> {
        if factors.is_empty() {
            return Err(EngineError::EmptyHazardFactors);
        }

        let max_severity = factors.iter().map(|f| f.severity).max().unwrap_or(0);

        let probability_sum: i32 = factors.iter().map(|f| f.probability).sum();
        let avg_probability = (probability_sum as f64 / factors.len() as f64).round() as i32;

        Ok(HazardFactor::new(
            max_severity,
            avg_probability,
            "Combined risk assessment",
        ))
    }

    /// 风险评分 = severity × probability,取值范围 [1,100]
    pub fn risk_score(&self, severity: i32, probability: i32) -> i32 {
        severity * probability
    }

    /// 风险评分映射到四档风险等级
    ///
    /// 档位下界均为闭区间: 50分恰为 CRITICAL,30分恰为 HIGH,15分恰为 MEDIUM
    pub fn risk_level(&self, score: i32) -> HazardRiskLevel {
        if score >= 50 {
            return HazardRiskLevel::Critical;
        }
        if score >= 30 {
            return HazardRiskLevel::High;
        }
        if score >= 15 {
            return HazardRiskLevel::Medium;
        }
        HazardRiskLevel::Low
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}
