// ==========================================
// 施工安全合规评分系统 - 任务风险识别引擎
// ==========================================
// 依据: Scoring_Engine_Specs_v1.0.md - 1.4 任务风险规则
// ==========================================
// 职责: 任务画像 -> 固有风险因子清单
// 输入: TaskDescriptor (任务类型/设备/材料/作业高度)
// 输出: Vec<HazardFactor> (规则可叠加命中,不去重)
// ==========================================

use crate::domain::hazard::{HazardFactor, TaskDescriptor};
use tracing::debug;

// ==========================================
// HazardEngine - 任务风险识别引擎
// ==========================================
pub struct HazardEngine {
    // 无状态引擎,规则内置
}

impl HazardEngine {
    /// 创建新的任务风险识别引擎
    pub fn new() -> Self {
        Self {}
    }

    /// 识别任务固有风险因子
    ///
    /// 规则(顺序检查,全部命中项累加,不去重):
    /// 1) 任务类型含 "height"/"scaffold" → 高处坠落
    ///    severity=9, probability=7(作业高度>3米) / 4(其他)
    /// 2) 设备清单含 "crane"/"excavator" → 大型机械作业
    ///    severity=8, probability=5
    /// 3) 任务类型或材料清单含 "chemical" → 化学品暴露
    ///    severity=7, probability=6
    pub fn task_hazard_factors(&self, task: &TaskDescriptor) -> Vec<HazardFactor> {
        let mut factors = Vec::new();

        // 规则1: 高处作业风险
        if task.task_type.contains("height") || task.task_type.contains("scaffold") {
            let probability = if task.height_m > 3.0 { 7 } else { 4 };
            factors.push(HazardFactor::new(9, probability, "Fall from height"));
        }

        // 规则2: 大型机械风险
        if task
            .equipment
            .iter()
            .any(|e| e.contains("crane") || e.contains("excavator"))
        {
            factors.push(HazardFactor::new(8, 5, "Heavy machinery operation"));
        }

        // 规则3: 化学品暴露风险
        if task.task_type.contains("chemical")
            || task.materials.iter().any(|m| m.contains("chemical"))
        {
            factors.push(HazardFactor::new(7, 6, "Chemical exposure"));
        }

        debug!(
            task_type = %task.task_type,
            factor_count = factors.len(),
            "任务风险识别完成"
        );

        factors
    }
}

impl Default for HazardEngine {
    fn default() -> Self {
        Self::new()
    }
}
