// ==========================================
// 施工安全合规评分系统 - 合规评分引擎
// ==========================================
// 依据: Safety_DSS_Master_Spec.md - PART D 判定核心
// 依据: Scoring_Engine_Specs_v1.0.md - 4. Scoring Engine
// ==========================================
// 职责: 检查表模板 + 检查回执 -> 评分 + 通过判定 + 建议处置
// 输入: ChecklistDefinition (只读借用) + ItemResponse 集合
// 输出: ScoringResult (纯派生,含判定原因)
// 红线: 高分不能抵消红线类别失败;阈值来自模板元数据,不写死
// ==========================================

use crate::domain::checklist::{ChecklistDefinition, ChecklistIndex};
use crate::domain::response::ItemResponse;
use crate::domain::scoring::ScoringResult;
use crate::domain::types::{CategoryPriority, RecommendedAction};
use crate::engine::error::EngineError;
use serde_json::json;
use tracing::{instrument, warn};

// ==========================================
// ScoringEngine - 合规评分引擎
// ==========================================
pub struct ScoringEngine {
    // 无状态引擎,每次评估是 (模板, 回执) 的纯函数
}

impl ScoringEngine {
    /// 创建新的合规评分引擎
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评估一次检查提交
    ///
    /// 流程:
    /// 1. 构建检查项索引 (构建即校验模板完整性,重复ID立即拒绝)
    /// 2. 单遍扫描回执,聚合总权重/得分权重/红线失败次数
    /// 3. 计算得分 = round(得分权重 / 总权重 × 100),无参评权重时得分为0
    /// 4. 通过判定 = 得分达线 且 红线失败次数未达容忍值
    /// 5. 处置分档 (首个命中)
    ///
    /// 模板外的回执ID不报错,计入 unknown_item_count 并记录 WARN 日志
    ///
    /// # 错误
    /// 模板完整性错误 (重复ID/非法权重),与"未通过"判定严格区分
    #[instrument(skip(self, definition, responses), fields(definition_id = %definition.id, response_count = responses.len()))]
    pub fn evaluate(
        &self,
        definition: &ChecklistDefinition,
        responses: &[ItemResponse],
    ) -> Result<ScoringResult, EngineError> {
        // 1. 构建索引 (模板缺陷在评分前拦截)
        let index = ChecklistIndex::build(definition)?;

        // 2. 单遍聚合
        let mut total_weight = 0.0;
        let mut achieved_weight = 0.0;
        let mut critical_failure_count = 0;
        let mut unknown_item_count = 0;

        for response in responses {
            let entry = match index.get(&response.item_id) {
                Some(entry) => entry,
                None => {
                    // 过期/未知ID容忍处理: 不计权重,只记数据质量信号
                    unknown_item_count += 1;
                    warn!(
                        item_id = %response.item_id,
                        definition_id = %definition.id,
                        "回执引用了模板外的检查项ID,已忽略"
                    );
                    continue;
                }
            };

            total_weight += entry.item.weight;

            if response.passed {
                achieved_weight += entry.item.weight;
            } else if entry.category.priority == CategoryPriority::Critical {
                critical_failure_count += 1;
            }
        }

        // 3. 计算得分 (无参评权重定义为0分,不是错误)
        let score = if total_weight > 0.0 {
            (achieved_weight / total_weight * 100.0).round() as i32
        } else {
            0
        };

        // 4. 通过判定 (两个条件缺一不可)
        let metadata = &definition.metadata;
        let critical_blocked = critical_failure_count >= metadata.critical_failure_threshold;
        let passed = score >= metadata.minimum_passing_score && !critical_blocked;

        // 5. 处置分档
        let recommended_action = self.recommend_action(score, critical_blocked, definition);

        // 6. 判定原因 (可解释性)
        let reason = json!({
            "action": recommended_action.to_string(),
            "passed": passed,
            "score": score,
            "achieved_weight": achieved_weight,
            "total_weight": total_weight,
            "critical_failure_count": critical_failure_count,
            "critical_failure_threshold": metadata.critical_failure_threshold,
            "minimum_passing_score": metadata.minimum_passing_score,
            "retrain_threshold": metadata.retrain_threshold,
            "unknown_item_count": unknown_item_count,
        })
        .to_string();

        Ok(ScoringResult {
            score,
            passed,
            critical_failure_count,
            recommended_action,
            achieved_weight,
            total_weight,
            unknown_item_count,
            reason,
        })
    }

    // ==========================================
    // 处置分档 (依据 Scoring_Engine_Specs 4.5)
    // ==========================================

    /// 选取建议处置动作
    ///
    /// 档位(优先级递减,首个命中生效):
    /// 1) 红线失败达到容忍值 → 立即停工
    /// 2) 得分 < 复训线 → 复训后复工
    /// 3) 得分 < 通过线 → 监理复核
    /// 4) 其他 → 正常作业
    fn recommend_action(
        &self,
        score: i32,
        critical_blocked: bool,
        definition: &ChecklistDefinition,
    ) -> RecommendedAction {
        let metadata = &definition.metadata;

        if critical_blocked {
            return RecommendedAction::ImmediateWorkStoppage;
        }
        if score < metadata.retrain_threshold {
            return RecommendedAction::RetrainCrewBeforeProceeding;
        }
        if score < metadata.minimum_passing_score {
            return RecommendedAction::SupervisorReviewRequired;
        }
        RecommendedAction::ProceedWithNormalOperations
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
