// ==========================================
// 施工安全合规评分系统 - 安全评估 API
// ==========================================
// 依据: Safety_DSS_Master_Spec.md - PART F 对外契约
// ==========================================
// 职责: 聚合各引擎,向 UI/API 层提供进程内业务接口
// 输入: 检查表模板 + 检查回执 / 任务画像 / 气象读数
// 输出: 评估记录 / 任务风险视图 / 气象评估 / 复检模板
// ==========================================

use crate::domain::checklist::ChecklistDefinition;
use crate::domain::hazard::{HazardFactor, TaskDescriptor, WeatherReading};
use crate::domain::response::ItemResponse;
use crate::domain::scoring::EvaluationRecord;
use crate::domain::types::{EscalationAction, HazardRiskLevel};
use crate::engine::{
    EscalationResolver, FollowUpEngine, HazardEngine, RiskEngine, ScoringEngine, WeatherAssessment,
    WeatherEngine,
};

use crate::api::error::ApiResult;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

// ==========================================
// TaskRiskAssessment - 任务风险视图
// ==========================================
// 供 UI 层展示的任务风险聚合结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRiskAssessment {
    pub factors: Vec<HazardFactor>,    // 命中的风险因子
    pub combined: HazardFactor,        // 合并后的代表性因子
    pub risk_score: i32,               // 风险评分 [1,100]
    pub risk_level: HazardRiskLevel,   // 风险等级
}

// ==========================================
// SafetyApi - 安全评估 API
// ==========================================
pub struct SafetyApi {
    scoring_engine: ScoringEngine,
    weather_engine: WeatherEngine,
    hazard_engine: HazardEngine,
    risk_engine: RiskEngine,
    followup_engine: FollowUpEngine,
    escalation_resolver: EscalationResolver,
}

impl SafetyApi {
    /// 创建新的安全评估 API (默认升级规则表)
    pub fn new() -> Self {
        Self::with_escalation_resolver(EscalationResolver::new())
    }

    /// 以自定义升级规则表创建
    pub fn with_escalation_resolver(escalation_resolver: EscalationResolver) -> Self {
        Self {
            scoring_engine: ScoringEngine::new(),
            weather_engine: WeatherEngine::new(),
            hazard_engine: HazardEngine::new(),
            risk_engine: RiskEngine::new(),
            followup_engine: FollowUpEngine::new(),
            escalation_resolver,
        }
    }

    // ==========================================
    // 检查表评估
    // ==========================================

    /// 评估一次检查提交,生成评估记录
    ///
    /// # 错误
    /// 模板完整性错误 (与"未通过"判定严格区分)
    pub fn evaluate_checklist(
        &self,
        definition: &ChecklistDefinition,
        responses: &[ItemResponse],
    ) -> ApiResult<EvaluationRecord> {
        let result = self.scoring_engine.evaluate(definition, responses)?;

        info!(
            definition_id = %definition.id,
            score = result.score,
            passed = result.passed,
            action = %result.recommended_action,
            "检查表评估完成"
        );

        Ok(EvaluationRecord {
            evaluation_id: Uuid::new_v4().to_string(),
            definition_id: definition.id.clone(),
            definition_title: definition.title.clone(),
            response_count: responses.len() as i32,
            result,
            created_at: Utc::now().naive_utc(),
        })
    }

    // ==========================================
    // 任务风险评估
    // ==========================================

    /// 评估任务固有风险
    ///
    /// 未命中任何风险规则时返回 Ok(None),
    /// 调用方无需自行守卫组合引擎的空输入契约
    pub fn assess_task_risk(&self, task: &TaskDescriptor) -> ApiResult<Option<TaskRiskAssessment>> {
        let factors = self.hazard_engine.task_hazard_factors(task);
        if factors.is_empty() {
            return Ok(None);
        }

        let combined = self.risk_engine.combine(&factors)?;
        let risk_score = self
            .risk_engine
            .risk_score(combined.severity, combined.probability);
        let risk_level = self.risk_engine.risk_level(risk_score);

        Ok(Some(TaskRiskAssessment {
            factors,
            combined,
            risk_score,
            risk_level,
        }))
    }

    // ==========================================
    // 气象评估
    // ==========================================

    /// 评估气象风险 (热指数 + 风寒指数 + 风险等级)
    pub fn assess_weather(&self, reading: &WeatherReading) -> WeatherAssessment {
        self.weather_engine.assess(reading)
    }

    // ==========================================
    // 复检与升级
    // ==========================================

    /// 针对失败检查项生成复检模板
    pub fn generate_follow_up(
        &self,
        definition: &ChecklistDefinition,
        failed_item_ids: &[String],
    ) -> Option<ChecklistDefinition> {
        self.followup_engine.generate(definition, failed_item_ids)
    }

    /// 解析失败模式键对应的组织升级动作
    pub fn resolve_escalation(&self, pattern_key: &str) -> EscalationAction {
        self.escalation_resolver.resolve(pattern_key)
    }
}

impl Default for SafetyApi {
    fn default() -> Self {
        Self::new()
    }
}
