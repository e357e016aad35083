// ==========================================
// 施工安全合规评分系统 - 组织升级解析器
// ==========================================
// 依据: Scoring_Engine_Specs_v1.0.md - 5. Escalation Resolver
// ==========================================
// 职责: 失败模式键 -> 组织升级动作 (静态查表)
// 红线: 未注册的模式键返回 NoEscalation 哨兵,绝不让整体评估失败
// 说明: "何谓重复失败"由调用方/历史存储判定,本解析器只做键到动作的映射
// ==========================================

use crate::domain::types::EscalationAction;
use std::collections::HashMap;
use tracing::debug;

// ==========================================
// EscalationResolver - 组织升级解析器
// ==========================================
pub struct EscalationResolver {
    rules: HashMap<String, EscalationAction>,
}

impl EscalationResolver {
    /// 创建带默认规则表的解析器
    ///
    /// 默认注册:
    /// - repeated_fall_protection_failures → OSHA_NOTIFICATION
    /// - weather_violations → PROJECT_DELAY
    /// - equipment_failures → EQUIPMENT_AUDIT
    pub fn new() -> Self {
        let mut resolver = Self::empty();
        resolver.register(
            "repeated_fall_protection_failures",
            EscalationAction::OshaNotification,
        );
        resolver.register("weather_violations", EscalationAction::ProjectDelay);
        resolver.register("equipment_failures", EscalationAction::EquipmentAudit);
        resolver
    }

    /// 创建空规则表的解析器 (供调用方自行注册)
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// 注册失败模式键到升级动作的映射
    ///
    /// 规则表在发布前配置完成,解析阶段只读
    pub fn register(&mut self, pattern_key: impl Into<String>, action: EscalationAction) {
        self.rules.insert(pattern_key.into(), action);
    }

    /// 解析失败模式键
    ///
    /// # 返回
    /// 已注册键返回配置的动作;未注册键返回 NoEscalation 哨兵 (非错误)
    pub fn resolve(&self, pattern_key: &str) -> EscalationAction {
        match self.rules.get(pattern_key) {
            Some(action) => *action,
            None => {
                debug!(pattern_key, "未注册的失败模式键,返回 NO_ESCALATION");
                EscalationAction::NoEscalation
            }
        }
    }

    /// 模式键是否已注册
    pub fn is_registered(&self, pattern_key: &str) -> bool {
        self.rules.contains_key(pattern_key)
    }

    /// 已注册规则数
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for EscalationResolver {
    fn default() -> Self {
        Self::new()
    }
}
