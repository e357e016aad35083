// ==========================================
// 施工安全合规评分系统 - 复检生成引擎
// ==========================================
// 依据: Scoring_Engine_Specs_v1.0.md - 6. Follow-up Generator
// ==========================================
// 职责: 失败检查项 -> 针对失败类别的复检检查表
// 口径: 命中类别整体保留(失败项所在类别全部复检),权重原样保留不归一化
// 红线: 输出必须是可独立评分的合法模板;同输入两次生成结果一致
// ==========================================

use crate::domain::checklist::ChecklistDefinition;
use std::collections::HashSet;
use tracing::debug;

// ==========================================
// FollowUpEngine - 复检生成引擎
// ==========================================
pub struct FollowUpEngine {
    // 无状态引擎
}

impl FollowUpEngine {
    /// 创建新的复检生成引擎
    pub fn new() -> Self {
        Self {}
    }

    /// 生成复检检查表
    ///
    /// 规则:
    /// - 保留至少包含一个失败检查项的类别,且保留该类别全部检查项
    /// - 权重/阈值/元数据原样继承父模板
    /// - 模板外的失败ID忽略 (与评分引擎口径一致)
    ///
    /// # 参数
    /// - `definition`: 父检查表模板
    /// - `failed_item_ids`: 失败检查项ID列表
    ///
    /// # 返回
    /// - Some(复检模板): 至少命中一个类别
    /// - None: 无失败项或全部ID无法匹配
    pub fn generate(
        &self,
        definition: &ChecklistDefinition,
        failed_item_ids: &[String],
    ) -> Option<ChecklistDefinition> {
        if failed_item_ids.is_empty() {
            return None;
        }

        let failed_ids: HashSet<&str> = failed_item_ids.iter().map(String::as_str).collect();

        let categories: Vec<_> = definition
            .categories
            .iter()
            .filter(|category| {
                category
                    .items
                    .iter()
                    .any(|item| failed_ids.contains(item.id.as_str()))
            })
            .cloned()
            .collect();

        if categories.is_empty() {
            return None;
        }

        debug!(
            definition_id = %definition.id,
            failed_count = failed_item_ids.len(),
            category_count = categories.len(),
            "复检模板生成完成"
        );

        Some(ChecklistDefinition {
            id: format!("{}_follow_up", definition.id),
            title: format!("Follow-up: {}", definition.title),
            description: format!(
                "Targeted re-inspection of failed categories from '{}'",
                definition.title
            ),
            metadata: definition.metadata.clone(),
            categories,
        })
    }
}

impl Default for FollowUpEngine {
    fn default() -> Self {
        Self::new()
    }
}
