// ==========================================
// 施工安全合规评分系统 - 检查表领域模型
// ==========================================
// 依据: Safety_DSS_Master_Spec.md - PART C 检查表体系
// 依据: Scoring_Engine_Specs_v1.0.md - 3. Checklist Definition Model
// ==========================================
// 职责: 检查表模板的静态结构 + 检查项索引
// 红线: 模板发布后不可变,检查项ID全表唯一
// ==========================================

use crate::domain::types::{CategoryPriority, HazardRiskLevel, VerificationType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// ==========================================
// 模板完整性错误
// ==========================================
// 模板缺陷不是安全判定失败,必须以独立错误上报调用方
#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("检查项ID重复: item_id={item_id} (category={first_category} 与 category={second_category})")]
    DuplicateItemId {
        item_id: String,
        first_category: String,
        second_category: String,
    },

    #[error("检查项权重非法: item_id={item_id}, weight={weight} (必须为正数)")]
    NonPositiveWeight { item_id: String, weight: f64 },
}

// ==========================================
// ChecklistItem - 检查项
// ==========================================
// 模板发布后不可变,身份以 id 为准
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,                          // 检查项ID (全表唯一)
    pub text: String,                        // 检查内容
    pub weight: f64,                         // 权重 (正数)
    pub verification_type: VerificationType, // 核验方式

    /// OSHA 条款引用 (如 "1926.502(d)")
    #[serde(default)]
    pub osha_reference: Option<String>,

    /// 适用条件标签,为空表示无条件适用
    /// 与 SiteContext 的现场条件标签匹配
    #[serde(default)]
    pub applicable_when: Option<String>,
}

impl ChecklistItem {
    /// 判断检查项在给定现场上下文中是否适用
    pub fn is_applicable(&self, context: &SiteContext) -> bool {
        match &self.applicable_when {
            Some(condition) => context.has_condition(condition),
            None => true,
        }
    }
}

// ==========================================
// ChecklistCategory - 检查类别
// ==========================================
// 类别顺序仅用于展示,不参与评分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistCategory {
    pub id: String,                 // 类别ID
    pub name: String,               // 类别名称
    pub priority: CategoryPriority, // 优先级 (CRITICAL 失败即阻断)
    pub failure_action: String,     // 类别失败时的现场处置

    /// 适用工况标签,为空表示所有工况适用
    #[serde(default)]
    pub required_for: Vec<String>,

    pub items: Vec<ChecklistItem>, // 检查项 (有序)
}

impl ChecklistCategory {
    /// 判断类别在给定现场上下文中是否必查
    pub fn is_required_for(&self, context: &SiteContext) -> bool {
        if self.required_for.is_empty() {
            return true;
        }
        self.required_for.iter().any(|c| context.has_condition(c))
    }

    /// 类别权重合计
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|item| item.weight).sum()
    }
}

// ==========================================
// ChecklistMetadata - 模板元数据
// ==========================================
// 评分阈值属于配置而非代码常量,缺省时取默认档位
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistMetadata {
    pub industry: String, // 适用行业

    /// 行业固有风险档位 (展示用)
    #[serde(default)]
    pub risk_level: Option<HazardRiskLevel>,

    /// 引用的 OSHA 标准清单
    #[serde(default)]
    pub osha_standards: Vec<String>,

    /// 通过线 (百分比),低于该线不通过
    #[serde(default = "default_minimum_passing_score")]
    pub minimum_passing_score: i32,

    /// 复训线 (百分比),低于该线要求复训后复工
    #[serde(default = "default_retrain_threshold")]
    pub retrain_threshold: i32,

    /// 红线失败容忍次数,达到即立即停工
    #[serde(default = "default_critical_failure_threshold")]
    pub critical_failure_threshold: i32,
}

fn default_minimum_passing_score() -> i32 {
    85
}

fn default_retrain_threshold() -> i32 {
    70
}

fn default_critical_failure_threshold() -> i32 {
    1
}

impl Default for ChecklistMetadata {
    fn default() -> Self {
        Self {
            industry: String::new(),
            risk_level: None,
            osha_standards: Vec::new(),
            minimum_passing_score: default_minimum_passing_score(),
            retrain_threshold: default_retrain_threshold(),
            critical_failure_threshold: default_critical_failure_threshold(),
        }
    }
}

// ==========================================
// ChecklistDefinition - 检查表模板
// ==========================================
// 由模板发布方持有,评分引擎只读借用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistDefinition {
    pub id: String,                  // 模板ID
    pub title: String,               // 模板名称
    pub description: String,         // 模板说明
    pub metadata: ChecklistMetadata, // 元数据 (含评分阈值)
    pub categories: Vec<ChecklistCategory>,
}

impl ChecklistDefinition {
    /// 检查项总数
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// 全表权重合计
    pub fn total_weight(&self) -> f64 {
        self.categories.iter().map(|c| c.total_weight()).sum()
    }

    /// 校验模板完整性 (ID唯一性 + 权重合法性)
    pub fn validate(&self) -> Result<(), DefinitionError> {
        ChecklistIndex::build(self).map(|_| ())
    }
}

// ==========================================
// ChecklistIndex - 检查项索引
// ==========================================
// 依据: Scoring_Engine_Specs_v1.0.md - 3.1 索引构建
// 每次评估构建一次 item_id -> (item, category) 映射,
// 替代逐类别线性扫描;构建即校验ID唯一性
#[derive(Debug)]
pub struct ChecklistIndex<'a> {
    entries: HashMap<&'a str, IndexedItem<'a>>,
}

/// 索引条目: 检查项及其所属类别
#[derive(Debug, Clone, Copy)]
pub struct IndexedItem<'a> {
    pub item: &'a ChecklistItem,
    pub category: &'a ChecklistCategory,
}

impl<'a> ChecklistIndex<'a> {
    /// 构建索引
    ///
    /// 发现跨类别重复ID或非正权重立即失败,
    /// 模板缺陷必须在评分前拦截
    pub fn build(definition: &'a ChecklistDefinition) -> Result<Self, DefinitionError> {
        let mut entries: HashMap<&'a str, IndexedItem<'a>> =
            HashMap::with_capacity(definition.item_count());

        for category in &definition.categories {
            for item in &category.items {
                if item.weight <= 0.0 {
                    return Err(DefinitionError::NonPositiveWeight {
                        item_id: item.id.clone(),
                        weight: item.weight,
                    });
                }

                if let Some(existing) = entries.insert(item.id.as_str(), IndexedItem { item, category })
                {
                    return Err(DefinitionError::DuplicateItemId {
                        item_id: item.id.clone(),
                        first_category: existing.category.id.clone(),
                        second_category: category.id.clone(),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// O(1) 查找检查项及其所属类别
    pub fn get(&self, item_id: &str) -> Option<IndexedItem<'a>> {
        self.entries.get(item_id).copied()
    }

    /// 索引条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 索引是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// SiteContext - 现场上下文
// ==========================================
// 由调用方采集的现场条件标签 (如 "exterior_high_rise")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteContext {
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl SiteContext {
    /// 以条件标签列表构造
    pub fn with_conditions<I, S>(conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            conditions: conditions.into_iter().map(Into::into).collect(),
        }
    }

    /// 是否具备指定现场条件
    pub fn has_condition(&self, condition: &str) -> bool {
        self.conditions.iter().any(|c| c == condition)
    }
}
