// ==========================================
// 施工安全合规评分系统 - 检查回执领域模型
// ==========================================
// 依据: Scoring_Engine_Specs_v1.0.md - 4.1 输入口径
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ItemResponse - 检查项回执
// ==========================================
// 一次提交是以 item_id 为键的回执集合;
// 没有回执的检查项视为"未检查",不计入总权重与得分权重
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub item_id: String, // 检查项ID
    pub passed: bool,    // 是否合格
}

impl ItemResponse {
    pub fn new(item_id: impl Into<String>, passed: bool) -> Self {
        Self {
            item_id: item_id.into(),
            passed,
        }
    }
}
