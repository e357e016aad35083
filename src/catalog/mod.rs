// ==========================================
// 施工安全合规评分系统 - 内置检查表目录
// ==========================================
// 职责: 随库发布的检查表模板 (模板发布方的参考实现)
// 说明: 生产环境模板由外部发布系统维护,此目录供演示与测试
// ==========================================

pub mod glass_work;

pub use glass_work::glass_work_checklist;
