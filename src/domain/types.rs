// ==========================================
// 施工安全合规评分系统 - 领域类型定义
// ==========================================
// 依据: Safety_DSS_Master_Spec.md - PART B 判定体系
// 红线: 任务风险与天气风险是两套独立等级,禁止合并换算
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 检查类别优先级 (Category Priority)
// ==========================================
// CRITICAL 类别单项失败即可阻断通过判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryPriority {
    Low,      // 一般
    Medium,   // 中等
    High,     // 重要
    Critical, // 红线
}

impl fmt::Display for CategoryPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryPriority::Low => write!(f, "LOW"),
            CategoryPriority::Medium => write!(f, "MEDIUM"),
            CategoryPriority::High => write!(f, "HIGH"),
            CategoryPriority::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl CategoryPriority {
    /// 从字符串解析优先级
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "LOW" => Some(CategoryPriority::Low),
            "MEDIUM" => Some(CategoryPriority::Medium),
            "HIGH" => Some(CategoryPriority::High),
            "CRITICAL" => Some(CategoryPriority::Critical),
            _ => None,
        }
    }
}

// ==========================================
// 任务风险等级 (Hazard Risk Level)
// ==========================================
// 依据: Scoring_Engine_Specs_v1.0.md - 2. Risk Engine
// 顺序: Low < Medium < High < Critical
// 由 severity × probability 评分映射得到
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HazardRiskLevel {
    Low,      // 低风险
    Medium,   // 中风险
    High,     // 高风险
    Critical, // 重大风险
}

impl fmt::Display for HazardRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HazardRiskLevel::Low => write!(f, "LOW"),
            HazardRiskLevel::Medium => write!(f, "MEDIUM"),
            HazardRiskLevel::High => write!(f, "HIGH"),
            HazardRiskLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ==========================================
// 天气风险等级 (Weather Risk Level)
// ==========================================
// 依据: Scoring_Engine_Specs_v1.0.md - 1. Weather Engine
// 顺序: Low < Medium < High < Extreme
// 注意: 顶级是 EXTREME 而非 CRITICAL,与任务风险等级不同源不互换
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherRiskLevel {
    Low,     // 正常作业
    Medium,  // 关注
    High,    // 限制作业
    Extreme, // 停止作业
}

impl fmt::Display for WeatherRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherRiskLevel::Low => write!(f, "LOW"),
            WeatherRiskLevel::Medium => write!(f, "MEDIUM"),
            WeatherRiskLevel::High => write!(f, "HIGH"),
            WeatherRiskLevel::Extreme => write!(f, "EXTREME"),
        }
    }
}

// ==========================================
// 建议处置动作 (Recommended Action)
// ==========================================
// 依据: Scoring_Engine_Specs_v1.0.md - 4.5 处置分档
// 评分引擎输出的唯一处置结论,按首个命中档位选取
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendedAction {
    ImmediateWorkStoppage,       // 立即停工
    RetrainCrewBeforeProceeding, // 复训后复工
    SupervisorReviewRequired,    // 监理复核
    ProceedWithNormalOperations, // 正常作业
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendedAction::ImmediateWorkStoppage => write!(f, "IMMEDIATE_WORK_STOPPAGE"),
            RecommendedAction::RetrainCrewBeforeProceeding => {
                write!(f, "RETRAIN_CREW_BEFORE_PROCEEDING")
            }
            RecommendedAction::SupervisorReviewRequired => {
                write!(f, "SUPERVISOR_REVIEW_REQUIRED")
            }
            RecommendedAction::ProceedWithNormalOperations => {
                write!(f, "PROCEED_WITH_NORMAL_OPERATIONS")
            }
        }
    }
}

// ==========================================
// 组织升级动作 (Escalation Action)
// ==========================================
// 依据: Scoring_Engine_Specs_v1.0.md - 5. Escalation Resolver
// NoEscalation 是未注册模式键的哨兵值,不是错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EscalationAction {
    OshaNotification, // 上报 OSHA
    ProjectDelay,     // 项目延期
    EquipmentAudit,   // 设备审计
    NoEscalation,     // 无需升级
}

impl fmt::Display for EscalationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EscalationAction::OshaNotification => write!(f, "OSHA_NOTIFICATION"),
            EscalationAction::ProjectDelay => write!(f, "PROJECT_DELAY"),
            EscalationAction::EquipmentAudit => write!(f, "EQUIPMENT_AUDIT"),
            EscalationAction::NoEscalation => write!(f, "NO_ESCALATION"),
        }
    }
}

// ==========================================
// 核验方式 (Verification Type)
// ==========================================
// 检查项的现场核验手段,来自检查表模板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationType {
    VerificationWithPhoto,       // 现场核验+拍照
    DocumentationCheck,          // 证书文档核验
    VisualInspectionGps,         // 目视检查+GPS定位
    PhotoVerification,           // 拍照确认
    DailyInspectionLog,          // 当日点检记录
    MaterialVerification,        // 材料标识核验
    WeatherData,                 // 气象数据自动核验
    SiteSetupVerification,       // 场地布置核验
    CertificationCheck,          // 资质证书核验
    CompetentPersonVerification, // 专职人员核验
    ElectricalSafetyCheck,       // 用电安全检查
    EnvironmentalCheck,          // 作业环境检查
    PublicSafetyVerification,    // 公共安全核验
    SiteLayoutCheck,             // 场地通道检查
    CommunicationTest,           // 通讯测试
}

impl fmt::Display for VerificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationType::VerificationWithPhoto => write!(f, "VERIFICATION_WITH_PHOTO"),
            VerificationType::DocumentationCheck => write!(f, "DOCUMENTATION_CHECK"),
            VerificationType::VisualInspectionGps => write!(f, "VISUAL_INSPECTION_GPS"),
            VerificationType::PhotoVerification => write!(f, "PHOTO_VERIFICATION"),
            VerificationType::DailyInspectionLog => write!(f, "DAILY_INSPECTION_LOG"),
            VerificationType::MaterialVerification => write!(f, "MATERIAL_VERIFICATION"),
            VerificationType::WeatherData => write!(f, "WEATHER_DATA"),
            VerificationType::SiteSetupVerification => write!(f, "SITE_SETUP_VERIFICATION"),
            VerificationType::CertificationCheck => write!(f, "CERTIFICATION_CHECK"),
            VerificationType::CompetentPersonVerification => {
                write!(f, "COMPETENT_PERSON_VERIFICATION")
            }
            VerificationType::ElectricalSafetyCheck => write!(f, "ELECTRICAL_SAFETY_CHECK"),
            VerificationType::EnvironmentalCheck => write!(f, "ENVIRONMENTAL_CHECK"),
            VerificationType::PublicSafetyVerification => write!(f, "PUBLIC_SAFETY_VERIFICATION"),
            VerificationType::SiteLayoutCheck => write!(f, "SITE_LAYOUT_CHECK"),
            VerificationType::CommunicationTest => write!(f, "COMMUNICATION_TEST"),
        }
    }
}
