// ==========================================
// 施工安全合规评分系统 - 玻璃幕墙安装主检查表
// ==========================================
// 适用: 大型商业玻璃安装 / 高层作业 / 临街门店安装
// 说明: 权重与 OSHA 条款引用经安全总监审定,调整须走模板变更流程
// ==========================================

use crate::domain::checklist::{
    ChecklistCategory, ChecklistDefinition, ChecklistItem, ChecklistMetadata,
};
use crate::domain::types::{CategoryPriority, HazardRiskLevel, VerificationType};

fn item(
    id: &str,
    text: &str,
    weight: f64,
    verification_type: VerificationType,
) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        text: text.to_string(),
        weight,
        verification_type,
        osha_reference: None,
        applicable_when: None,
    }
}

/// 玻璃幕墙安装主检查表
///
/// 四个类别: 坠落防护(红线) / 玻璃吊装(红线) / 设备工具(重要) / 场地条件(中等)
pub fn glass_work_checklist() -> ChecklistDefinition {
    let fall_protection = ChecklistCategory {
        id: "fall_protection".to_string(),
        name: "Fall Protection & Height Safety".to_string(),
        priority: CategoryPriority::Critical,
        failure_action: "IMMEDIATE_STOP".to_string(),
        required_for: vec![
            "high_rise".to_string(),
            "multi_story".to_string(),
            "elevated_work".to_string(),
        ],
        items: vec![
            ChecklistItem {
                osha_reference: Some("1926.502(d)".to_string()),
                ..item(
                    "fp_001",
                    "Personal fall arrest systems inspected and properly fitted",
                    20.0,
                    VerificationType::VerificationWithPhoto,
                )
            },
            item(
                "fp_002",
                "Anchor points tested to 5,000 lb minimum (certified within 12 months)",
                15.0,
                VerificationType::DocumentationCheck,
            ),
            item(
                "fp_003",
                "Guardrails installed at all open edges above 6 feet",
                15.0,
                VerificationType::VisualInspectionGps,
            ),
            ChecklistItem {
                applicable_when: Some("exterior_high_rise".to_string()),
                ..item(
                    "fp_004",
                    "Safety nets deployed below glass installation areas",
                    10.0,
                    VerificationType::PhotoVerification,
                )
            },
        ],
    };

    let glass_handling = ChecklistCategory {
        id: "glass_handling".to_string(),
        name: "Glass Handling & Material Safety".to_string(),
        priority: CategoryPriority::Critical,
        failure_action: "SUPERVISOR_OVERRIDE_REQUIRED".to_string(),
        required_for: Vec::new(),
        items: vec![
            item(
                "gh_001",
                "Glass lifting equipment (suction cups, cranes) inspected within 24 hours",
                15.0,
                VerificationType::DailyInspectionLog,
            ),
            item(
                "gh_002",
                "Tempered/laminated glass properly marked and oriented",
                10.0,
                VerificationType::MaterialVerification,
            ),
            item(
                "gh_003",
                "Wind speed below 25 mph for exterior glass installation",
                20.0,
                VerificationType::WeatherData,
            ),
            item(
                "gh_004",
                "Exclusion zones established below glass work areas",
                15.0,
                VerificationType::SiteSetupVerification,
            ),
        ],
    };

    let equipment_safety = ChecklistCategory {
        id: "equipment_safety".to_string(),
        name: "Equipment & Tool Safety".to_string(),
        priority: CategoryPriority::High,
        failure_action: "EQUIPMENT_LOCKOUT".to_string(),
        required_for: Vec::new(),
        items: vec![
            item(
                "eq_001",
                "Cranes and hoists have current inspection certificates",
                15.0,
                VerificationType::CertificationCheck,
            ),
            item(
                "eq_002",
                "Scaffolding erected by competent person with tags",
                15.0,
                VerificationType::CompetentPersonVerification,
            ),
            item(
                "eq_003",
                "Power tools have GFCI protection",
                10.0,
                VerificationType::ElectricalSafetyCheck,
            ),
            item(
                "eq_004",
                "Glass cutting area properly ventilated and contained",
                10.0,
                VerificationType::EnvironmentalCheck,
            ),
        ],
    };

    let site_conditions = ChecklistCategory {
        id: "site_conditions".to_string(),
        name: "Site Conditions & Access".to_string(),
        priority: CategoryPriority::Medium,
        failure_action: "MITIGATION_REQUIRED".to_string(),
        required_for: Vec::new(),
        items: vec![
            item(
                "sc_001",
                "Pedestrian walkways protected from falling glass/debris",
                15.0,
                VerificationType::PublicSafetyVerification,
            ),
            item(
                "sc_002",
                "Emergency access routes clear and marked",
                10.0,
                VerificationType::SiteLayoutCheck,
            ),
            item(
                "sc_003",
                "Communication system established between ground and height workers",
                10.0,
                VerificationType::CommunicationTest,
            ),
        ],
    };

    ChecklistDefinition {
        id: "glass_work_master".to_string(),
        title: "Commercial Glass Installation Master Checklist".to_string(),
        description: "Master safety checklist for large commercial installations, \
                      high-rise work and storefront installations"
            .to_string(),
        metadata: ChecklistMetadata {
            industry: "Commercial Glass Installation".to_string(),
            risk_level: Some(HazardRiskLevel::High),
            osha_standards: vec![
                "1926.95".to_string(),  // PPE
                "1926.501".to_string(), // 坠落防护
                "1926.451".to_string(), // 脚手架
            ],
            ..ChecklistMetadata::default()
        },
        categories: vec![
            fall_protection,
            glass_handling,
            equipment_safety,
            site_conditions,
        ],
    }
}
