// ==========================================
// SafetyApi 端到端集成测试
// ==========================================
// 测试目标: 验证 API 层聚合各引擎的完整业务链路
// 覆盖范围: 检查表评估 / 任务风险 / 气象评估 / 复检 / 升级解析
// ==========================================


use site_safety_scoring::catalog::glass_work_checklist;
use site_safety_scoring::domain::hazard::{TaskDescriptor, WeatherReading};
use site_safety_scoring::domain::types::{
    CategoryPriority, EscalationAction, HazardRiskLevel, RecommendedAction, WeatherRiskLevel,
};
use site_safety_scoring::{ApiError, SafetyApi};
use test_helpers::{create_test_category, create_test_definition, create_test_item, response};

// ==========================================
// 检查表评估链路
// ==========================================

#[test]
fn test_full_pass_evaluation() {
    println!("\n=== 测试：全部合格 → 正常作业 ===");

    let api = SafetyApi::new();
    let definition = glass_work_checklist();

    let responses: Vec<_> = definition
        .categories
        .iter()
        .flat_map(|c| c.items.iter())
        .map(|item| response(&item.id, true))
        .collect();

    let record = api.evaluate_checklist(&definition, &responses).unwrap();

    println!("  - 评估ID: {}", record.evaluation_id);
    println!("  - 得分: {}", record.result.score);

    assert!(!record.evaluation_id.is_empty());
    assert_eq!(record.definition_id, "glass_work_master");
    assert_eq!(record.response_count, 15);
    assert_eq!(record.result.score, 100);
    assert!(record.result.passed);
    assert_eq!(
        record.result.recommended_action,
        RecommendedAction::ProceedWithNormalOperations
    );

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_critical_failure_forces_stoppage() {
    println!("\n=== 测试：红线项失败 → 立即停工 ===");

    let api = SafetyApi::new();
    let definition = glass_work_checklist();

    // fp_001 (红线类别,权重20) 失败,其余全部合格
    let responses: Vec<_> = definition
        .categories
        .iter()
        .flat_map(|c| c.items.iter())
        .map(|item| response(&item.id, item.id != "fp_001"))
        .collect();

    let record = api.evaluate_checklist(&definition, &responses).unwrap();

    // 185/205 → 90分,高于通过线但红线失败仍不通过
    assert_eq!(record.result.score, 90);
    assert_eq!(record.result.critical_failure_count, 1);
    assert!(!record.result.passed);
    assert_eq!(
        record.result.recommended_action,
        RecommendedAction::ImmediateWorkStoppage
    );

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_unknown_response_ids_surface_as_diagnostics() {
    let api = SafetyApi::new();
    let definition = glass_work_checklist();

    let responses = vec![
        response("fp_001", true),
        response("removed_item_v1", true), // 来自旧版模板的过期ID
    ];

    let record = api.evaluate_checklist(&definition, &responses).unwrap();
    assert_eq!(record.result.unknown_item_count, 1);
    assert_eq!(record.result.total_weight, 20.0, "过期ID不改变权重口径");
}

#[test]
fn test_definition_integrity_error_is_distinct_from_failed_verdict() {
    println!("\n=== 测试：模板缺陷 ≠ 安全判定失败 ===");

    let api = SafetyApi::new();
    let broken = create_test_definition(vec![
        create_test_category(
            "cat_a",
            CategoryPriority::Critical,
            vec![create_test_item("dup", 20.0)],
        ),
        create_test_category(
            "cat_b",
            CategoryPriority::Low,
            vec![create_test_item("dup", 5.0)],
        ),
    ]);

    let err = api
        .evaluate_checklist(&broken, &[response("dup", true)])
        .expect_err("重复ID模板必须报错");

    assert!(matches!(err, ApiError::DefinitionIntegrity(_)));

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 任务风险链路
// ==========================================

#[test]
fn test_task_risk_assessment_roundtrip() {
    println!("\n=== 测试：任务风险评估链路 ===");

    let api = SafetyApi::new();

    let task = TaskDescriptor {
        task_type: "height work on scaffold".to_string(),
        equipment: vec!["mobile crane".to_string()],
        materials: Vec::new(),
        height_m: 12.0,
    };

    let assessment = api
        .assess_task_risk(&task)
        .unwrap()
        .expect("高危任务应产出风险评估");

    println!("  - 因子数: {}", assessment.factors.len());
    println!("  - 风险评分: {}", assessment.risk_score);

    assert_eq!(assessment.factors.len(), 2);
    assert_eq!(assessment.combined.severity, 9);
    assert_eq!(assessment.combined.probability, 6);
    assert_eq!(assessment.risk_score, 54);
    assert_eq!(assessment.risk_level, HazardRiskLevel::Critical);

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_task_risk_none_when_no_rule_matches() {
    let api = SafetyApi::new();
    let task = TaskDescriptor {
        task_type: "interior painting".to_string(),
        equipment: vec!["roller".to_string()],
        materials: vec!["acrylic paint".to_string()],
        height_m: 0.0,
    };

    // 调用方无需守卫空因子契约,API返回 None
    assert!(api.assess_task_risk(&task).unwrap().is_none());
}

// ==========================================
// 气象评估链路
// ==========================================

#[test]
fn test_weather_assessment_roundtrip() {
    println!("\n=== 测试：气象评估链路 ===");

    let api = SafetyApi::new();

    let extreme = api.assess_weather(&WeatherReading {
        temperature_c: 45.0,
        humidity_pct: 80.0,
        wind_speed_kph: 10.0,
    });
    assert_eq!(extreme.risk_level, WeatherRiskLevel::Extreme);

    let mild = api.assess_weather(&WeatherReading {
        temperature_c: 20.0,
        humidity_pct: 50.0,
        wind_speed_kph: 5.0,
    });
    assert_eq!(mild.risk_level, WeatherRiskLevel::Low);
    assert_eq!(mild.heat_index, 20.0, "27°C以下热指数透传气温");

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 复检与升级链路
// ==========================================

#[test]
fn test_follow_up_and_escalation_roundtrip() {
    println!("\n=== 测试：失败 → 复检 + 升级解析 ===");

    let api = SafetyApi::new();
    let definition = glass_work_checklist();

    // 评估: 坠落防护两项失败
    let responses: Vec<_> = definition
        .categories
        .iter()
        .flat_map(|c| c.items.iter())
        .map(|item| response(&item.id, !item.id.starts_with("fp_")))
        .collect();
    let record = api.evaluate_checklist(&definition, &responses).unwrap();
    assert!(!record.result.passed);

    // 复检模板只含坠落防护
    let failed: Vec<String> = vec!["fp_001".to_string(), "fp_002".to_string()];
    let follow_up = api
        .generate_follow_up(&definition, &failed)
        .expect("失败项应产出复检模板");
    assert_eq!(follow_up.categories.len(), 1);
    assert_eq!(follow_up.categories[0].id, "fall_protection");

    // 历史存储判定"重复失败"后,解析组织升级动作
    assert_eq!(
        api.resolve_escalation("repeated_fall_protection_failures"),
        EscalationAction::OshaNotification
    );
    assert_eq!(
        api.resolve_escalation("first_time_minor_issue"),
        EscalationAction::NoEscalation
    );

    println!("=== 测试通过 ===\n");
}
