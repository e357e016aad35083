// ==========================================
// RiskEngine 引擎集成测试
// ==========================================
// 测试目标: 验证风险因子合并、评分与四档定级
// 覆盖范围: 合并规则 / 空输入契约 / 档位闭区间边界
// ==========================================

use site_safety_scoring::domain::hazard::HazardFactor;
use site_safety_scoring::domain::types::HazardRiskLevel;
use site_safety_scoring::engine::{EngineError, RiskEngine};

// ==========================================
// 合并规则
// ==========================================

#[test]
fn test_combine_takes_max_severity_and_mean_probability() {
    println!("\n=== 测试：severity取最大值, probability取均值 ===");

    let engine = RiskEngine::new();
    let factors = vec![
        HazardFactor::new(9, 7, "Fall from height"),
        HazardFactor::new(8, 5, "Heavy machinery operation"),
    ];

    let combined = engine.combine(&factors).unwrap();

    println!("  - 合并结果: severity={}, probability={}", combined.severity, combined.probability);

    assert_eq!(combined.severity, 9, "severity应取最大值9");
    assert_eq!(combined.probability, 6, "probability应为round((7+5)/2)=6");

    let score = engine.risk_score(combined.severity, combined.probability);
    assert_eq!(score, 54, "风险评分应为9×6=54");
    assert_eq!(
        engine.risk_level(score),
        HazardRiskLevel::Critical,
        "54分应为CRITICAL"
    );

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_combine_rounds_mean_probability_half_up() {
    println!("\n=== 测试：probability均值四舍五入 ===");

    let engine = RiskEngine::new();
    let factors = vec![
        HazardFactor::new(5, 7, "a"),
        HazardFactor::new(5, 4, "b"),
    ];

    // (7+4)/2 = 5.5 → 6
    let combined = engine.combine(&factors).unwrap();
    assert_eq!(combined.probability, 6);

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_combine_single_factor_is_identity_on_numbers() {
    let engine = RiskEngine::new();
    let combined = engine
        .combine(&[HazardFactor::new(7, 6, "Chemical exposure")])
        .unwrap();
    assert_eq!(combined.severity, 7);
    assert_eq!(combined.probability, 6);
}

// ==========================================
// 空输入契约
// ==========================================

#[test]
fn test_combine_empty_input_is_an_error() {
    println!("\n=== 测试：空因子列表 → EmptyHazardFactors ===");

    let engine = RiskEngine::new();
    let err = engine.combine(&[]).expect_err("空输入必须报错");

    assert!(matches!(err, EngineError::EmptyHazardFactors));

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 档位边界 (下界闭区间)
// ==========================================

#[test]
fn test_risk_level_tier_boundaries() {
    println!("\n=== 测试：风险档位边界 50/30/15 ===");

    let engine = RiskEngine::new();

    assert_eq!(engine.risk_level(100), HazardRiskLevel::Critical);
    assert_eq!(engine.risk_level(50), HazardRiskLevel::Critical, "恰好50为CRITICAL");
    assert_eq!(engine.risk_level(49), HazardRiskLevel::High);
    assert_eq!(engine.risk_level(30), HazardRiskLevel::High, "恰好30为HIGH");
    assert_eq!(engine.risk_level(29), HazardRiskLevel::Medium);
    assert_eq!(engine.risk_level(15), HazardRiskLevel::Medium, "恰好15为MEDIUM");
    assert_eq!(engine.risk_level(14), HazardRiskLevel::Low);
    assert_eq!(engine.risk_level(1), HazardRiskLevel::Low);

    println!("=== 测试通过 ===\n");
}
