// ==========================================
// WeatherEngine 引擎集成测试
// ==========================================
// 测试目标: 验证热指数/风寒指数定义域与四档天气风险定级
// 覆盖范围: 公式域外透传 / LOW-MEDIUM-HIGH-EXTREME 档位 / 档位边界
// ==========================================

use site_safety_scoring::domain::hazard::WeatherReading;
use site_safety_scoring::domain::types::WeatherRiskLevel;
use site_safety_scoring::engine::WeatherEngine;

// ==========================================
// 热指数
// ==========================================

#[test]
fn test_heat_index_passthrough_below_threshold() {
    println!("\n=== 测试：27°C以下热指数原样透传 ===");

    let engine = WeatherEngine::new();

    // 公式在27°C以下无意义,返回原始气温
    assert_eq!(engine.heat_index(20.0, 90.0), 20.0);
    assert_eq!(engine.heat_index(26.9, 100.0), 26.9);

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_heat_index_regression_above_threshold() {
    println!("\n=== 测试：高温高湿热指数显著高于气温 ===");

    let engine = WeatherEngine::new();

    let hi = engine.heat_index(45.0, 80.0);
    assert!(hi > 40.0, "45°C/80%湿度的热指数应超过40°C, 实际 {}", hi);
    // 回归结果已取整
    assert_eq!(hi, hi.round());

    // 32°C/60%湿度 → 体感约37°C
    assert_eq!(engine.heat_index(32.0, 60.0), 37.0);

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 风寒指数
// ==========================================

#[test]
fn test_wind_chill_passthrough_outside_domain() {
    println!("\n=== 测试：风寒公式域外原样透传 ===");

    let engine = WeatherEngine::new();

    // 气温高于10°C不适用
    assert_eq!(engine.wind_chill(15.0, 20.0), 15.0);
    // 风速低于4.8km/h不适用
    assert_eq!(engine.wind_chill(5.0, 3.0), 5.0);

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_wind_chill_regression_in_domain() {
    println!("\n=== 测试：低温大风风寒计算 ===");

    let engine = WeatherEngine::new();

    // -5°C / 30km/h → 体感约-13°C
    assert_eq!(engine.wind_chill(-5.0, 30.0), -13.0);

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 天气风险定级
// ==========================================

#[test]
fn test_weather_risk_level_extreme_by_heat() {
    println!("\n=== 测试：EXTREME - 热指数超40 ===");

    let engine = WeatherEngine::new();
    let level = engine.weather_risk_level(45.0, 80.0, 10.0);

    assert_eq!(level, WeatherRiskLevel::Extreme, "热指数超40应为EXTREME");

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_weather_risk_level_low_in_mild_conditions() {
    println!("\n=== 测试：LOW - 温和天气 ===");

    let engine = WeatherEngine::new();
    let level = engine.weather_risk_level(20.0, 50.0, 5.0);

    assert_eq!(level, WeatherRiskLevel::Low, "温和天气应为LOW");

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_weather_risk_level_tiers_by_wind_speed() {
    println!("\n=== 测试：风速档位 (top-down 首个命中) ===");

    let engine = WeatherEngine::new();

    // 风速>50 → EXTREME
    assert_eq!(
        engine.weather_risk_level(20.0, 50.0, 55.0),
        WeatherRiskLevel::Extreme
    );
    // 风速恰为50不触发EXTREME,落入HIGH (>30)
    assert_eq!(
        engine.weather_risk_level(20.0, 50.0, 50.0),
        WeatherRiskLevel::High
    );
    // 风速25 → MEDIUM (>20)
    assert_eq!(
        engine.weather_risk_level(20.0, 50.0, 25.0),
        WeatherRiskLevel::Medium
    );
    // 风速20恰好不超 → LOW
    assert_eq!(
        engine.weather_risk_level(20.0, 50.0, 20.0),
        WeatherRiskLevel::Low
    );

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_weather_risk_level_by_wind_chill() {
    println!("\n=== 测试：风寒档位 ===");

    let engine = WeatherEngine::new();

    // -5°C/30km/h 风寒约-13°C → HIGH (<-10)
    assert_eq!(
        engine.weather_risk_level(-5.0, 50.0, 30.0),
        WeatherRiskLevel::High
    );

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_weather_risk_level_medium_by_heat_index() {
    println!("\n=== 测试：MEDIUM - 热指数(30,35] ===");

    let engine = WeatherEngine::new();

    // 31°C/55%湿度 → 热指数约34°C → MEDIUM
    assert_eq!(
        engine.weather_risk_level(31.0, 55.0, 5.0),
        WeatherRiskLevel::Medium
    );

    println!("=== 测试通过 ===\n");
}

// ==========================================
// 评估结果 (含原因)
// ==========================================

#[test]
fn test_assess_returns_explained_result() {
    println!("\n=== 测试：气象评估输出可解释原因 ===");

    let engine = WeatherEngine::new();
    let assessment = engine.assess(&WeatherReading {
        temperature_c: 45.0,
        humidity_pct: 80.0,
        wind_speed_kph: 10.0,
    });

    println!("  - 风险等级: {:?}", assessment.risk_level);
    println!("  - 原因: {}", assessment.reason);

    assert_eq!(assessment.risk_level, WeatherRiskLevel::Extreme);
    assert!(assessment.heat_index > 40.0);

    let reason: serde_json::Value = serde_json::from_str(&assessment.reason).unwrap();
    assert_eq!(reason["level"], "EXTREME");
    assert!(reason["reasons"].as_array().map_or(false, |r| !r.is_empty()));

    println!("=== 测试通过 ===\n");
}
